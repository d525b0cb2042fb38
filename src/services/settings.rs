//! User settings: an optional JSON file under the platform config directory.

use crate::kernel::{FormConfig, Unit, UnitPolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "tconv";
const SETTINGS_FILE: &str = "settings.json";
pub const SETTINGS_ENV: &str = "TCONV_SETTINGS";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_unit: Option<Unit>,
    /// Refuse to convert when no unit is selected instead of assuming Celsius.
    #[serde(default)]
    pub strict_unit: bool,
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub theme: ThemeSettings,
}

impl Settings {
    pub fn form_config(&self) -> FormConfig {
        FormConfig {
            default_unit: self.default_unit.unwrap_or_default(),
            unit_policy: UnitPolicy::from_strict(self.strict_unit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_bg: Option<String>,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn get_settings_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(SETTINGS_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }
    get_config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

/// `Ok(None)` when the file does not exist.
pub fn load_settings_from(path: &Path) -> Result<Option<Settings>, SettingsError> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&data)
        .map(Some)
        .map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Loads settings from the default location. Problems are logged and fall back to defaults.
pub fn load_settings() -> Settings {
    let Some(path) = get_settings_path() else {
        tracing::debug!("no settings directory for this platform");
        return Settings::default();
    };

    match load_settings_from(&path) {
        Ok(Some(settings)) => {
            tracing::info!(path = %path.display(), "settings loaded");
            settings
        }
        Ok(None) => Settings::default(),
        Err(err) => {
            tracing::warn!(error = %err, "using default settings");
            Settings::default()
        }
    }
}

pub fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Application Support"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".config"));
    }

    #[cfg(target_os = "windows")]
    {
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(APP_DIR).join("logs"))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

#[cfg(test)]
#[path = "../../tests/unit/services/settings.rs"]
mod tests;
