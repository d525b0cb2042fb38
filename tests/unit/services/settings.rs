use super::*;
use std::io::Write;
use tempfile::tempdir;

#[test]
fn missing_file_is_not_an_error() {
    let dir = tempdir().unwrap();
    let loaded = load_settings_from(&dir.path().join("settings.json")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn parses_full_settings_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r##"{{
            "default_unit": "kelvin",
            "strict_unit": true,
            "keybindings": [{{ "key": "ctrl+enter", "command": "convert", "context": "input" }}],
            "theme": {{ "accent_fg": "#FF8800", "error_fg": "light_red" }}
        }}"##
    )
    .unwrap();

    let settings = load_settings_from(&path).unwrap().unwrap();
    assert_eq!(settings.default_unit, Some(Unit::Kelvin));
    assert!(settings.strict_unit);
    assert_eq!(settings.keybindings.len(), 1);
    assert_eq!(settings.keybindings[0].context.as_deref(), Some("input"));
    assert_eq!(settings.theme.accent_fg.as_deref(), Some("#FF8800"));

    let config = settings.form_config();
    assert_eq!(config.default_unit, Unit::Kelvin);
    assert_eq!(config.unit_policy, UnitPolicy::Strict);
}

#[test]
fn empty_object_gives_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, Settings::default());
    let config = settings.form_config();
    assert_eq!(config.default_unit, Unit::Celsius);
    assert_eq!(config.unit_policy, UnitPolicy::DefaultCelsius);
}

#[test]
fn malformed_file_reports_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ \"default_unit\": \"rankine\" }").unwrap();

    let err = load_settings_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
    assert!(err.to_string().contains("settings.json"));
}

#[test]
fn defaults_serialize_compactly() {
    let json = serde_json::to_string(&Settings::default()).unwrap();
    assert_eq!(json, r#"{"strict_unit":false,"keybindings":[],"theme":{}}"#);
}
