//! Services: key bindings and user settings.

pub mod keybinding;
pub mod settings;

pub use keybinding::{KeybindingContext, KeybindingService};
pub use settings::{load_settings, KeybindingRule, Settings, SettingsError, ThemeSettings};
