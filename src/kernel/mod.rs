//! Headless application core (engine, state, action, effect).
//!
//! Nothing in here depends on terminal crates so the engine and the form logic can be driven by
//! any frontend, or by tests.

pub mod action;
pub mod convert;
pub mod effect;
pub mod format;
pub mod state;
pub mod store;
pub mod unit;

pub use action::Action;
pub use convert::{
    convert, convert_text, ConversionResult, ConvertError, Measurement, UnitPolicy,
};
pub use effect::Effect;
pub use format::format_value;
pub use state::{
    AppState, Button, FocusTarget, FormConfig, InputFieldState, Notice, NoticeSeverity,
};
pub use store::{DispatchResult, Store};
pub use unit::Unit;
