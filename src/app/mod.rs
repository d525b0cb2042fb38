//! Terminal form: input routing, theme and rendering on top of the headless kernel.

pub mod converter;
mod render;
pub mod theme;

pub use converter::{ConverterApp, EventResult};
pub use render::{FOOTER_HINT, TITLE};
pub use theme::UiTheme;
