//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the conversion core builds without terminal crates.

pub mod crossterm;
pub mod osc52;
pub mod terminal_guard;
