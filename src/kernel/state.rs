use super::convert::{ConversionResult, ConvertError, UnitPolicy};
use super::unit::Unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormConfig {
    pub default_unit: Unit,
    pub unit_policy: UnitPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Input,
    Unit,
    Buttons,
}

impl FocusTarget {
    pub fn next(self) -> Self {
        match self {
            FocusTarget::Input => FocusTarget::Unit,
            FocusTarget::Unit => FocusTarget::Buttons,
            FocusTarget::Buttons => FocusTarget::Input,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FocusTarget::Input => FocusTarget::Buttons,
            FocusTarget::Unit => FocusTarget::Input,
            FocusTarget::Buttons => FocusTarget::Unit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Button {
    #[default]
    Convert,
    Clear,
    Exit,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::Convert, Button::Clear, Button::Exit];

    pub fn label(self) -> &'static str {
        match self {
            Button::Convert => "Convert",
            Button::Clear => "Clear",
            Button::Exit => "Exit",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Button::Convert => Button::Clear,
            Button::Clear => Button::Exit,
            Button::Exit => Button::Convert,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Button::Convert => Button::Exit,
            Button::Clear => Button::Convert,
            Button::Exit => Button::Clear,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Warning,
    Error,
}

/// Blocking notification shown on top of the form until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub title: String,
    pub message: String,
}

impl From<ConvertError> for Notice {
    fn from(err: ConvertError) -> Self {
        let severity = if err.is_warning() {
            NoticeSeverity::Warning
        } else {
            NoticeSeverity::Error
        };
        Self {
            severity,
            title: err.title().to_string(),
            message: err.to_string(),
        }
    }
}

/// Single-line text field with a byte cursor kept on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFieldState {
    pub text: String,
    pub cursor: usize,
}

impl InputFieldState {
    pub fn insert(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.cursor = self.cursor.min(self.text.len());
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
        true
    }

    pub fn insert_str(&mut self, s: &str) -> bool {
        let mut changed = false;
        for ch in s.chars() {
            changed |= self.insert(ch);
        }
        changed
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.text.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        let next = self.next_boundary();
        self.text.drain(self.cursor..next);
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor = self.prev_boundary();
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        self.cursor = self.next_boundary();
        true
    }

    pub fn move_home(&mut self) -> bool {
        let changed = self.cursor != 0;
        self.cursor = 0;
        changed
    }

    pub fn move_end(&mut self) -> bool {
        let end = self.text.len();
        let changed = self.cursor != end;
        self.cursor = end;
        changed
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.text.is_empty() || self.cursor != 0;
        self.text.clear();
        self.cursor = 0;
        changed
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|ch| self.cursor + ch.len_utf8())
            .unwrap_or(self.text.len())
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: FormConfig,
    pub input: InputFieldState,
    /// `None` when the selector has nothing selected.
    pub unit: Option<Unit>,
    pub results: Option<ConversionResult>,
    pub notice: Option<Notice>,
    pub about_visible: bool,
    pub focus: FocusTarget,
    pub selected_button: Button,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            input: InputFieldState::default(),
            unit: Some(config.default_unit),
            results: None,
            notice: None,
            about_visible: false,
            focus: FocusTarget::Input,
            selected_button: Button::Convert,
            should_quit: false,
        }
    }

    /// Something modal is on screen and swallows input.
    pub fn is_modal(&self) -> bool {
        self.notice.is_some() || self.about_visible
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
