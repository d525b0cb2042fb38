use super::convert::convert_text;
use super::state::Button;
use super::{Action, AppState, Effect, FocusTarget, Notice};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn unchanged() -> Self {
        Self::changed(false)
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        if self.state.is_modal() {
            return self.dispatch_modal(action);
        }

        match action {
            Action::InputInsert(ch) => DispatchResult::changed(self.state.input.insert(ch)),
            Action::InputPaste(text) => {
                DispatchResult::changed(self.state.input.insert_str(&text))
            }
            Action::InputBackspace => DispatchResult::changed(self.state.input.backspace()),
            Action::InputDelete => DispatchResult::changed(self.state.input.delete()),
            Action::InputCursorLeft => DispatchResult::changed(self.state.input.move_left()),
            Action::InputCursorRight => DispatchResult::changed(self.state.input.move_right()),
            Action::InputCursorHome => DispatchResult::changed(self.state.input.move_home()),
            Action::InputCursorEnd => DispatchResult::changed(self.state.input.move_end()),
            Action::SelectUnit(unit) => {
                let prev = self.state.unit.replace(unit);
                DispatchResult::changed(prev != Some(unit))
            }
            Action::DeselectUnit => DispatchResult::changed(self.state.unit.take().is_some()),
            Action::NextUnit => {
                let unit = self
                    .state
                    .unit
                    .map(|u| u.next())
                    .unwrap_or(self.state.config.default_unit);
                self.state.unit = Some(unit);
                DispatchResult::changed(true)
            }
            Action::PrevUnit => {
                let unit = self
                    .state
                    .unit
                    .map(|u| u.prev())
                    .unwrap_or(self.state.config.default_unit);
                self.state.unit = Some(unit);
                DispatchResult::changed(true)
            }
            Action::FocusNext => {
                self.state.focus = self.state.focus.next();
                DispatchResult::changed(true)
            }
            Action::FocusPrev => {
                self.state.focus = self.state.focus.prev();
                DispatchResult::changed(true)
            }
            Action::SelectButton(button) => {
                let prev_button = self.state.selected_button;
                let prev_focus = self.state.focus;
                self.state.selected_button = button;
                self.state.focus = FocusTarget::Buttons;
                DispatchResult::changed(
                    prev_button != button || prev_focus != FocusTarget::Buttons,
                )
            }
            Action::ActivateButton => match self.state.selected_button {
                Button::Convert => self.convert(),
                Button::Clear => self.clear(),
                Button::Exit => self.quit(),
            },
            Action::Convert => self.convert(),
            Action::Clear => self.clear(),
            Action::CopyResults => match self.state.results {
                Some(results) => DispatchResult {
                    effects: vec![Effect::SetClipboardText(results.summary())],
                    state_changed: false,
                },
                None => DispatchResult::unchanged(),
            },
            Action::ToggleAbout => {
                self.state.about_visible = true;
                DispatchResult::changed(true)
            }
            Action::DismissNotice => DispatchResult::unchanged(),
            Action::Quit => self.quit(),
        }
    }

    fn dispatch_modal(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Quit => self.quit(),
            Action::DismissNotice | Action::ToggleAbout => {
                if self.state.notice.take().is_none() {
                    self.state.about_visible = false;
                }
                DispatchResult::changed(true)
            }
            _ => DispatchResult::unchanged(),
        }
    }

    fn convert(&mut self) -> DispatchResult {
        let raw = self.state.input.text.as_str();
        match convert_text(raw, self.state.unit, self.state.config.unit_policy) {
            Ok(results) => {
                tracing::debug!(
                    input = raw,
                    unit = ?self.state.unit,
                    celsius = results.celsius,
                    fahrenheit = results.fahrenheit,
                    kelvin = results.kelvin,
                    "converted"
                );
                self.state.results = Some(results);
            }
            Err(err) => {
                tracing::info!(
                    input = raw,
                    unit = ?self.state.unit,
                    error = %err,
                    "conversion rejected"
                );
                self.state.notice = Some(Notice::from(err));
            }
        }
        DispatchResult::changed(true)
    }

    fn clear(&mut self) -> DispatchResult {
        self.state.input.clear();
        self.state.unit = Some(self.state.config.default_unit);
        self.state.results = None;
        self.state.focus = FocusTarget::Input;
        self.state.selected_button = Button::Convert;
        DispatchResult::changed(true)
    }

    fn quit(&mut self) -> DispatchResult {
        let changed = !self.state.should_quit;
        self.state.should_quit = true;
        DispatchResult::changed(changed)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
