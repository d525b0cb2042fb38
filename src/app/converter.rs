//! The converter form: routes input to the store and collects effects for the runtime.

use super::theme::UiTheme;
use crate::core::event::{InputEvent, Key, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crate::core::Command;
use crate::kernel::{Action, AppState, Effect, FocusTarget, Store, Unit};
use crate::services::{KeybindingContext, KeybindingService, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}

impl EventResult {
    pub fn is_quit(&self) -> bool {
        matches!(self, EventResult::Quit)
    }
}

pub struct ConverterApp {
    pub(super) store: Store,
    pub(super) theme: UiTheme,
    keybindings: KeybindingService,
    pending_effects: Vec<Effect>,
}

impl ConverterApp {
    pub fn new(settings: &Settings) -> Self {
        let mut keybindings = KeybindingService::new();
        let applied = keybindings.apply_rules(&settings.keybindings);
        if applied > 0 {
            tracing::info!(applied, "custom keybindings applied");
        }

        Self::with_parts(
            AppState::new(settings.form_config()),
            keybindings,
            UiTheme::from_settings(&settings.theme),
        )
    }

    pub fn with_parts(state: AppState, keybindings: KeybindingService, theme: UiTheme) -> Self {
        Self {
            store: Store::new(state),
            theme,
            keybindings,
            pending_effects: Vec::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn theme(&self) -> &UiTheme {
        &self.theme
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().should_quit
    }

    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.pending_effects)
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        let result = match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Paste(text) => {
                if self.state().focus == FocusTarget::Input && !self.state().is_modal() {
                    self.dispatch(Action::InputPaste(text.clone()))
                } else {
                    EventResult::Ignored
                }
            }
            InputEvent::Resize(..) => EventResult::Consumed,
            InputEvent::FocusGained | InputEvent::FocusLost => EventResult::Ignored,
        };

        if self.should_quit() {
            EventResult::Quit
        } else {
            result
        }
    }

    fn handle_key(&mut self, event: &KeyEvent) -> EventResult {
        if event.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }

        let key = Key::from(*event);
        let state = self.store.state();

        if state.is_modal() {
            let command = self.keybindings.resolve(KeybindingContext::Global, &key);
            let action = match command {
                Some(Command::Quit) => Action::Quit,
                _ => Action::DismissNotice,
            };
            return self.dispatch(action);
        }

        let focus = state.focus;
        if let Some(action) = focused_key_action(focus, state.selected_button, &key) {
            return self.dispatch(action);
        }

        let context = match focus {
            FocusTarget::Input => KeybindingContext::Input,
            FocusTarget::Unit => KeybindingContext::Unit,
            FocusTarget::Buttons => KeybindingContext::Buttons,
        };
        if let Some(command) = self.keybindings.resolve(context, &key).copied() {
            return self.dispatch(command_action(command));
        }

        if focus == FocusTarget::Input {
            if let Some(action) = input_edit_action(event) {
                return self.dispatch(action);
            }
        }

        EventResult::Ignored
    }

    fn dispatch(&mut self, action: Action) -> EventResult {
        let result = self.store.dispatch(action);
        let consumed = result.state_changed || !result.effects.is_empty();
        self.pending_effects.extend(result.effects);
        if consumed {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

fn command_action(command: Command) -> Action {
    match command {
        Command::Convert => Action::Convert,
        Command::Clear => Action::Clear,
        Command::Quit => Action::Quit,
        Command::About => Action::ToggleAbout,
        Command::NextUnit => Action::NextUnit,
        Command::PrevUnit => Action::PrevUnit,
        Command::FocusNext => Action::FocusNext,
        Command::FocusPrev => Action::FocusPrev,
        Command::CopyResults => Action::CopyResults,
    }
}

/// Keys that only mean something on the focused widget and win over bindings.
fn focused_key_action(
    focus: FocusTarget,
    selected: crate::kernel::Button,
    key: &Key,
) -> Option<Action> {
    let plain = key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT;
    match focus {
        FocusTarget::Buttons if key.modifiers.is_empty() => match key.code {
            KeyCode::Left => Some(Action::SelectButton(selected.prev())),
            KeyCode::Right => Some(Action::SelectButton(selected.next())),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ActivateButton),
            _ => None,
        },
        FocusTarget::Unit if plain => match key.code {
            KeyCode::Char(' ') => Some(Action::NextUnit),
            KeyCode::Backspace | KeyCode::Delete => Some(Action::DeselectUnit),
            KeyCode::Char(ch) => Unit::parse(&ch.to_string()).map(Action::SelectUnit),
            _ => None,
        },
        _ => None,
    }
}

fn input_edit_action(event: &KeyEvent) -> Option<Action> {
    if event.modifiers.contains(KeyModifiers::CONTROL)
        || event.modifiers.contains(KeyModifiers::ALT)
    {
        return None;
    }

    match event.code {
        KeyCode::Char(ch) => Some(Action::InputInsert(ch)),
        KeyCode::Backspace => Some(Action::InputBackspace),
        KeyCode::Delete => Some(Action::InputDelete),
        KeyCode::Left => Some(Action::InputCursorLeft),
        KeyCode::Right => Some(Action::InputCursorRight),
        KeyCode::Home => Some(Action::InputCursorHome),
        KeyCode::End => Some(Action::InputCursorEnd),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/converter.rs"]
mod tests;
