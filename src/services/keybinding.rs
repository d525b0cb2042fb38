//! Key bindings: key → command, with a context for the focused form field.

use crate::core::event::{Key, KeyCode, KeyModifiers};
use crate::core::Command;
use crate::services::settings::KeybindingRule;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Input,
    Unit,
    Buttons,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "input" | "field" | "temperature" => Some(Self::Input),
            "unit" | "units" | "selector" => Some(Self::Unit),
            "buttons" | "button" => Some(Self::Buttons),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    input: FxHashMap<Key, Command>,
    unit: FxHashMap<Key, Command>,
    buttons: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            input: FxHashMap::default(),
            unit: default_unit_keybindings(),
            buttons: FxHashMap::default(),
        }
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            other => self.map(other).get(key).or_else(|| self.global.get(key)),
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    /// Applies user rules on top of the defaults. Returns how many rules were applied.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) -> usize {
        let mut applied = 0;
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "ignoring keybinding with unparsable key");
                continue;
            };
            let context = match rule.context.as_deref() {
                Some(value) => match KeybindingContext::parse(value) {
                    Some(context) => context,
                    None => {
                        tracing::warn!(
                            context = %value,
                            "ignoring keybinding with unknown context"
                        );
                        continue;
                    }
                },
                None => KeybindingContext::Global,
            };

            let command = rule.command.trim();
            if command.is_empty() || command == "-" {
                self.unbind(context, &key);
                applied += 1;
                continue;
            }
            match Command::from_name(command) {
                Some(command) => {
                    self.bind(context, key, command);
                    applied += 1;
                }
                None => {
                    tracing::warn!(
                        command = %rule.command,
                        "ignoring keybinding with unknown command"
                    );
                }
            }
        }
        applied
    }

    fn map(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::Input => &self.input,
            KeybindingContext::Unit => &self.unit,
            KeybindingContext::Buttons => &self.buttons,
        }
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Input => &mut self.input,
            KeybindingContext::Unit => &mut self.unit,
            KeybindingContext::Buttons => &mut self.buttons,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::simple(KeyCode::Enter), Command::Convert);
    bindings.insert(Key::simple(KeyCode::Esc), Command::Clear);
    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    // Raw mode delivers Ctrl+C as a key, not SIGINT.
    bindings.insert(Key::ctrl(KeyCode::Char('c')), Command::Quit);
    bindings.insert(Key::simple(KeyCode::F(1)), Command::About);
    bindings.insert(Key::ctrl(KeyCode::Char('y')), Command::CopyResults);

    bindings.insert(Key::simple(KeyCode::Tab), Command::FocusNext);
    bindings.insert(Key::simple(KeyCode::BackTab), Command::FocusPrev);
    bindings.insert(Key::shift(KeyCode::BackTab), Command::FocusPrev);

    // Button mnemonics.
    bindings.insert(Key::alt(KeyCode::Char('c')), Command::Convert);
    bindings.insert(Key::alt(KeyCode::Char('l')), Command::Clear);

    bindings
}

fn default_unit_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(4);

    bindings.insert(Key::simple(KeyCode::Up), Command::PrevUnit);
    bindings.insert(Key::simple(KeyCode::Left), Command::PrevUnit);
    bindings.insert(Key::simple(KeyCode::Down), Command::NextUnit);
    bindings.insert(Key::simple(KeyCode::Right), Command::NextUnit);

    bindings
}

pub fn parse_keybinding(value: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part: Option<&str> = None;
    for part in value.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            "super" | "meta" | "cmd" | "command" => modifiers |= KeyModifiers::SUPER,
            _ => key_part = Some(part),
        }
    }
    let key_part = key_part?;
    let mut code = parse_key_code(key_part)?;
    if let KeyCode::Char(ch) = code {
        if ch.is_ascii_uppercase() {
            code = KeyCode::Char(ch.to_ascii_lowercase());
            modifiers |= KeyModifiers::SHIFT;
        }
    }
    Some(Key::new(code, modifiers))
}

fn parse_key_code(value: &str) -> Option<KeyCode> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    let v_lc = v.to_ascii_lowercase();
    let code = match v_lc.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ if v_lc.len() > 1 && v_lc.starts_with('f') => {
            let n = v_lc.strip_prefix('f')?.parse::<u8>().ok()?;
            KeyCode::F(n)
        }
        _ => {
            let mut chars = v.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };

    Some(code)
}

#[cfg(test)]
#[path = "../../tests/unit/services/keybinding.rs"]
mod tests;
