//! Semantic commands, independent of the keys that trigger them.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Convert,
    Clear,
    Quit,
    About,
    NextUnit,
    PrevUnit,
    FocusNext,
    FocusPrev,
    CopyResults,
}

impl Command {
    pub const ALL: [Command; 9] = [
        Command::Convert,
        Command::Clear,
        Command::Quit,
        Command::About,
        Command::NextUnit,
        Command::PrevUnit,
        Command::FocusNext,
        Command::FocusPrev,
        Command::CopyResults,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::Convert => "convert",
            Command::Clear => "clear",
            Command::Quit => "quit",
            Command::About => "about",
            Command::NextUnit => "nextUnit",
            Command::PrevUnit => "prevUnit",
            Command::FocusNext => "focusNext",
            Command::FocusPrev => "focusPrev",
            Command::CopyResults => "copyResults",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.name().eq_ignore_ascii_case(name))
            .or(match name {
                "exit" => Some(Command::Quit),
                "help" => Some(Command::About),
                _ => None,
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
