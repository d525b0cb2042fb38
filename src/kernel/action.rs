use super::state::Button;
use super::unit::Unit;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    InputInsert(char),
    InputPaste(String),
    InputBackspace,
    InputDelete,
    InputCursorLeft,
    InputCursorRight,
    InputCursorHome,
    InputCursorEnd,
    SelectUnit(Unit),
    /// Selector reports no selection.
    DeselectUnit,
    NextUnit,
    PrevUnit,
    FocusNext,
    FocusPrev,
    SelectButton(Button),
    ActivateButton,
    Convert,
    Clear,
    CopyResults,
    ToggleAbout,
    DismissNotice,
    Quit,
}
