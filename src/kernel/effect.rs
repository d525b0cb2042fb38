#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetClipboardText(String),
}
