/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Split,
    Copy,
    Clear,
    ToggleDedupe,
    ToggleTrim,
    LoadFile(String),
    LoadClipboard,
    Paste(String),
    Quit,
    Help,
    InvalidCommand(String),
    None,
}
