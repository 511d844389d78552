#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Typing or pasting into the input pane
    Editing,
    /// Command deck (`:split`, `@file`, ...)
    Command,
    Help,
    Quit,
}
