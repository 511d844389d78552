use crate::app::mode::AppMode;
use crate::engine::SplitOptions;

/// Render state for UI components
pub struct RenderState {
    pub mode: AppMode,
    pub input: String,
    pub names: Vec<String>,
    pub options: SplitOptions,
    pub auto_copy: bool,
    pub status: String,
    pub command_buffer: String,
}

impl RenderState {
    /// Create an empty render state for a fresh session
    pub fn empty(mode: AppMode) -> Self {
        Self {
            mode,
            input: String::new(),
            names: vec![],
            options: SplitOptions::default(),
            auto_copy: true,
            status: String::new(),
            command_buffer: String::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// One-line summary of the active options.
    pub fn options_summary(&self) -> String {
        let flag = |on: bool| if on { "on" } else { "off" };
        format!(
            "dedupe {} · trim {} · auto-copy {}",
            flag(self.options.deduplicate),
            flag(self.options.trim_whitespace),
            flag(self.auto_copy)
        )
    }
}
