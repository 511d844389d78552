//! Clipboard capability detection
//!
//! Decides whether the system clipboard is worth trying before falling
//! back to the terminal's own clipboard (OSC 52).

use std::env;

/// Clipboard support levels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipboardCapability {
    /// System clipboard first, OSC 52 on failure
    Native,
    /// No reachable system clipboard (e.g. SSH without a display): OSC 52 only
    TerminalOnly,
}

impl ClipboardCapability {
    /// Returns true if the system clipboard should be tried
    pub fn supports_native(&self) -> bool {
        matches!(self, ClipboardCapability::Native)
    }
}

/// Clipboard capability detector
pub struct ClipboardDetector;

impl ClipboardDetector {
    pub fn new() -> Self {
        Self
    }

    /// Detect from the process environment.
    pub fn detect(&self) -> ClipboardCapability {
        self.detect_from(|name| env::var(name).ok())
    }

    /// Detect using `lookup` for environment variables.
    ///
    /// Only Linux/BSD desktops need a display server for a clipboard;
    /// macOS and Windows always report `Native`.
    pub fn detect_from<F>(&self, lookup: F) -> ClipboardCapability
    where
        F: Fn(&str) -> Option<String>,
    {
        if cfg!(any(target_os = "macos", target_os = "windows")) {
            return ClipboardCapability::Native;
        }

        let has_display = ["DISPLAY", "WAYLAND_DISPLAY"]
            .iter()
            .any(|name| lookup(name).is_some_and(|value| !value.is_empty()));

        if has_display {
            ClipboardCapability::Native
        } else {
            ClipboardCapability::TerminalOnly
        }
    }

    /// Detect capability from explicit CLI override
    pub fn detect_from_override(&self, terminal_only: bool) -> Option<ClipboardCapability> {
        terminal_only.then_some(ClipboardCapability::TerminalOnly)
    }
}

impl Default for ClipboardDetector {
    fn default() -> Self {
        Self::new()
    }
}
