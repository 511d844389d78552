use super::{ClipboardCapability, LoadError, LoadedText};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::{self, IsTerminal, Write};
use tracing::{debug, warn};

/// Clipboard access used by the front end.
pub trait Clipboard {
    fn read_text(&mut self) -> Result<String, LoadError>;

    /// Returns true when the text was handed to some clipboard.
    fn write_text(&mut self, text: &str) -> bool;
}

/// System clipboard through arboard, with an OSC 52 fallback written to
/// the terminal when the system clipboard is missing or refuses the write.
pub struct SystemClipboard {
    capability: ClipboardCapability,
    // Kept alive: on X11 the owning process serves the clipboard contents.
    native: Option<arboard::Clipboard>,
    // Where OSC 52 goes; `None` disables the fallback.
    terminal: Option<Box<dyn Write>>,
}

impl SystemClipboard {
    /// For the interactive editor, which owns stdout.
    pub fn new(capability: ClipboardCapability) -> Self {
        Self::with_terminal(capability, Box::new(io::stdout()))
    }

    /// For headless runs, where stdout carries the result. OSC 52 goes to
    /// stderr, and only when stderr is a terminal.
    pub fn headless(capability: ClipboardCapability) -> Self {
        if io::stderr().is_terminal() {
            Self::with_terminal(capability, Box::new(io::stderr()))
        } else {
            Self::without_terminal(capability)
        }
    }

    pub fn with_terminal(capability: ClipboardCapability, terminal: Box<dyn Write>) -> Self {
        Self {
            capability,
            native: None,
            terminal: Some(terminal),
        }
    }

    pub fn without_terminal(capability: ClipboardCapability) -> Self {
        Self {
            capability,
            native: None,
            terminal: None,
        }
    }

    fn native(&mut self) -> Result<&mut arboard::Clipboard, arboard::Error> {
        if self.native.is_none() {
            self.native = Some(arboard::Clipboard::new()?);
        }
        self.native.as_mut().ok_or(arboard::Error::ClipboardNotSupported)
    }
}

impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Result<String, LoadError> {
        if !self.capability.supports_native() {
            return Err(LoadError::Clipboard(
                "no system clipboard available in this session".to_string(),
            ));
        }

        self.native()
            .and_then(|clipboard| clipboard.get_text())
            .map_err(|e| LoadError::Clipboard(e.to_string()))
    }

    fn write_text(&mut self, text: &str) -> bool {
        if self.capability.supports_native() {
            match self.native().and_then(|clipboard| clipboard.set_text(text)) {
                Ok(()) => return true,
                Err(err) => debug!(%err, "system clipboard write failed, falling back to OSC 52"),
            }
        }

        let Some(terminal) = self.terminal.as_mut() else {
            debug!("no terminal for OSC 52, clipboard write skipped");
            return false;
        };

        match write_osc52(terminal, text) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "OSC 52 clipboard write failed");
                false
            }
        }
    }
}

/// Escape sequence asking the terminal emulator to set its clipboard.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

pub fn write_osc52<W: Write + ?Sized>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()
}

/// Load the clipboard contents as input text.
pub fn load(clipboard: &mut dyn Clipboard) -> Result<LoadedText, LoadError> {
    let text = clipboard.read_text()?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyInput("clipboard".to_string()));
    }

    Ok(LoadedText {
        text,
        source: "clipboard".to_string(),
    })
}
