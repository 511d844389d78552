use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid file encoding (expected UTF-8): {0}")]
    InvalidEncoding(PathBuf),

    #[error("Nothing to split in {0}")]
    EmptyInput(String),
}

/// Raw text pulled from a file, stdin or the clipboard, not yet split.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedText {
    pub text: String,
    pub source: String,
}

pub mod capability;
pub mod clipboard;
pub mod pdf;
pub mod text;

pub use capability::{ClipboardCapability, ClipboardDetector};
pub use clipboard::{Clipboard, SystemClipboard};

/// Load a path, choosing the reader by extension.
pub fn load_path(path: &str) -> Result<LoadedText, LoadError> {
    let is_pdf = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        pdf::load(path)
    } else {
        text::load(path)
    }
}
