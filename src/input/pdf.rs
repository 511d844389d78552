use super::{LoadError, LoadedText};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load text from a PDF form using pdf-extract.
///
/// Donation and tax-exemption forms usually arrive as PDFs; the extracted
/// text still carries the form labels, which preprocessing removes.
pub fn load(path: &str) -> Result<LoadedText, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    // Read PDF file into memory
    let mut file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = pdf_extract::extract_text_from_mem(&buffer).map_err(|e| LoadError::PdfParse(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyInput(path.display().to_string()));
    }

    Ok(LoadedText {
        text,
        source: format!("pdf:{}", path.display()),
    })
}
