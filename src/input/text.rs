use super::{LoadError, LoadedText};
use std::io::Read;
use std::path::Path;

/// Load a plain text file. The bytes must be UTF-8 and not blank.
pub fn load(path: &str) -> Result<LoadedText, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|_| LoadError::InvalidEncoding(path.to_path_buf()))?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyInput(path.display().to_string()));
    }

    Ok(LoadedText {
        text,
        source: format!("file:{}", path.display()),
    })
}

/// Read all of stdin as raw bytes; decoding is left to the caller.
pub fn read_stdin() -> Result<Vec<u8>, LoadError> {
    let mut buffer = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buffer)
        .map_err(|source| LoadError::Io {
            path: "<stdin>".into(),
            source,
        })?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    #[test]
    fn test_nonexistent_file_error() {
        let result = load("nonexistent_file_12345.txt");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_empty_file_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "  \n ").unwrap();

        let result = load(file.path().to_str().unwrap());
        assert!(matches!(result, Err(LoadError::EmptyInput(_))));
    }

    #[test]
    fn test_invalid_encoding_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, b'J']).unwrap();

        let result = load(file.path().to_str().unwrap());
        assert!(matches!(result, Err(LoadError::InvalidEncoding(_))));
    }

    #[test]
    fn test_valid_file_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("李成兴 李茹茵\r\nJohn Tan".as_bytes()).unwrap();

        let loaded = load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(loaded.text, "李成兴 李茹茵\r\nJohn Tan");
        assert!(loaded.source.starts_with("file:"));
    }
}
