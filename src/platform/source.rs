// Municode - platform/source.rs
//
// Dataset retrieval behind a trait, so the loading pipeline can be
// exercised without a real file (or with one that fails on purpose).

use crate::util::constants;
use crate::util::error::LoadError;
use std::io;
use std::path::PathBuf;

/// Something that can produce the raw dataset text.
pub trait DataSource: Send {
    /// Fetch the full text. Called once per load.
    fn fetch(&self) -> Result<String, LoadError>;

    /// Human-readable origin for logs and the status line.
    fn describe(&self) -> String;
}

/// Dataset stored in a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    max_size: u64,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_size: constants::MAX_DATA_FILE_SIZE,
        }
    }

    /// Override the size cap (tests use a tiny one).
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }
}

impl DataSource for FileSource {
    fn fetch(&self) -> Result<String, LoadError> {
        let path = &self.path;
        let meta = std::fs::metadata(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path: path.clone() },
            _ => LoadError::Io {
                path: path.clone(),
                source: e,
            },
        })?;

        if meta.len() > self.max_size {
            return Err(LoadError::TooLarge {
                path: path.clone(),
                size: meta.len(),
                max_size: self.max_size,
            });
        }

        let bytes = std::fs::read(path).map_err(|e| LoadError::Io {
            path: path.clone(),
            source: e,
        })?;

        String::from_utf8(bytes).map_err(|e| LoadError::InvalidEncoding {
            path: path.clone(),
            source: e,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Dataset text already held in memory, for callers that obtained it
/// some other way (tests, programmatic use).
#[derive(Debug, Clone)]
pub struct TextSource(pub String);

impl DataSource for TextSource {
    fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "<in-memory>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("absent.csv"));
        assert!(matches!(source.fetch(), Err(LoadError::NotFound { .. })));
    }

    #[test]
    fn test_oversized_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "Name\nA\nB\n").unwrap();
        let source = FileSource::new(&path).with_max_size(4);
        assert!(matches!(
            source.fetch(),
            Err(LoadError::TooLarge { size: 9, max_size: 4, .. })
        ));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, [0x4e, 0xff, 0xfe, 0x0a]).unwrap();
        let source = FileSource::new(&path);
        assert!(matches!(
            source.fetch(),
            Err(LoadError::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn test_reads_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "Name\nМурманск\n").unwrap();
        assert_eq!(FileSource::new(&path).fetch().unwrap(), "Name\nМурманск\n");
    }
}
