//! Source file loading.

use crate::error::LoadError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A source file read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    text: String,
}

impl SourceFile {
    /// Wrap text that is already in memory.
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Read `path` from disk.
    ///
    /// Files larger than `max_size` bytes are rejected before reading.
    /// Invalid UTF-8 sequences are replaced with U+FFFD.
    pub fn load(path: impl AsRef<Path>, max_size: Option<u64>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let io_error = |source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(limit) = max_size {
            let size = fs::metadata(path).map_err(io_error)?.len();
            if size > limit {
                return Err(LoadError::TooLarge {
                    path: path.to_path_buf(),
                    size,
                    limit,
                });
            }
        }

        let bytes = fs::read(path).map_err(io_error)?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                warn!(path = %path.display(), "invalid UTF-8, replacing bad sequences");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };

        debug!(path = %path.display(), bytes = text.len(), "loaded source");
        Ok(Self::new(path, text))
    }

    /// Where the text came from.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}
