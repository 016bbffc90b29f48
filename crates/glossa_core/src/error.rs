//! Errors raised while reading inputs.
//!
//! Tokenization itself cannot fail; everything here happens before the
//! tokenizer sees any text.

use std::path::PathBuf;
use thiserror::Error;

/// A source or config file could not be used.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{}` is {size} bytes, over the {limit} byte limit", .path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("invalid config file `{}`", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// The file the error is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Io { path, .. }
            | LoadError::TooLarge { path, .. }
            | LoadError::Config { path, .. } => path,
        }
    }
}

/// An output format name that is not one of `lines`, `counts` or `json`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output format `{0}` (expected lines, counts or json)")]
pub struct UnknownFormat(pub String);
