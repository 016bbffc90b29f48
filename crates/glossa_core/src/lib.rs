//! glossa_core: Shared plumbing around the tokenizer.
//!
//! Provides source file loading, the errors loading can produce, and the
//! `glossa.json` configuration file.

pub mod config;
pub mod error;
pub mod source;

// Re-export commonly used types
pub use config::{Config, OutputFormat, DEFAULT_CONFIG_FILE};
pub use error::{LoadError, UnknownFormat};
pub use source::SourceFile;
