//! `glossa.json` parsing.
//!
//! Every field is optional. Command-line flags are applied on top with
//! [`Config::merge`].

use crate::error::{LoadError, UnknownFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "glossa.json";

/// How extracted tokens are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line.
    #[default]
    Lines,
    /// One `count<TAB>token` line per distinct token, in first-seen order.
    Counts,
    /// A JSON array of `{ "file", "tokens" }` objects.
    Json,
}

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lines" => Ok(OutputFormat::Lines),
            "counts" => Ok(OutputFormat::Counts),
            "json" => Ok(OutputFormat::Json),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Lines => write!(f, "lines"),
            OutputFormat::Counts => write!(f, "counts"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Settings for the `glossa` tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    pub format: Option<OutputFormat>,
    pub max_file_size: Option<u64>,
    pub time: Option<bool>,
}

impl Config {
    /// Values set in `overrides` win over values set in `self`.
    pub fn merge(self, overrides: Config) -> Config {
        Config {
            format: overrides.format.or(self.format),
            max_file_size: overrides.max_file_size.or(self.max_file_size),
            time: overrides.time.or(self.time),
        }
    }

    #[inline]
    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    #[inline]
    pub fn time(&self) -> bool {
        self.time.unwrap_or(false)
    }
}

/// Parse config JSON text.
pub fn parse_config(text: &str) -> Result<Config, serde_json::Error> {
    serde_json::from_str(text)
}

/// Read and parse a config file.
pub fn load_config_file(path: impl AsRef<Path>) -> Result<Config, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text).map_err(|source| LoadError::Config {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case() {
        let config = parse_config(r#"{ "format": "counts", "maxFileSize": 1024 }"#).unwrap();
        assert_eq!(config.format(), OutputFormat::Counts);
        assert_eq!(config.max_file_size, Some(1024));
        assert!(!config.time());
    }

    #[test]
    fn test_parse_empty_object() {
        assert_eq!(parse_config("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(parse_config(r#"{ "fromat": "json" }"#).is_err());
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let file = Config {
            format: Some(OutputFormat::Json),
            max_file_size: Some(10),
            time: None,
        };
        let cli = Config {
            format: Some(OutputFormat::Lines),
            max_file_size: None,
            time: Some(true),
        };
        let merged = file.merge(cli);
        assert_eq!(merged.format(), OutputFormat::Lines);
        assert_eq!(merged.max_file_size, Some(10));
        assert!(merged.time());
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(
            "xml".parse::<OutputFormat>(),
            Err(UnknownFormat("xml".to_string()))
        );
        assert_eq!(OutputFormat::Counts.to_string(), "counts");
    }
}
