use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_DELIMITER_PREFIX: &str = "wp";
pub const DEFAULT_NAMESPACE: &str = "core";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to parse config: {0}")]
    InvalidToml(#[from] toml::de::Error),

    #[error("Invalid delimiter prefix {prefix:?}: expected ASCII letters, digits, '-' or '_'")]
    InvalidPrefix { prefix: String },

    #[error("Invalid default namespace {namespace:?}: expected [a-z][a-z0-9_-]*")]
    InvalidNamespace { namespace: String },
}

/// Settings for the block parser.
///
/// Missing keys fall back to the defaults, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// The word between `<!-- ` and `:` in every delimiter.
    pub delimiter_prefix: String,
    /// Namespace given to block names written without one.
    pub default_namespace: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter_prefix: DEFAULT_DELIMITER_PREFIX.to_string(),
            default_namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl ParserConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ParserConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML config file. A file that does not exist yields `Ok(None)`.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        let content = match std::fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(source) if source.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::ConfigReadError {
                    config_path: config_path.to_path_buf(),
                    source,
                });
            }
        };

        let config: ParserConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(Some(config))
    }

    /// Reject values that no delimiter could ever match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let prefix = &self.delimiter_prefix;
        if prefix.is_empty()
            || !prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ConfigError::InvalidPrefix {
                prefix: prefix.clone(),
            });
        }

        if !is_name_segment(&self.default_namespace) {
            return Err(ConfigError::InvalidNamespace {
                namespace: self.default_namespace.clone(),
            });
        }

        Ok(())
    }
}

/// `[a-z][a-z0-9_-]*`, the shape of each half of a block name.
fn is_name_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}
