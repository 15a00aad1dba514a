//! Encoding configuration and file loading.
//!
//! A configuration is the ordered char set plus the target length. Files
//! are TOML, with `groups` as an array of tables at the top level:
//!
//! ```toml
//! length = 10
//!
//! [[groups]]
//! name = "vowels"
//! chars = "aeiou"
//! required = true
//! ```

use crate::alphabet::{AlphabetError, CharGroup, CharSet};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output length used when none is configured.
pub const DEFAULT_LENGTH: usize = 16;

/// Everything `encode` needs besides the input bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ConfigFile", into = "ConfigFile")]
pub struct Configuration {
    /// Exact output length in bytes.
    pub length: usize,
    /// Character groups, in draw order.
    pub charset: CharSet,
}

/// File layout: `length` and `groups` side by side at the top level.
///
/// Unknown keys are errors, so a misspelled `length` cannot silently fall
/// back to the default.
#[derive(Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    length: usize,
    groups: Vec<CharGroup>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Configuration::default().into()
    }
}

impl From<ConfigFile> for Configuration {
    fn from(file: ConfigFile) -> Self {
        Self::new(CharSet::new(file.groups), file.length)
    }
}

impl From<Configuration> for ConfigFile {
    fn from(config: Configuration) -> Self {
        Self {
            length: config.length,
            groups: config.charset.groups,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            charset: CharSet::standard(),
        }
    }
}

impl Configuration {
    /// Creates a configuration from a char set and length.
    pub fn new(charset: CharSet, length: usize) -> Self {
        Self { length, charset }
    }

    /// The standard char set with a custom length.
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }

    /// Validates the char set.
    ///
    /// Length is checked at encode time, where the error carries both the
    /// requested and minimum values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.charset.validate()?;
        Ok(())
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Loads and validates a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileRead(e.to_string()))?;
        let config = Self::from_toml(&content)?;

        tracing::debug!(
            path = %path.as_ref().display(),
            groups = config.charset.groups.len(),
            length = config.length,
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration loading errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    FileRead(String),
    /// The TOML was malformed or had unknown keys.
    #[error("failed to parse config file: {0}")]
    Parse(String),
    /// The configuration could not be rendered as TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(String),
    /// The char set failed validation.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] AlphabetError),
}
