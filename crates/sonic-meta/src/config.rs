//! Configuration for the metadata layer.
//!
//! Loaded from JSON. Every field has a default, so an empty object (or a
//! missing field) yields the values the SAI headers use.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Limits and switches of the validation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaConfig {
    /// Upper bound for attribute counts, list lengths and counter counts
    #[serde(default = "default_max_list_count")]
    pub max_list_count: usize,

    /// Character data must be strictly shorter than this
    #[serde(default = "default_max_chardata_len")]
    pub max_chardata_len: usize,

    /// Initial state of the test-mode escapes
    #[serde(default)]
    pub unittests_enabled: bool,
}

fn default_max_list_count() -> usize {
    0x1000
}

fn default_max_chardata_len() -> usize {
    // SAI_HOSTIF_NAME_SIZE
    32
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            max_list_count: default_max_list_count(),
            max_chardata_len: default_max_chardata_len(),
            unittests_enabled: false,
        }
    }
}

impl MetaConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: MetaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_list_count == 0 {
            return Err(ConfigError::Invalid(
                "max_list_count must be > 0".to_string(),
            ));
        }

        if self.max_chardata_len < 2 {
            return Err(ConfigError::Invalid(
                "max_chardata_len must leave room for one character".to_string(),
            ));
        }

        Ok(())
    }
}
