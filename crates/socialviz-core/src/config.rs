//! Configuration for socialviz
//!
//! Covers the default grouping column, rounding of derived averages and
//! the names of the files written by `prepare`. Loadable from TOML or JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use socialviz_io::GroupField;

use crate::error::ConfigError;

/// Largest rounding precision accepted
const MAX_DECIMALS: u32 = 12;

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Column used to group rows for box plot summaries
    pub group_field: GroupField,
    /// Decimals kept in the per-platform averages table
    pub rounding_decimals: u32,
    /// Output table settings
    pub output: OutputConfig,
}

/// Names of the derived tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub averages_file: String,
    pub time_series_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            group_field: GroupField::AgeGroup,
            rounding_decimals: 2,
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            averages_file: "SocialMediaAvg.csv".to_string(),
            time_series_file: "SocialMediaTime.csv".to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Load and validate a config file, picking the format from its extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => {
                Self::from_json(&text).map_err(|e| ConfigError::Parse(e.to_string()))?
            }
            _ => Self::from_toml(&text)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounding_decimals > MAX_DECIMALS {
            return Err(ConfigError::OutOfRange(format!(
                "rounding_decimals must be at most {}",
                MAX_DECIMALS
            )));
        }

        let output = &self.output;
        if output.averages_file.trim().is_empty() || output.time_series_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "output file names must not be empty".to_string(),
            ));
        }

        if output.averages_file == output.time_series_file {
            return Err(ConfigError::InvalidValue(
                "averages_file and time_series_file must differ".to_string(),
            ));
        }

        Ok(())
    }
}
