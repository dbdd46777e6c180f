//! Error types for socialviz-core
//!
//! Wraps the errors of the lower crates so that pipeline callers deal with
//! a single type.

use socialviz_io::IoError;
use socialviz_stats::StatsError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for socialviz operations
#[derive(Error, Debug)]
pub enum SocialVizError {
    /// Summary computation errors
    #[error("Statistics failed: {0}")]
    Stats(#[from] StatsError),

    /// Reading or writing tables
    #[error("Data I/O failed: {0}")]
    Data(#[from] IoError),

    /// Renderer errors
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// JSON output
    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Output directory could not be prepared
    #[error("Cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by a renderer while consuming shapes
#[derive(Error, Debug)]
pub enum RenderError {
    /// Shape whose position or size is not a finite number
    #[error("Cannot draw {kind} for group {group}: non-finite geometry")]
    InvalidGeometry { kind: String, group: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Result type alias for socialviz operations
pub type CoreResult<T> = Result<T, SocialVizError>;

/// Result type alias for render operations
pub type RenderResult<T> = Result<T, RenderError>;
