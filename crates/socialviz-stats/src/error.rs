//! Error types for socialviz-stats

use thiserror::Error;

/// Errors raised while summarizing values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// A value was NaN or infinite. The whole computation is aborted.
    #[error("Invalid value {value} for group '{group_key}' at record {index}")]
    InvalidValue {
        /// Position of the offending record in the input sequence
        index: usize,
        group_key: String,
        value: f64,
    },
}

/// Result type alias for statistics operations
pub type StatsResult<T> = Result<T, StatsError>;
