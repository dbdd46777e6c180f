//! socialviz-stats - Statistical summaries for grouped chart data
//!
//! This crate provides the numeric core behind the socialviz charts:
//!
//! - **Quantiles**: linear interpolation between closest ranks (R-7)
//! - **Summaries**: per-group five-number summary plus IQR (box plots)
//! - **Means**: per-key arithmetic mean with fixed-decimal rounding (bar and line charts)
//!
//! All functions are pure: they read their input and return fresh values.
//! Non-finite inputs are rejected with [`StatsError::InvalidValue`] instead
//! of leaking NaN into the output.

pub mod error;
pub mod mean;
pub mod quantile;
pub mod summary;

pub use error::*;
pub use mean::*;
pub use quantile::*;
pub use summary::*;
