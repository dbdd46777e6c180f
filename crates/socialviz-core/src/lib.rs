//! socialviz-core - Pipeline for social media engagement charts
//!
//! Ties the statistics and I/O crates together:
//!
//! - **Config**: grouping column, rounding and output names (TOML or JSON)
//! - **Pipeline**: `summarize_file` for box plots, `prepare` for the
//!   averaged bar chart and time series tables
//! - **Render**: data-space [`Shape`] lists handed to a [`Renderer`]
//!
//! Drawing itself is out of scope; a renderer maps shapes to pixels.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod render;

pub use config::*;
pub use error::*;
pub use pipeline::*;
pub use render::*;

pub use socialviz_io::GroupField;
pub use socialviz_stats::{GroupedSummaries, Record, Summary};
