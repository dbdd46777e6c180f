//! socialviz-io - Data I/O for social media engagement tables
//!
//! This crate reads and writes the CSV tables behind the socialviz charts:
//!
//! - **Raw rows**: one post per row (`Platform`, `PostType`, `AgeGroup`, `Likes`, dates)
//! - **Averages**: mean likes per platform and post type (`SocialMediaAvg.csv`)
//! - **Time series**: mean likes per calendar date (`SocialMediaTime.csv`)
//!
//! # Design
//!
//! Parsing is header-based through `csv` + `serde`. Numeric coercion
//! happens here, at the boundary, so that the statistics layer only ever
//! sees finite numbers or an explicit missing value.

pub mod csv_reader;
pub mod dates;
pub mod reader;
pub mod schema;
pub mod writer;

pub use csv_reader::*;
pub use dates::*;
pub use reader::*;
pub use schema::*;
pub use writer::*;
