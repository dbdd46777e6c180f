//! Data reader trait and common types
//!
//! The `DataReader` trait provides a uniform interface for loading social
//! media rows regardless of the delimiter or file flavour.

use crate::schema::SocialMediaRow;
use thiserror::Error;

/// Errors that can occur during I/O operations
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// Trait for loading social media rows from a source
pub trait DataReader: Send + Sync {
    /// Read every row in source order
    fn read_rows(&self) -> IoResult<Vec<SocialMediaRow>>;
}

/// A boxed reader for dynamic dispatch
pub type BoxedReader = Box<dyn DataReader>;

/// Open a file and return an appropriate reader
///
/// The delimiter is chosen from the file extension.
pub fn open_file(path: &str) -> IoResult<BoxedReader> {
    use crate::csv_reader::CsvReader;

    let extension = path
        .rsplit('.')
        .next()
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => Ok(Box::new(CsvReader::open(path)?)),
        "tsv" => Ok(Box::new(CsvReader::open_with_delimiter(path, b'\t')?)),
        _ => Err(IoError::InvalidFormat(format!(
            "Unknown file extension: {}",
            extension
        ))),
    }
}
