//! CSV reader for raw social media rows

use crate::reader::{DataReader, IoError, IoResult};
use crate::schema::{SocialMediaRow, REQUIRED_COLUMNS};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// CSV file reader
pub struct CsvReader {
    path: String,
    delimiter: u8,
}

impl CsvReader {
    /// Open a comma-separated file
    pub fn open(path: &str) -> IoResult<Self> {
        Self::open_with_delimiter(path, b',')
    }

    /// Open a delimited file
    pub fn open_with_delimiter(path: &str, delimiter: u8) -> IoResult<Self> {
        if !Path::new(path).exists() {
            return Err(IoError::FileNotFound(path.to_string()));
        }

        Ok(Self {
            path: path.to_string(),
            delimiter,
        })
    }
}

impl DataReader for CsvReader {
    fn read_rows(&self) -> IoResult<Vec<SocialMediaRow>> {
        let file = File::open(&self.path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        let rows = read_rows_from(BufReader::new(file), self.delimiter)?;
        tracing::debug!(path = %self.path, rows = rows.len(), "read CSV rows");
        Ok(rows)
    }
}

/// Read every row of a comma-separated file
pub fn read_rows(path: impl AsRef<Path>) -> IoResult<Vec<SocialMediaRow>> {
    let path = path.as_ref();
    let display = path.display().to_string();
    CsvReader::open(&display)?.read_rows()
}

/// Parse social media rows from any reader
///
/// The header must name every column in [`REQUIRED_COLUMNS`]; unknown
/// columns are ignored. Non-numeric or non-finite `Likes` cells become `None`.
pub fn read_rows_from<R: Read>(input: R, delimiter: u8) -> IoResult<Vec<SocialMediaRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| IoError::InvalidFormat(e.to_string()))?
        .clone();

    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|name| !headers.iter().any(|h| h == **name))
    {
        return Err(IoError::ColumnNotFound((*missing).to_string()));
    }

    reader
        .deserialize::<SocialMediaRow>()
        .enumerate()
        .map(|(i, result)| {
            // +2: one for the header, one for 1-based line numbers
            result.map_err(|e| IoError::InvalidFormat(format!("line {}: {}", i + 2, e)))
        })
        .collect()
}
