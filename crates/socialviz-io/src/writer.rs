//! CSV writers for the derived tables

use crate::reader::{IoError, IoResult};
use crate::schema::{AverageRow, TimeRow};
use serde::Serialize;
use std::path::Path;

/// Write the per-platform averages table (`Platform,PostType,AvgLikes`)
pub fn write_averages(path: impl AsRef<Path>, rows: &[AverageRow]) -> IoResult<()> {
    write_table(path.as_ref(), rows)
}

/// Write the per-date averages table (`Date,AvgLikes`)
pub fn write_time_series(path: impl AsRef<Path>, rows: &[TimeRow]) -> IoResult<()> {
    write_table(path.as_ref(), rows)
}

fn write_table<T: Serialize>(path: &Path, rows: &[T]) -> IoResult<()> {
    let write_err = |message: String| IoError::Write {
        path: path.display().to_string(),
        message,
    };

    let mut writer = csv::Writer::from_path(path).map_err(|e| write_err(e.to_string()))?;
    for row in rows {
        writer.serialize(row).map_err(|e| write_err(e.to_string()))?;
    }
    writer.flush().map_err(|e| write_err(e.to_string()))?;

    tracing::info!(path = %path.display(), rows = rows.len(), "wrote table");
    Ok(())
}
