//! Pipeline operations
//!
//! Load raw rows, summarize them for the box plot, and derive the averaged
//! tables behind the bar and line charts.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use socialviz_io::{
    date_label, open_file, parse_date, records_by, write_averages, write_time_series,
    AverageRow, DataReader, SocialMediaRow, TimeRow,
};
use socialviz_stats::{group_means, round_to, summarize, GroupedSummaries};

use crate::config::Config;
use crate::error::{CoreResult, SocialVizError};

/// Files written by [`prepare`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedOutputs {
    pub averages: PathBuf,
    pub time_series: PathBuf,
    pub average_rows: usize,
    pub time_rows: usize,
}

/// Load every row of a CSV/TSV file
pub fn load_rows(path: impl AsRef<Path>) -> CoreResult<Vec<SocialMediaRow>> {
    let path = path.as_ref().display().to_string();
    let reader = open_file(&path)?;
    Ok(reader.read_rows()?)
}

/// Five-number summaries of likes per group
pub fn summarize_rows(rows: &[SocialMediaRow], config: &Config) -> CoreResult<GroupedSummaries> {
    let records = records_by(rows, config.group_field);
    Ok(summarize(&records)?)
}

/// Load a file and summarize it by the configured group column
pub fn summarize_file(path: impl AsRef<Path>, config: &Config) -> CoreResult<GroupedSummaries> {
    let rows = load_rows(path)?;
    summarize_rows(&rows, config)
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct PlatformKey {
    platform: String,
    post_type: String,
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.platform, self.post_type)
    }
}

/// Mean likes per platform and post type
///
/// Rows without a numeric like count are left out. Means are rounded to
/// `decimals` and sorted by platform, then post type.
pub fn platform_averages(rows: &[SocialMediaRow], decimals: u32) -> CoreResult<Vec<AverageRow>> {
    let keyed = rows.iter().filter_map(|row| {
        row.likes.map(|likes| {
            let key = PlatformKey {
                platform: row.platform.clone(),
                post_type: row.post_type.clone(),
            };
            (key, likes)
        })
    });

    let means = group_means(keyed)?;
    Ok(means
        .into_iter()
        .map(|(key, mean)| AverageRow {
            platform: key.platform,
            post_type: key.post_type,
            avg_likes: round_to(mean, decimals),
        })
        .collect())
}

/// Mean likes per calendar date
///
/// Dates come from the `Date` column; when not a single row has a parseable
/// `Date`, the `PostTimestamp` column is used instead. Rows lacking either a
/// date or a numeric like count are left out. Sorted by date.
pub fn time_series(rows: &[SocialMediaRow]) -> CoreResult<Vec<TimeRow>> {
    let mut dates = parse_dates(rows, |row| row.date.as_deref());
    if dates.iter().all(Option::is_none) {
        tracing::debug!("no parseable Date values, falling back to PostTimestamp");
        dates = parse_dates(rows, |row| row.post_timestamp.as_deref());
    }

    let keyed = rows
        .iter()
        .zip(dates)
        .filter_map(|(row, date)| Some((date?, row.likes?)));

    let means = group_means(keyed)?;
    Ok(means
        .into_iter()
        .map(|(date, avg_likes)| TimeRow {
            date,
            label: date_label(date),
            avg_likes,
        })
        .collect())
}

fn parse_dates<F>(rows: &[SocialMediaRow], cell: F) -> Vec<Option<NaiveDate>>
where
    F: Fn(&SocialMediaRow) -> Option<&str>,
{
    rows.iter().map(|row| cell(row).and_then(parse_date)).collect()
}

/// Derive both averaged tables from `input` and write them into `outdir`
pub fn prepare(
    input: impl AsRef<Path>,
    outdir: impl AsRef<Path>,
    config: &Config,
) -> CoreResult<PreparedOutputs> {
    config.validate()?;

    let outdir = outdir.as_ref();
    std::fs::create_dir_all(outdir).map_err(|source| SocialVizError::OutputDir {
        path: outdir.to_path_buf(),
        source,
    })?;

    let rows = load_rows(input)?;
    let averages = platform_averages(&rows, config.rounding_decimals)?;
    let times = time_series(&rows)?;

    let averages_path = outdir.join(&config.output.averages_file);
    let time_path = outdir.join(&config.output.time_series_file);
    write_averages(&averages_path, &averages)?;
    write_time_series(&time_path, &times)?;

    Ok(PreparedOutputs {
        averages: averages_path,
        time_series: time_path,
        average_rows: averages.len(),
        time_rows: times.len(),
    })
}
