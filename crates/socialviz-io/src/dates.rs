//! Date cleanup, parsing and labelling
//!
//! Raw exports carry dates like `3/1/2024 (Friday)` or timestamps like
//! `2024-03-01 09:15:00`. Everything is reduced to a calendar date.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Trailing parenthesised annotation, e.g. ` (Friday)`
    static ref PAREN_SUFFIX: Regex = Regex::new(r"\s*\(.*\)$").unwrap();
}

const DATE_FORMATS: [&str; 3] = ["%m/%d/%Y", "%Y-%m-%d", "%d.%m.%Y"];

const DATETIME_FORMATS: [&str; 6] = [
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// Trim a raw date cell and drop any trailing `(...)` annotation
pub fn clean_date(raw: &str) -> String {
    PAREN_SUFFIX.replace(raw.trim(), "").trim().to_string()
}

/// Parse a raw date or timestamp cell into a calendar date
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let cleaned = clean_date(raw);
    if cleaned.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&cleaned, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(&cleaned, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(&cleaned)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Display label `month/day/year (Weekday)` without zero padding
pub fn date_label(date: NaiveDate) -> String {
    format!(
        "{}/{}/{} ({})",
        date.month(),
        date.day(),
        date.year(),
        date.format("%A")
    )
}
