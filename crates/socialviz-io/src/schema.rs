//! Row types for the social media tables

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use socialviz_stats::Record;
use std::fmt;
use std::str::FromStr;

/// Columns every raw input file must carry
pub const REQUIRED_COLUMNS: [&str; 4] = ["Platform", "PostType", "AgeGroup", "Likes"];

/// One post from the raw social media export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialMediaRow {
    #[serde(rename = "Platform")]
    pub platform: String,

    #[serde(rename = "PostType")]
    pub post_type: String,

    #[serde(rename = "AgeGroup")]
    pub age_group: String,

    /// Like count; `None` when the cell is empty, not a number, or not finite
    #[serde(rename = "Likes", deserialize_with = "finite_likes")]
    pub likes: Option<f64>,

    /// Raw date cell, e.g. `3/1/2024 (Friday)`
    #[serde(rename = "Date", default)]
    pub date: Option<String>,

    #[serde(rename = "PostTimestamp", default)]
    pub post_timestamp: Option<String>,
}

/// Parse a like count, treating `NaN`, `inf` and other junk as missing
fn finite_likes<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let likes: Option<f64> = csv::invalid_option(de)?;
    Ok(likes.filter(|value| value.is_finite()))
}

impl SocialMediaRow {
    /// Value of a categorical column
    pub fn field(&self, field: GroupField) -> &str {
        match field {
            GroupField::AgeGroup => &self.age_group,
            GroupField::Platform => &self.platform,
            GroupField::PostType => &self.post_type,
        }
    }
}

/// Categorical column used to partition rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupField {
    #[default]
    AgeGroup,
    Platform,
    PostType,
}

impl GroupField {
    /// Header name in the raw CSV
    pub fn column_name(&self) -> &'static str {
        match self {
            GroupField::AgeGroup => "AgeGroup",
            GroupField::Platform => "Platform",
            GroupField::PostType => "PostType",
        }
    }
}

impl fmt::Display for GroupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for GroupField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', '-'], "").as_str() {
            "agegroup" | "age" => Ok(GroupField::AgeGroup),
            "platform" => Ok(GroupField::Platform),
            "posttype" | "type" => Ok(GroupField::PostType),
            other => Err(format!("unknown group field: {}", other)),
        }
    }
}

/// Project rows into `(group key, likes)` records
///
/// Rows without a numeric like count are skipped.
pub fn records_by(rows: &[SocialMediaRow], field: GroupField) -> Vec<Record> {
    let records: Vec<Record> = rows
        .iter()
        .filter_map(|row| row.likes.map(|likes| Record::new(row.field(field), likes)))
        .collect();

    let skipped = rows.len() - records.len();
    if skipped > 0 {
        tracing::debug!(skipped, field = %field, "skipped rows without numeric likes");
    }

    records
}

/// Mean likes for one platform and post type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageRow {
    #[serde(rename = "Platform")]
    pub platform: String,

    #[serde(rename = "PostType")]
    pub post_type: String,

    #[serde(rename = "AvgLikes")]
    pub avg_likes: f64,
}

/// Mean likes for one calendar date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeRow {
    #[serde(skip)]
    pub date: NaiveDate,

    /// Display label, e.g. `3/1/2024 (Friday)`
    #[serde(rename = "Date")]
    pub label: String,

    #[serde(rename = "AvgLikes")]
    pub avg_likes: f64,
}
