//! Grouped five-number summaries
//!
//! Partitions `(group key, value)` records by key and computes, for each
//! group, the minimum, quartiles, maximum and interquartile range that a
//! box plot is drawn from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};
use crate::quantile::{quantile_sorted, sorted_copy};

/// One input row: a categorical key and a numeric value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub group_key: String,
    pub value: f64,
}

impl Record {
    pub fn new(group_key: impl Into<String>, value: f64) -> Self {
        Self {
            group_key: group_key.into(),
            value,
        }
    }
}

/// Five-number summary of one group, plus its interquartile range
///
/// Invariant: `min <= q1 <= median <= q3 <= max` and `iqr == q3 - q1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub min: f64,
    /// First quartile (25th percentile)
    pub q1: f64,
    pub median: f64,
    /// Third quartile (75th percentile)
    pub q3: f64,
    pub max: f64,
    /// Interquartile range (q3 - q1)
    pub iqr: f64,
}

/// Summaries keyed by group
///
/// Ordered by key so that iteration is deterministic. The order carries no
/// meaning; callers wanting a display order must sort themselves.
pub type GroupedSummaries = BTreeMap<String, Summary>;

impl Summary {
    /// Summarize an ascending-sorted, non-empty slice
    ///
    /// Returns `None` for an empty slice.
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        let min = *sorted.first()?;
        let max = *sorted.last()?;
        let q1 = quantile_sorted(sorted, 0.25)?;
        let median = quantile_sorted(sorted, 0.5)?;
        let q3 = quantile_sorted(sorted, 0.75)?;

        Some(Self {
            min,
            q1,
            median,
            q3,
            max,
            iqr: q3 - q1,
        })
    }

    /// Summarize unsorted values
    pub fn from_values(values: &[f64]) -> Option<Self> {
        Self::from_sorted(&sorted_copy(values))
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Compute the five-number summary of every group in `records`
///
/// Records are partitioned by `group_key` (keeping their relative order),
/// each group is sorted numerically and summarized with linear-interpolation
/// quartiles. Every key present in the input appears exactly once in the
/// result. An empty input gives an empty map.
///
/// Fails with [`StatsError::InvalidValue`] on the first record whose value
/// is not finite; no partial result is produced.
pub fn summarize(records: &[Record]) -> StatsResult<GroupedSummaries> {
    let groups = partition(records)?;

    let summaries: GroupedSummaries = groups
        .into_iter()
        .filter_map(|(key, values)| {
            tracing::trace!(group = %key, n = values.len(), "summarizing group");
            Summary::from_values(&values).map(|summary| (key, summary))
        })
        .collect();

    tracing::debug!(
        records = records.len(),
        groups = summaries.len(),
        "summarized records"
    );

    Ok(summaries)
}

/// Fold records into per-key value lists, rejecting non-finite values
fn partition(records: &[Record]) -> StatsResult<BTreeMap<String, Vec<f64>>> {
    records
        .iter()
        .enumerate()
        .try_fold(BTreeMap::new(), |mut groups, (index, record)| {
            if !record.value.is_finite() {
                return Err(StatsError::InvalidValue {
                    index,
                    group_key: record.group_key.clone(),
                    value: record.value,
                });
            }
            groups
                .entry(record.group_key.clone())
                .or_insert_with(Vec::new)
                .push(record.value);
            Ok(groups)
        })
}
