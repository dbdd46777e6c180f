//! Per-key means and fixed-decimal rounding
//!
//! Used for the averaged tables behind the grouped bar chart and the time
//! series line chart.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::error::{StatsError, StatsResult};

/// Arithmetic mean of the values sharing each key
///
/// Keys come back in their natural order. Non-finite values abort the whole
/// computation with [`StatsError::InvalidValue`].
pub fn group_means<K, I>(rows: I) -> StatsResult<BTreeMap<K, f64>>
where
    K: Ord + Display,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut sums: BTreeMap<K, (f64, usize)> = BTreeMap::new();

    for (index, (key, value)) in rows.into_iter().enumerate() {
        if !value.is_finite() {
            return Err(StatsError::InvalidValue {
                index,
                group_key: key.to_string(),
                value,
            });
        }
        let entry = sums.entry(key).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    Ok(sums
        .into_iter()
        .map(|(key, (sum, count))| (key, sum / count as f64))
        .collect())
}

/// Round to a fixed number of decimals
///
/// Ties on the scaled value go to the even neighbour, the same rule NumPy
/// and pandas apply, so `1.125` rounds to `1.12` at two decimals.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}
