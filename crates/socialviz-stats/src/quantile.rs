//! Quantiles by linear interpolation between closest ranks
//!
//! For a sorted sample `s` of length n and a probability p in [0, 1], the
//! fractional rank is `h = p * (n - 1)` and the quantile is
//!
//! ```text
//! s[floor(h)] + (h - floor(h)) * (s[floor(h) + 1] - s[floor(h)])
//! ```
//!
//! This is the "R-7" convention (the default in R, NumPy and most plotting
//! toolkits).

/// Quantile of an ascending-sorted slice
///
/// Returns `None` for an empty slice or when `p` lies outside [0, 1].
/// The slice must already be sorted; this is not checked.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&p) {
        return None;
    }

    let n = sorted.len();
    if n == 1 {
        return Some(sorted[0]);
    }

    let h = p * (n - 1) as f64;
    let lo = h.floor() as usize;
    let frac = h - h.floor();

    // Integral rank (including p = 1.0): no interpolation needed
    if frac == 0.0 || lo + 1 >= n {
        return Some(sorted[lo.min(n - 1)]);
    }

    let below = sorted[lo];
    let above = sorted[lo + 1];
    Some(interpolate(below, above, frac))
}

/// Point `frac` of the way from `below` to `above`, kept inside `[below, above]`
///
/// Stays monotone in `frac` so that quartiles of one sample never cross.
fn interpolate(below: f64, above: f64, frac: f64) -> f64 {
    let span = above - below;
    let value = if span.is_finite() {
        below + frac * span
    } else {
        // Endpoints too far apart to subtract; step in halves instead
        let half_step = (above * 0.5 - below * 0.5) * frac;
        below + half_step + half_step
    };
    value.clamp(below, above)
}

/// Sort a copy of `data` ascending
///
/// Uses IEEE total ordering so the sort never panics; callers that care
/// about NaN should reject it before sorting.
pub fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}
