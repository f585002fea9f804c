//! Quantile estimation for box plot layout
//!
//! Percentiles use the standard virtual-index scheme: for n samples
//! and rank q (in percent), the virtual index is `h = (n-1) * q / 100`
//! and the result is taken between the bracketing order statistics.
//! Two bracketing rules are supported:
//!
//! - **Linear**: interpolate proportionally between the two order
//!   statistics. Used for the quartiles Q1/median/Q3.
//! - **Midpoint**: take the midpoint of the two order statistics.
//!   Used only for the mid-percentile band; numerically different
//!   from linear and kept that way for compatibility.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

/// Default whisker reach multiplier (Tukey's definition)
pub const DEFAULT_WHISKER_MULTIPLIER: f64 = 1.5;

/// Percentile ranks of the mid-percentile band: 30, 35, ..., 70
pub const MID_BAND_RANKS: [f64; 9] = [30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0];

/// Bracketing rule when a percentile rank falls between order statistics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interpolation {
    /// Linear interpolation between the bracketing order statistics
    Linear,
    /// Midpoint of the bracketing order statistics
    Midpoint,
}

/// The three quartiles of a dataset
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuartileSummary {
    /// 25th percentile
    pub q1: f64,
    /// 50th percentile
    pub median: f64,
    /// 75th percentile
    pub q3: f64,
}

/// Outlier fences derived from the quartiles
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FenceBounds {
    /// q1 - k * iqr
    pub lower: f64,
    /// q3 + k * iqr
    pub upper: f64,
}

impl FenceBounds {
    /// Check whether a value lies strictly outside the fences
    pub fn is_outlier(&self, x: f64) -> bool {
        x < self.lower || x > self.upper
    }
}

impl QuartileSummary {
    /// Compute the quartiles of a dataset via linear interpolation.
    ///
    /// The input need not be sorted; a sorted working copy is made and
    /// the caller's data is never mutated.
    pub fn from_data(data: &[f64]) -> StatsResult<Self> {
        let sorted = sorted_copy(data)?;
        Ok(Self {
            q1: percentile_sorted(&sorted, 25.0, Interpolation::Linear)?,
            median: percentile_sorted(&sorted, 50.0, Interpolation::Linear)?,
            q3: percentile_sorted(&sorted, 75.0, Interpolation::Linear)?,
        })
    }

    /// Interquartile range (q3 - q1)
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Outlier fences at `multiplier` IQRs beyond the quartiles
    pub fn fences(&self, multiplier: f64) -> FenceBounds {
        let reach = multiplier * self.iqr();
        FenceBounds {
            lower: self.q1 - reach,
            upper: self.q3 + reach,
        }
    }
}

/// Compute a percentile of already-sorted data.
///
/// `rank` is in percent; values outside [0, 100] are rejected with
/// `InvalidRank`. Returns `EmptyDataset` for an empty slice.
pub fn percentile_sorted(sorted: &[f64], rank: f64, interpolation: Interpolation) -> StatsResult<f64> {
    if !(0.0..=100.0).contains(&rank) {
        return Err(StatsError::InvalidRank(rank));
    }
    let n = sorted.len();
    if n == 0 {
        return Err(StatsError::EmptyDataset);
    }
    if n == 1 {
        return Ok(sorted[0]);
    }

    let h = (n - 1) as f64 * rank / 100.0;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    if lo == hi {
        return Ok(sorted[lo]);
    }

    match interpolation {
        Interpolation::Linear => Ok(sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])),
        Interpolation::Midpoint => Ok((sorted[lo] + sorted[hi]) / 2.0),
    }
}

/// Compute a percentile of unsorted data (sorts a working copy).
pub fn percentile(data: &[f64], rank: f64, interpolation: Interpolation) -> StatsResult<f64> {
    let sorted = sorted_copy(data)?;
    percentile_sorted(&sorted, rank, interpolation)
}

/// The mid-percentile band: percentiles at 30, 35, ..., 70 using
/// midpoint interpolation.
pub fn mid_band(data: &[f64]) -> StatsResult<Vec<f64>> {
    let sorted = sorted_copy(data)?;
    MID_BAND_RANKS
        .iter()
        .map(|&rank| percentile_sorted(&sorted, rank, Interpolation::Midpoint))
        .collect()
}

/// Arithmetic mean
pub fn mean(data: &[f64]) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyDataset);
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Sorted working copy of a dataset
fn sorted_copy(data: &[f64]) -> StatsResult<Vec<f64>> {
    if data.is_empty() {
        return Err(StatsError::EmptyDataset);
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}
