//! Equal-width histogram binning for density silhouettes
//!
//! Bins a trimmed dataset into equal-width buckets over its value
//! range and normalizes the counts into display widths via min-max
//! scaling. Buckets are half-open `[low, high)` except the topmost,
//! which is closed so the dataset maximum is counted rather than
//! dropped.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

/// One histogram bucket with its normalized display width
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DensityBucket {
    /// Value-axis midpoint of the bucket
    pub midpoint: f64,
    /// Raw sample count
    pub count: usize,
    /// Count normalized to [0, max_display_width]
    pub width: f64,
}

/// Binned density of a dataset, normalized for display
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DensityProfile {
    /// Buckets in ascending value order
    pub buckets: Vec<DensityBucket>,
    /// Smallest sample value (lower edge of the first bucket)
    pub value_min: f64,
    /// Largest sample value (upper edge of the last bucket)
    pub value_max: f64,
    /// Height of each bucket on the value axis
    pub bucket_height: f64,
}

impl DensityProfile {
    /// Bucket midpoints in ascending order
    pub fn midpoints(&self) -> Vec<f64> {
        self.buckets.iter().map(|b| b.midpoint).collect()
    }
}

/// Bin a dataset into `bin_count` equal-width buckets and normalize
/// the counts to `[0, max_display_width]`.
///
/// Fails with `DegenerateBinning` when every bucket holds the same
/// count (including the zero-span case where all samples are equal):
/// min-max scaling would divide by zero, and the silhouette carries no
/// shape information to draw.
pub fn build_density(
    data: &[f64],
    bin_count: usize,
    max_display_width: f64,
) -> StatsResult<DensityProfile> {
    if bin_count == 0 {
        return Err(StatsError::InvalidBinCount(bin_count));
    }
    if data.is_empty() {
        return Err(StatsError::EmptyDataset);
    }

    let value_min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let value_max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = value_max - value_min;
    if span == 0.0 {
        // All samples equal: every bucket is degenerate
        return Err(StatsError::DegenerateBinning {
            bins: bin_count,
            count: data.len(),
        });
    }

    let bucket_height = span / bin_count as f64;
    let mut counts = vec![0usize; bin_count];
    for &x in data {
        // Clamping the index closes the top bucket, so the maximum is
        // counted instead of falling out of the half-open scheme
        let idx = (((x - value_min) / span) * bin_count as f64) as usize;
        counts[idx.min(bin_count - 1)] += 1;
    }

    let (min_count, max_count) = counts
        .iter()
        .fold((usize::MAX, 0), |(lo, hi), &c| (lo.min(c), hi.max(c)));
    if min_count == max_count {
        return Err(StatsError::DegenerateBinning {
            bins: bin_count,
            count: min_count,
        });
    }

    let scale = max_display_width / (max_count - min_count) as f64;
    let buckets = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| DensityBucket {
            midpoint: value_min + (i as f64 + 0.5) * bucket_height,
            count,
            width: (count - min_count) as f64 * scale,
        })
        .collect();

    Ok(DensityProfile {
        buckets,
        value_min,
        value_max,
        bucket_height,
    })
}
