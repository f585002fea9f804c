//! Box geometry
//!
//! Derives the rectangle and whisker extents for one slot from the
//! quartiles, fences, and the trimmed (outlier-free) data. Whiskers
//! clamp to the tighter of the actual trimmed extreme and the fence.

use imbox_stats::{FenceBounds, QuartileSummary, StatsError};
use serde::{Deserialize, Serialize};

use crate::error::ImboxResult;

/// Fixed half-width of full-width boxes (simple/styled/banded)
pub const FULL_BOX_HALF_WIDTH: f64 = 0.2;

/// Fixed half-width of composite boxes when variable width is off
pub const COMPOSITE_BOX_HALF_WIDTH: f64 = 0.25;

/// Per-slot display budget scaled by relative sample count in
/// variable-width mode
pub const VARIABLE_WIDTH_BUDGET: f64 = 0.5;

/// Geometry of one box and its whiskers, in data coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxGeometry {
    /// Slot position on the categorical axis (1-based)
    pub slot: f64,
    /// Horizontal half-width of the box
    pub half_width: f64,
    /// Bottom of the box
    pub q1: f64,
    /// Median line height
    pub median: f64,
    /// Top of the box
    pub q3: f64,
    /// Lower whisker end: max(min(trimmed), lower fence)
    pub whisker_low: f64,
    /// Upper whisker end: min(max(trimmed), upper fence)
    pub whisker_high: f64,
}

/// Build the box geometry for one slot.
///
/// `trimmed` must be the outlier-free dataset; if outlier removal
/// emptied it there is no whisker extent to compute and
/// `EmptyDataset` is reported instead of reducing an empty sequence.
pub fn build_box(
    trimmed: &[f64],
    quartiles: &QuartileSummary,
    fences: &FenceBounds,
    slot: f64,
    half_width: f64,
) -> ImboxResult<BoxGeometry> {
    if trimmed.is_empty() {
        return Err(StatsError::EmptyDataset.into());
    }

    let data_min = trimmed.iter().copied().fold(f64::INFINITY, f64::min);
    let data_max = trimmed.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(BoxGeometry {
        slot,
        half_width,
        q1: quartiles.q1,
        median: quartiles.median,
        q3: quartiles.q3,
        whisker_low: data_min.max(fences.lower),
        whisker_high: data_max.min(fences.upper),
    })
}

/// Half-width of a slot's box under variable-width scaling:
/// `0.5 * n / total`, not normalized across slots.
pub fn proportional_half_width(sample_count: usize, total_samples: usize) -> f64 {
    VARIABLE_WIDTH_BUDGET * sample_count as f64 / total_samples as f64
}
