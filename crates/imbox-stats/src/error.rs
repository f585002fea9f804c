//! Error types for imbox-stats
//!
//! Degenerate inputs are reported explicitly rather than propagating
//! NaN or panicking in empty reductions.

use thiserror::Error;

/// Errors from statistical computations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// A statistic requiring at least one sample was requested on an
    /// empty dataset (or a dataset emptied by outlier removal)
    #[error("dataset has no samples to compute statistics from")]
    EmptyDataset,

    /// Histogram normalization is undefined: every bucket holds the
    /// same count (or the value range has zero span)
    #[error("degenerate binning: all {bins} buckets have equal count {count}")]
    DegenerateBinning { bins: usize, count: usize },

    /// Not enough points for the requested operation
    #[error("insufficient points: needed {needed}, got {got}")]
    InsufficientPoints { needed: usize, got: usize },

    /// Input expected in strictly ascending order was not
    #[error("input values must be strictly ascending at index {index}")]
    UnsortedInput { index: usize },

    /// Bin count must be at least one
    #[error("invalid bin count: {0}")]
    InvalidBinCount(usize),

    /// Percentile ranks are expressed in percent
    #[error("percentile rank must be in [0, 100], got {0}")]
    InvalidRank(f64),
}

/// Result type alias for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatsError::DegenerateBinning { bins: 10, count: 3 };
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains("3"));
    }

    #[test]
    fn test_empty_dataset_display() {
        let err = StatsError::EmptyDataset;
        assert!(err.to_string().contains("no samples"));
    }
}
