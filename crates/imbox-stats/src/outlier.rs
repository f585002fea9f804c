//! Outlier extraction
//!
//! Partitions a dataset against fence bounds. A sample is an outlier
//! iff it lies strictly below the lower fence or strictly above the
//! upper fence; everything else is kept in the trimmed dataset used
//! for whisker extents. The partition is exhaustive, disjoint, and
//! order-preserving.

use crate::quantile::FenceBounds;

/// Split a dataset into (trimmed, outliers) relative to the fences.
///
/// If every sample is an outlier the trimmed vector is empty; callers
/// computing whisker extents must treat that as an error rather than
/// reduce an empty sequence.
pub fn split_outliers(data: &[f64], fences: &FenceBounds) -> (Vec<f64>, Vec<f64>) {
    data.iter().partition(|&&x| !fences.is_outlier(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantile::{QuartileSummary, DEFAULT_WHISKER_MULTIPLIER};

    #[test]
    fn test_no_outliers() {
        let data: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let fences = QuartileSummary::from_data(&data)
            .unwrap()
            .fences(DEFAULT_WHISKER_MULTIPLIER);
        let (trimmed, outliers) = split_outliers(&data, &fences);
        assert_eq!(trimmed, data);
        assert!(outliers.is_empty());
    }

    #[test]
    fn test_degenerate_fences_trim_single_extreme() {
        let data = vec![1.0, 1.0, 1.0, 1.0, 100.0];
        let fences = QuartileSummary::from_data(&data).unwrap().fences(1.5);
        let (trimmed, outliers) = split_outliers(&data, &fences);
        assert_eq!(trimmed, vec![1.0, 1.0, 1.0, 1.0]);
        assert_eq!(outliers, vec![100.0]);
    }

    #[test]
    fn test_partition_exhaustive_and_disjoint() {
        let data = vec![-50.0, 1.0, 2.0, 3.0, 4.0, 5.0, 200.0, 2.5];
        let fences = FenceBounds {
            lower: 0.0,
            upper: 10.0,
        };
        let (trimmed, outliers) = split_outliers(&data, &fences);
        assert_eq!(trimmed.len() + outliers.len(), data.len());
        for x in &trimmed {
            assert!(!fences.is_outlier(*x));
        }
        for x in &outliers {
            assert!(fences.is_outlier(*x));
        }
        // order preserved within each side
        assert_eq!(trimmed, vec![1.0, 2.0, 3.0, 4.0, 5.0, 2.5]);
        assert_eq!(outliers, vec![-50.0, 200.0]);
    }

    #[test]
    fn test_fence_boundary_values_are_kept() {
        let fences = FenceBounds {
            lower: 1.0,
            upper: 9.0,
        };
        let (trimmed, outliers) = split_outliers(&[1.0, 9.0], &fences);
        assert_eq!(trimmed, vec![1.0, 9.0]);
        assert!(outliers.is_empty());
    }

    #[test]
    fn test_all_outliers_leaves_trimmed_empty() {
        let fences = FenceBounds {
            lower: 0.0,
            upper: 1.0,
        };
        let (trimmed, outliers) = split_outliers(&[5.0, 6.0, -2.0], &fences);
        assert!(trimmed.is_empty());
        assert_eq!(outliers.len(), 3);
    }
}
