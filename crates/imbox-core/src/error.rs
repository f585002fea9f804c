//! Error types for imbox-core
//!
//! All checks run before anything is drawn: a failed call leaves the
//! canvas untouched. There is no recovery path; the caller supplies
//! corrected input.

use imbox_stats::StatsError;
use thiserror::Error;

/// Main error type for imbox operations
#[derive(Error, Debug)]
pub enum ImboxError {
    /// Input is not a uniform numeric structure
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// An option value is out of range or inconsistent
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A statistical computation failed (empty dataset, degenerate
    /// binning, ...)
    #[error("statistics error: {0}")]
    Stats(#[from] StatsError),
}

impl ImboxError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Result type alias for imbox operations
pub type ImboxResult<T> = Result<T, ImboxError>;

/// Validation utilities
pub mod validation {
    use super::*;

    /// Bin count must be at least one
    pub fn validate_bins(bins: usize) -> ImboxResult<()> {
        if bins == 0 {
            return Err(ImboxError::invalid_config("bin count must be at least 1"));
        }
        Ok(())
    }

    /// Whisker reach multiplier must be finite and non-negative
    pub fn validate_whisker_multiplier(multiplier: f64) -> ImboxResult<()> {
        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(ImboxError::invalid_config(format!(
                "whisker multiplier must be finite and non-negative, got {multiplier}"
            )));
        }
        Ok(())
    }

    /// Per-slot labels must match the dataset count
    pub fn validate_labels(label_count: usize, dataset_count: usize) -> ImboxResult<()> {
        if label_count != dataset_count {
            return Err(ImboxError::invalid_config(format!(
                "expected {dataset_count} labels, got {label_count}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ImboxError::invalid_config("bad bins");
        assert!(err.to_string().contains("bad bins"));
    }

    #[test]
    fn test_stats_error_converts() {
        let err: ImboxError = StatsError::EmptyDataset.into();
        assert!(matches!(err, ImboxError::Stats(StatsError::EmptyDataset)));
    }

    #[test]
    fn test_validate_bins() {
        assert!(validation::validate_bins(10).is_ok());
        assert!(validation::validate_bins(0).is_err());
    }

    #[test]
    fn test_validate_whisker_multiplier() {
        assert!(validation::validate_whisker_multiplier(1.5).is_ok());
        assert!(validation::validate_whisker_multiplier(0.0).is_ok());
        assert!(validation::validate_whisker_multiplier(-1.0).is_err());
        assert!(validation::validate_whisker_multiplier(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_labels() {
        assert!(validation::validate_labels(3, 3).is_ok());
        assert!(validation::validate_labels(2, 3).is_err());
    }
}
