//! Input validation and normalization
//!
//! Datasets arrive either as nested numeric sequences or as a
//! rectangular 2-D block (one dataset per row). Both are checked for
//! shape and finiteness before any statistics are computed; invalid
//! input is reported without touching the canvas.

use ndarray::Array2;

use crate::error::{ImboxError, ImboxResult};

/// Validate a list of datasets in place.
///
/// Rejects an empty dataset list, empty rows, and non-finite entries
/// (NaN or infinities).
pub fn validate(data: &[Vec<f64>]) -> ImboxResult<()> {
    if data.is_empty() {
        return Err(ImboxError::invalid_input("no datasets supplied"));
    }
    for (i, row) in data.iter().enumerate() {
        if row.is_empty() {
            return Err(ImboxError::invalid_input(format!(
                "dataset {i} is empty"
            )));
        }
        if let Some(j) = row.iter().position(|x| !x.is_finite()) {
            return Err(ImboxError::invalid_input(format!(
                "dataset {i} has a non-finite value at index {j}"
            )));
        }
    }
    Ok(())
}

/// Convert a rectangular 2-D block into one dataset per row.
pub fn from_matrix(matrix: &Array2<f64>) -> ImboxResult<Vec<Vec<f64>>> {
    if matrix.is_empty() {
        return Err(ImboxError::invalid_input("matrix input is empty"));
    }
    let data: Vec<Vec<f64>> = matrix.rows().into_iter().map(|r| r.to_vec()).collect();
    validate(&data)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_valid_nested_input() {
        let data = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]];
        assert!(validate(&data).is_ok());
    }

    #[test]
    fn test_empty_list_rejected() {
        assert!(validate(&[]).is_err());
    }

    #[test]
    fn test_empty_row_rejected() {
        let data = vec![vec![1.0], vec![]];
        let err = validate(&data).unwrap_err();
        assert!(err.to_string().contains("dataset 1"));
    }

    #[test]
    fn test_nan_rejected() {
        let data = vec![vec![1.0, f64::NAN, 3.0]];
        assert!(validate(&data).is_err());
    }

    #[test]
    fn test_infinity_rejected() {
        let data = vec![vec![1.0, f64::INFINITY]];
        assert!(validate(&data).is_err());
    }

    #[test]
    fn test_from_matrix() {
        let matrix = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let data = from_matrix(&matrix).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0], vec![1.0, 2.0, 3.0]);
        assert_eq!(data[1], vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_from_matrix_rejects_nan() {
        let matrix = array![[1.0, f64::NAN]];
        assert!(from_matrix(&matrix).is_err());
    }
}
