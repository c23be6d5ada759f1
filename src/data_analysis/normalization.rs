// src/data_analysis/normalization.rs

use ndarray::Array1;

/// Divides every correlation value by the primary signal length `M`.
///
/// Callers reject `M = 0` before getting here.
pub fn normalize_by_length(correlation: &Array1<f64>, primary_len: usize) -> Array1<f64> {
    debug_assert!(primary_len > 0, "primary length must be validated upstream");
    correlation / primary_len as f64
}
