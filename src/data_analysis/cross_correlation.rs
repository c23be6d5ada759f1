// src/data_analysis/cross_correlation.rs

use ndarray::{Array1, ArrayView1};

use crate::data_analysis::padding::PaddedSignal;

/// Slice of the padded signal that the primary slides across at `lag`:
/// `padded[L - lag .. 2L - lag + M - 1]`, length `L + M - 1`.
///
/// Indices past the end of the padded signal read as zero.
pub fn correlation_window(padded: &PaddedSignal, primary_len: usize, lag: i64) -> Array1<f64> {
    let len = padded.source_len();
    if len == 0 || primary_len == 0 {
        return Array1::zeros(0);
    }
    let start = (len as i64 - lag) as usize;
    Array1::from_shape_fn(len + primary_len - 1, |i| padded.get_or_zero(start + i))
}

/// Sliding dot products of `primary` (length `M`) against every length-`M`
/// sub-window of the correlation window at `lag`.
///
/// Always returns exactly `L` values, ordered by increasing offset.
pub fn cross_correlate(primary: ArrayView1<f64>, padded: &PaddedSignal, lag: i64) -> Array1<f64> {
    let primary_len = primary.len();
    if primary_len == 0 {
        return Array1::zeros(padded.source_len());
    }

    let window = correlation_window(padded, primary_len, lag);
    window
        .windows(primary_len)
        .into_iter()
        .map(|sub_window| sub_window.dot(&primary))
        .collect()
}
