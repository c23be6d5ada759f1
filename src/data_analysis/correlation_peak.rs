// src/data_analysis/correlation_peak.rs

use ndarray::Array1;

/// Offset and value of the strongest correlation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationPeak {
    pub offset: usize,
    pub value: f64,
}

/// Largest value in `sequence`, first occurrence on ties.
/// `None` for an empty sequence or one containing NaN.
pub fn find_correlation_peak(sequence: &Array1<f64>) -> Option<CorrelationPeak> {
    if sequence.iter().any(|v| v.is_nan()) {
        return None;
    }
    sequence
        .iter()
        .enumerate()
        .fold(None, |best: Option<CorrelationPeak>, (offset, &value)| match best {
            // an equal value keeps the earlier offset
            Some(peak) if peak.value >= value => Some(peak),
            _ => Some(CorrelationPeak { offset, value }),
        })
}
