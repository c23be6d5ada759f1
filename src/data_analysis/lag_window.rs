// src/data_analysis/lag_window.rs

use ndarray::{s, ArrayView1};

use crate::data_analysis::padding::PaddedSignal;

/// Inclusive range of valid time lags for a secondary signal of length `L`:
/// `-(L-1) ..= L-1`. Collapses to `{0}` for `L <= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LagBounds {
    min: i64,
    max: i64,
}

impl LagBounds {
    pub fn for_len(secondary_len: usize) -> Self {
        let reach = secondary_len.saturating_sub(1) as i64;
        Self {
            min: -reach,
            max: reach,
        }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, lag: i64) -> bool {
        (self.min..=self.max).contains(&lag)
    }

    pub fn clamp(&self, lag: i64) -> i64 {
        lag.clamp(self.min, self.max)
    }
}

/// The length-`L` slice of the padded signal aligned for display at `lag`:
/// `padded[L - lag .. 2L - lag]`.
///
/// `lag` must already be within `LagBounds::for_len(L)`.
pub fn lag_window(padded: &PaddedSignal, lag: i64) -> ArrayView1<'_, f64> {
    let len = padded.source_len() as i64;
    debug_assert!(LagBounds::for_len(padded.source_len()).contains(lag));
    let start = (len - lag) as usize;
    let end = (2 * len - lag) as usize;
    padded.samples().slice(s![start..end])
}
