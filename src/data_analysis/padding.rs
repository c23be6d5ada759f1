// src/data_analysis/padding.rs

use ndarray::{s, Array1, ArrayView1};
use serde::Deserialize;

/// How many zeros surround the secondary signal.
///
/// `Asymmetric` pads `L` before and `2L` after (total `4L`). `Symmetric`
/// pads `L` on both sides (total `3L`). Either way the original samples
/// occupy `[L, 2L)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaddingScheme {
    #[default]
    Asymmetric,
    Symmetric,
}

impl PaddingScheme {
    /// Leading and trailing zero counts for a signal of length `len`.
    pub fn widths(self, len: usize) -> (usize, usize) {
        match self {
            PaddingScheme::Asymmetric => (len, 2 * len),
            PaddingScheme::Symmetric => (len, len),
        }
    }

    pub fn padded_len(self, len: usize) -> usize {
        let (leading, trailing) = self.widths(len);
        leading + len + trailing
    }
}

/// The zero-extended secondary signal. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct PaddedSignal {
    samples: Array1<f64>,
    source_len: usize,
    scheme: PaddingScheme,
}

impl PaddedSignal {
    pub fn samples(&self) -> &Array1<f64> {
        &self.samples
    }

    /// Length `L` of the signal before padding.
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    pub fn scheme(&self) -> PaddingScheme {
        self.scheme
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at `index`, reading zero past the end of the trailing run.
    pub fn get_or_zero(&self, index: usize) -> f64 {
        self.samples.get(index).copied().unwrap_or(0.0)
    }
}

/// Zero-extends `secondary` according to `scheme`.
pub fn pad_signal(secondary: ArrayView1<f64>, scheme: PaddingScheme) -> PaddedSignal {
    let len = secondary.len();
    let (leading, _) = scheme.widths(len);
    let mut samples = Array1::<f64>::zeros(scheme.padded_len(len));
    samples.slice_mut(s![leading..leading + len]).assign(&secondary);

    PaddedSignal {
        samples,
        source_len: len,
        scheme,
    }
}
