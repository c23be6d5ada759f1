// src/data_input/signal_data.rs

use std::path::{Path, PathBuf};

use ndarray::{Array1, ArrayView1};

use crate::error::ValidationError;

/// An ordered, immutable sequence of real-valued samples.
///
/// Carries a display name (used as the chart legend and table header) and,
/// when loaded from disk, the path it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    name: String,
    source: Option<PathBuf>,
    samples: Array1<f64>,
}

impl Signal {
    pub fn new(name: impl Into<String>, samples: impl Into<Array1<f64>>) -> Self {
        Self {
            name: name.into(),
            source: None,
            samples: samples.into(),
        }
    }

    /// Records the file the samples were read from.
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn samples(&self) -> &Array1<f64> {
        &self.samples
    }

    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.samples.view()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Rejects a zero-length signal before it reaches any arithmetic.
    pub fn ensure_not_empty(&self) -> Result<(), ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::EmptySignal {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_keeps_name_source_and_samples() {
        let signal = Signal::new("Heel Data", vec![1.0, 2.0, 3.0]).with_source("Data/Heel123.txt");
        assert_eq!(signal.name(), "Heel Data");
        assert_eq!(signal.source(), Some(Path::new("Data/Heel123.txt")));
        assert_eq!(signal.len(), 3);
        assert_eq!(signal.view()[2], 3.0);
    }

    #[test]
    fn empty_signal_fails_validation() {
        let signal = Signal::new("Toe Data", Vec::<f64>::new());
        assert_eq!(
            signal.ensure_not_empty(),
            Err(ValidationError::EmptySignal {
                name: "Toe Data".to_string()
            })
        );
        assert!(Signal::new("x", vec![0.0]).ensure_not_empty().is_ok());
    }
}
