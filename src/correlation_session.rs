// src/correlation_session.rs

use ndarray::Array1;
use tracing::debug;

use crate::data_analysis::correlation_peak::{find_correlation_peak, CorrelationPeak};
use crate::data_analysis::cross_correlation::cross_correlate;
use crate::data_analysis::lag_window::{lag_window, LagBounds};
use crate::data_analysis::normalization::normalize_by_length;
use crate::data_analysis::padding::{pad_signal, PaddedSignal, PaddingScheme};
use crate::data_input::signal_data::Signal;
use crate::error::ValidationError;

/// Everything derived from the signals for one time lag.
#[derive(Debug, Clone, PartialEq)]
pub struct LagResult {
    pub lag: i64,
    /// Secondary signal as it aligns against the primary at `lag`.
    pub shifted_secondary: Array1<f64>,
    pub correlation: Array1<f64>,
    pub normalized_correlation: Array1<f64>,
    pub peak: Option<CorrelationPeak>,
}

/// Holds the loaded signals and everything that only depends on them.
///
/// Signals, lengths, lag bounds and the padded secondary are derived once at
/// construction. The last lag result is cached, so re-selecting the same lag
/// returns it without recomputing.
#[derive(Debug)]
pub struct CorrelationSession {
    primary: Signal,
    secondary: Signal,
    padded_secondary: PaddedSignal,
    bounds: LagBounds,
    cached: Option<LagResult>,
}

impl CorrelationSession {
    pub fn new(
        primary: Signal,
        secondary: Signal,
        scheme: PaddingScheme,
    ) -> Result<Self, ValidationError> {
        primary.ensure_not_empty()?;
        secondary.ensure_not_empty()?;

        let padded_secondary = pad_signal(secondary.view(), scheme);
        let bounds = LagBounds::for_len(secondary.len());
        debug!(
            primary_len = primary.len(),
            secondary_len = secondary.len(),
            padded_len = padded_secondary.len(),
            scheme = ?padded_secondary.scheme(),
            "session prepared"
        );

        Ok(Self {
            primary,
            secondary,
            padded_secondary,
            bounds,
            cached: None,
        })
    }

    pub fn primary(&self) -> &Signal {
        &self.primary
    }

    pub fn secondary(&self) -> &Signal {
        &self.secondary
    }

    pub fn padded_secondary(&self) -> &PaddedSignal {
        &self.padded_secondary
    }

    pub fn lag_bounds(&self) -> LagBounds {
        self.bounds
    }

    /// The most recently computed result, if any.
    pub fn current(&self) -> Option<&LagResult> {
        self.cached.as_ref()
    }

    /// Clamps `requested` into the valid lag range and returns the result for
    /// it, recomputing only when the clamped lag differs from the cached one.
    pub fn select_lag(&mut self, requested: i64) -> &LagResult {
        let lag = self.bounds.clamp(requested);
        if lag != requested {
            debug!(requested, lag, "lag clamped to valid range");
        }

        let result = match self.cached.take() {
            Some(cached) if cached.lag == lag => {
                debug!(lag, "reusing cached lag result");
                cached
            }
            _ => self.compute(lag),
        };
        self.cached.insert(result)
    }

    fn compute(&self, lag: i64) -> LagResult {
        let shifted_secondary = lag_window(&self.padded_secondary, lag).to_owned();
        let correlation = cross_correlate(self.primary.view(), &self.padded_secondary, lag);
        let normalized_correlation = normalize_by_length(&correlation, self.primary.len());
        let peak = find_correlation_peak(&correlation);

        LagResult {
            lag,
            shifted_secondary,
            correlation,
            normalized_correlation,
            peak,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heel_toe_session() -> CorrelationSession {
        CorrelationSession::new(
            Signal::new("Heel Data", vec![1.0, 2.0, 3.0]),
            Signal::new("Toe Data", vec![1.0, 1.0, 1.0]),
            PaddingScheme::Asymmetric,
        )
        .unwrap()
    }

    #[test]
    fn zero_lag_reproduces_reference_values() {
        let mut session = heel_toe_session();
        assert_eq!(
            session.padded_secondary().samples().to_vec(),
            vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        );

        let result = session.select_lag(0);
        assert_eq!(result.lag, 0);
        assert_eq!(result.shifted_secondary.to_vec(), vec![1.0, 1.0, 1.0]);
        assert_eq!(result.correlation.to_vec(), vec![6.0, 3.0, 1.0]);
        assert_eq!(result.normalized_correlation.to_vec(), vec![2.0, 1.0, 1.0 / 3.0]);
        assert_eq!(result.peak, Some(CorrelationPeak { offset: 0, value: 6.0 }));
    }

    #[test]
    fn out_of_range_lag_is_clamped() {
        let mut session = heel_toe_session();
        assert_eq!(session.select_lag(99).lag, 2);
        assert_eq!(session.select_lag(-99).lag, -2);
        assert_eq!(session.select_lag(-99).correlation.to_vec(), vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn same_lag_reuses_cached_result() {
        let mut session = heel_toe_session();
        let first = session.select_lag(1).clone();
        let second = session.select_lag(1).clone();
        assert_eq!(first, second);
        assert_eq!(second.correlation.to_vec(), vec![5.0, 6.0, 3.0]);

        // A request that clamps onto the cached lag is served from the cache.
        let at_max = session.select_lag(2).clone();
        let clamped = session.select_lag(7).clone();
        assert_eq!(at_max, clamped);
        assert_eq!(clamped.correlation.to_vec(), vec![3.0, 5.0, 6.0]);
        assert_eq!(session.current().map(|r| r.lag), Some(2));
    }

    #[test]
    fn single_sample_secondary_only_allows_zero() {
        let mut session = CorrelationSession::new(
            Signal::new("Heel Data", vec![2.0, 4.0]),
            Signal::new("Toe Data", vec![3.0]),
            PaddingScheme::Asymmetric,
        )
        .unwrap();
        let bounds = session.lag_bounds();
        assert_eq!((bounds.min(), bounds.max()), (0, 0));
        let result = session.select_lag(5);
        assert_eq!(result.lag, 0);
        assert_eq!(result.correlation.to_vec(), vec![6.0]);
    }

    #[test]
    fn empty_signals_are_rejected() {
        let err = CorrelationSession::new(
            Signal::new("Heel Data", Vec::<f64>::new()),
            Signal::new("Toe Data", vec![1.0]),
            PaddingScheme::Asymmetric,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::EmptySignal {
                name: "Heel Data".to_string()
            }
        );

        let err = CorrelationSession::new(
            Signal::new("Heel Data", vec![1.0]),
            Signal::new("Toe Data", Vec::<f64>::new()),
            PaddingScheme::Symmetric,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Toe Data"));
    }
}
