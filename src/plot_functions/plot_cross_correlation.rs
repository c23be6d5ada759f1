// src/plot_functions/plot_cross_correlation.rs

use std::path::{Path, PathBuf};

use crate::constants::STACKED_PLOT_ROWS;
use crate::correlation_session::{CorrelationSession, LagResult};
use crate::error::RenderError;
use crate::plot_framework::draw_stacked_plot;
use crate::plot_functions::plot_correlation::{correlation_config, normalized_correlation_config};
use crate::plot_functions::plot_input_alignment::input_alignment_config;

const ROW_NAMES: [&str; STACKED_PLOT_ROWS] = ["Input", "Correlation", "Normalized Correlation"];

/// `<output_dir>/<root_name>_lag<lag>_cross_correlation.png`
pub fn output_file_path(output_dir: &Path, root_name: &str, lag: i64) -> PathBuf {
    output_dir.join(format!("{root_name}_lag{lag}_cross_correlation.png"))
}

/// Renders the input alignment, correlation and normalized correlation
/// charts for `result` into one stacked PNG and returns its path.
pub fn plot_cross_correlation(
    session: &CorrelationSession,
    result: &LagResult,
    output_dir: &Path,
    root_name: &str,
    plot_size: (u32, u32),
) -> Result<PathBuf, RenderError> {
    let output_path = output_file_path(output_dir, root_name, result.lag);
    let primary = session.primary();
    let secondary = session.secondary();

    let title = format!(
        "{root_name}: {} vs {} cross correlation",
        primary.name(),
        secondary.name()
    );

    draw_stacked_plot(&output_path, &title, plot_size, &ROW_NAMES, |row_index| match row_index {
        0 => input_alignment_config(
            primary.name(),
            primary.view(),
            secondary.name(),
            result.shifted_secondary.view(),
            result.lag,
        ),
        1 => correlation_config(result.correlation.view(), result.peak),
        _ => normalized_correlation_config(
            result.normalized_correlation.view(),
            result.peak,
            primary.len(),
        ),
    })
    .map_err(|e| RenderError::new(output_path.display().to_string(), e))?;

    println!("  Cross correlation plot saved as '{}'.", output_path.display());
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_analysis::padding::PaddingScheme;
    use crate::data_input::signal_data::Signal;

    fn session(primary: Vec<f64>, secondary: Vec<f64>) -> CorrelationSession {
        CorrelationSession::new(
            Signal::new("Heel Data", primary),
            Signal::new("Toe Data", secondary),
            PaddingScheme::Asymmetric,
        )
        .unwrap()
    }

    #[test]
    fn renders_stacked_png_for_selected_lag() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(vec![1.0, 2.0, 3.0, 2.0, 1.0], vec![0.0, 1.0, 3.0, 1.0]);
        let result = session.select_lag(-2).clone();

        let path =
            plot_cross_correlation(&session, &result, dir.path(), "Heel123", (800, 600)).unwrap();
        assert_eq!(path, dir.path().join("Heel123_lag-2_cross_correlation.png"));
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn renders_single_sample_secondary() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(vec![2.0, 4.0], vec![3.0]);
        let result = session.select_lag(0).clone();

        let path =
            plot_cross_correlation(&session, &result, dir.path(), "short", (800, 600)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn zero_size_is_a_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(vec![1.0, 2.0], vec![1.0, 1.0]);
        let result = session.select_lag(0).clone();

        let err = plot_cross_correlation(&session, &result, dir.path(), "x", (0, 0)).unwrap_err();
        assert!(err.message.contains("plot size 0x0"));
    }

    #[test]
    fn file_name_carries_signed_lag() {
        let dir = Path::new("out");
        assert_eq!(
            output_file_path(dir, "Heel123", -2),
            PathBuf::from("out/Heel123_lag-2_cross_correlation.png")
        );
        assert_eq!(
            output_file_path(dir, "Heel123", 3),
            PathBuf::from("out/Heel123_lag3_cross_correlation.png")
        );
    }
}
