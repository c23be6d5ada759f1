// src/plot_functions/plot_input_alignment.rs

use ndarray::ArrayView1;
use plotters::style::RGBColor;

use crate::constants::{COLOR_PRIMARY_SIGNAL, COLOR_SECONDARY_SIGNAL, LINE_WIDTH_PLOT};
use crate::plot_framework::{
    calculate_range, index_range, indexed_points, value_bounds, PlotConfig, PlotSeries,
};

/// Builds the input chart: the primary signal and the secondary signal as
/// shifted by the current lag, both against sample index.
pub fn input_alignment_config(
    primary_name: &str,
    primary: ArrayView1<f64>,
    secondary_name: &str,
    shifted_secondary: ArrayView1<f64>,
    lag: i64,
) -> Option<PlotConfig> {
    let (val_min, val_max) = value_bounds(&[primary.view(), shifted_secondary.view()])?;
    let (final_value_min, final_value_max) = calculate_range(val_min, val_max);

    let color_primary: RGBColor = *COLOR_PRIMARY_SIGNAL;
    let color_secondary: RGBColor = *COLOR_SECONDARY_SIGNAL;

    let series = vec![
        PlotSeries {
            data: indexed_points(primary),
            label: primary_name.to_string(),
            color: color_primary,
            stroke_width: LINE_WIDTH_PLOT,
        },
        PlotSeries {
            data: indexed_points(shifted_secondary),
            label: format!("{secondary_name} (lag {lag})"),
            color: color_secondary,
            stroke_width: LINE_WIDTH_PLOT,
        },
    ];

    Some(PlotConfig {
        title: format!("Input Plot (Time Lag {lag})"),
        x_range: index_range(primary.len().max(shifted_secondary.len())),
        y_range: final_value_min..final_value_max,
        series,
        x_label: "Sample".to_string(),
        y_label: "Amplitude".to_string(),
    })
}
