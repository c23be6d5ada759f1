// src/plot_functions/plot_correlation.rs

use ndarray::ArrayView1;
use plotters::style::RGBColor;

use crate::constants::{
    COLOR_CORRELATION, COLOR_NORMALIZED_CORRELATION, CORRELATION_NAME, LINE_WIDTH_PLOT,
    NORMALIZED_CORRELATION_NAME,
};
use crate::data_analysis::correlation_peak::CorrelationPeak;
use crate::plot_framework::{
    calculate_range, index_range, indexed_points, value_bounds, PlotConfig, PlotSeries,
};

fn correlation_series_config(
    title: String,
    label: &str,
    values: ArrayView1<f64>,
    color: RGBColor,
) -> Option<PlotConfig> {
    let (val_min, val_max) = value_bounds(&[values])?;
    let (final_value_min, final_value_max) = calculate_range(val_min, val_max);

    Some(PlotConfig {
        title,
        x_range: index_range(values.len()),
        y_range: final_value_min..final_value_max,
        series: vec![PlotSeries {
            data: indexed_points(values),
            label: label.to_string(),
            color,
            stroke_width: LINE_WIDTH_PLOT,
        }],
        x_label: "Offset".to_string(),
        y_label: label.to_string(),
    })
}

fn peak_suffix(peak: Option<CorrelationPeak>, divisor: f64) -> String {
    match peak {
        Some(p) => format!(" - peak {:.4} at offset {}", p.value / divisor, p.offset),
        None => String::new(),
    }
}

/// Raw sliding dot products against offset.
pub fn correlation_config(
    correlation: ArrayView1<f64>,
    peak: Option<CorrelationPeak>,
) -> Option<PlotConfig> {
    correlation_series_config(
        format!("Correlation Plot{}", peak_suffix(peak, 1.0)),
        CORRELATION_NAME,
        correlation,
        *COLOR_CORRELATION,
    )
}

/// Correlation divided by the primary length, against offset.
pub fn normalized_correlation_config(
    normalized: ArrayView1<f64>,
    peak: Option<CorrelationPeak>,
    primary_len: usize,
) -> Option<PlotConfig> {
    correlation_series_config(
        format!("Normalization{}", peak_suffix(peak, primary_len as f64)),
        NORMALIZED_CORRELATION_NAME,
        normalized,
        *COLOR_NORMALIZED_CORRELATION,
    )
}
