// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use ndarray::ArrayView1;
use ndarray_stats::QuantileExt;
use tracing::{debug, warn};

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE,
    FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, MIN_PLOT_ROW_HEIGHT, MIN_PLOT_WIDTH, PLOT_TITLE_MARGIN,
};

/// Smallest `(width, height)` that fits `rows` stacked charts.
pub fn min_plot_size(rows: usize) -> (u32, u32) {
    let rows = u32::try_from(rows.max(1)).unwrap_or(u32::MAX);
    (
        MIN_PLOT_WIDTH,
        PLOT_TITLE_MARGIN.saturating_add(rows.saturating_mul(MIN_PLOT_ROW_HEIGHT)),
    )
}

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// X range for a series plotted against sample index.
/// A single sample still gets a non-empty range.
pub fn index_range(len: usize) -> Range<f64> {
    0.0..(len.max(2) - 1) as f64
}

/// Pairs each sample with its index, for plotting against sample number.
pub fn indexed_points(values: ArrayView1<f64>) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect()
}

/// Smallest and largest finite-ordered value across all `series`, skipping NaN.
/// `None` when every series is empty or all-NaN.
pub fn value_bounds(series: &[ArrayView1<f64>]) -> Option<(f64, f64)> {
    let mut min_val = f64::INFINITY;
    let mut max_val = f64::NEG_INFINITY;
    for values in series {
        if values.is_empty() {
            continue;
        }
        let lo = *values.min_skipnan();
        let hi = *values.max_skipnan();
        if !lo.is_nan() {
            min_val = min_val.min(lo);
        }
        if !hi.is_nan() {
            max_val = max_val.max(hi);
        }
    }
    if min_val.is_infinite() || max_val.is_infinite() {
        return None;
    }
    Some((min_val, max_val))
}

/// Y-axis tick label. Large values use k/M notation, small fractional
/// values (normalized correlation) keep one decimal.
pub fn format_y_axis_label(y: f64) -> String {
    if y.abs() >= 1_000_000.0 {
        format!("{:.1}M", y / 1_000_000.0)
    } else if y.abs() >= 1000.0 {
        format!("{:.0}k", y / 1000.0)
    } else if y.abs() < 10.0 && y.fract() != 0.0 {
        format!("{:.1}", y)
    } else {
        format!("{:.0}", y)
    }
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    const CHAR_WIDTH_RATIO: f32 = 0.6;
    const LINE_HEIGHT_SPACING: i32 = 4;

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (
        (x_range.end - x_range.start) as u32,
        (y_range.end - y_range.start) as u32,
    );
    let message = format!("{plot_type} Data Unavailable:\n{reason}");

    // Estimate text dimensions for centering
    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;

    let lines: Vec<&str> = message.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let estimated_text_width = max_line_length.saturating_mul(estimated_char_width as usize) as i32;
    let estimated_text_height = lines.len().saturating_mul(estimated_line_height as usize) as i32;

    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - estimated_text_height / 2;

    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

/// Draws one chart into `area` from a `PlotConfig`.
fn draw_single_chart_with_config(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(20)
        .y_labels(10)
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format_y_axis_label(*y))
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_series_count = 0;
    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            s.color.stroke_width(s.stroke_width),
        ))?;

        if !s.label.is_empty() {
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    s.color.stroke_width(LINE_WIDTH_LEGEND),
                )
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    Ok(())
}

/// Creates a plot image with `rows` charts stacked vertically.
///
/// `get_row_plot_data` is called once per row; returning `None` (or a config
/// with no data / an empty range) draws a placeholder message in that row.
pub fn draw_stacked_plot<'a, F>(
    output_path: &'a Path,
    root_name: &str,
    plot_size: (u32, u32),
    row_names: &[&str],
    mut get_row_plot_data: F,
) -> Result<bool, Box<dyn Error>>
where
    F: FnMut(usize) -> Option<PlotConfig>,
    <BitMapBackend<'a> as DrawingBackend>::ErrorType: 'static,
{
    let (min_width, min_height) = min_plot_size(row_names.len());
    if plot_size.0 < min_width || plot_size.1 < min_height {
        return Err(format!(
            "plot size {}x{} is smaller than the minimum {min_width}x{min_height}",
            plot_size.0, plot_size.1
        )
        .into());
    }

    let root_area = BitMapBackend::new(output_path, plot_size).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((row_names.len(), 1));
    let mut any_row_plotted = false;

    for (row_index, (area, row_name)) in sub_plot_areas.iter().zip(row_names).enumerate() {
        match get_row_plot_data(row_index) {
            Some(plot_config) => {
                let has_data = plot_config.series.iter().any(|s| !s.data.is_empty());
                let valid_ranges = plot_config.x_range.end > plot_config.x_range.start
                    && plot_config.y_range.end > plot_config.y_range.start;
                if has_data && valid_ranges {
                    draw_single_chart_with_config(area, &plot_config)?;
                    any_row_plotted = true;
                } else {
                    let reason = if !has_data {
                        "No data points"
                    } else {
                        "Invalid ranges"
                    };
                    debug!(row = row_name, reason, "drawing placeholder");
                    draw_unavailable_message(area, row_name, reason)?;
                }
            }
            None => {
                draw_unavailable_message(area, row_name, "Calculation/Data Extraction Failed")?;
            }
        }
    }

    root_area.present()?;
    if !any_row_plotted {
        warn!(
            path = %output_path.display(),
            "no chart had data; image only contains placeholder messages"
        );
    }
    Ok(any_row_plotted)
}


// src/plot_framework.rs
