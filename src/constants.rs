// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{BLUE, GREEN, ORANGE, PURPLE};
use plotters::style::RGBColor;

// Default input locations, relative to the working directory.
pub const DEFAULT_PRIMARY_PATH: &str = "Data/Heel123.txt";
pub const DEFAULT_SECONDARY_PATH: &str = "Data/Toe123.txt";

// Display names used for legends and table headers.
pub const PRIMARY_SIGNAL_NAME: &str = "Heel Data";
pub const SECONDARY_SIGNAL_NAME: &str = "Toe Data";
pub const CORRELATION_NAME: &str = "Correlation";
pub const NORMALIZED_CORRELATION_NAME: &str = "Normalized Correlation";

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// Smallest image that still leaves room for the title margin, axis label
// areas and a readable chart in every stacked row.
pub const PLOT_TITLE_MARGIN: u32 = 50;
pub const MIN_PLOT_WIDTH: u32 = 320;
pub const MIN_PLOT_ROW_HEIGHT: u32 = 120;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 14;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// --- Plot Color Assignments ---
pub const COLOR_PRIMARY_SIGNAL: &RGBColor = &BLUE;
pub const COLOR_SECONDARY_SIGNAL: &RGBColor = &ORANGE;
pub const COLOR_CORRELATION: &RGBColor = &GREEN;
pub const COLOR_NORMALIZED_CORRELATION: &RGBColor = &PURPLE;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Rows in the stacked output image: input alignment, correlation, normalized correlation.
pub const STACKED_PLOT_ROWS: usize = 3;

// src/constants.rs
