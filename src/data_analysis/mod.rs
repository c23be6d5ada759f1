// src/data_analysis/mod.rs

pub mod correlation_peak;
pub mod cross_correlation;
pub mod lag_window;
pub mod normalization;
pub mod padding;

// src/data_analysis/mod.rs
