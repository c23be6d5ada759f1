// src/plot_functions/mod.rs

pub mod plot_correlation;
pub mod plot_cross_correlation;
pub mod plot_input_alignment;

// src/plot_functions/mod.rs
