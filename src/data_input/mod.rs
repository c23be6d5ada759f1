// src/data_input/mod.rs

pub mod signal_data;
pub mod signal_loader;

// src/data_input/mod.rs
