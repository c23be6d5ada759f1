// src/lib.rs - Library interface for internal module access

pub mod config;
pub mod constants;
pub mod correlation_session;
pub mod data_analysis;
pub mod data_input;
pub mod data_table;
pub mod error;
pub mod logging;
pub mod plot_framework;
pub mod plot_functions;

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
