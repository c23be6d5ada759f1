// src/error.rs

//! Error types for loading, validating and rendering signals.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a signal file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file is missing or could not be read.
    #[error("Failed to read signal file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A token in the file is not a floating-point number.
    #[error("Invalid number '{token}' in '{path}' at line {line}")]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },
}

/// Errors raised when signals are unusable for correlation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Signal '{name}' is empty; at least one sample is required")]
    EmptySignal { name: String },
}

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Plot size {width}x{height} is too small; need at least {min_width}x{min_height}")]
    PlotSize {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
}

/// Chart or table output failed.
#[derive(Debug, Error)]
#[error("Failed to render '{target}': {message}")]
pub struct RenderError {
    pub target: String,
    pub message: String,
}

impl RenderError {
    pub fn new(target: impl Into<String>, message: impl ToString) -> Self {
        Self {
            target: target.into(),
            message: message.to_string(),
        }
    }
}

/// Top-level error for a correlation session.
#[derive(Debug, Error)]
pub enum CorrelationError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type CorrelationResult<T> = Result<T, CorrelationError>;
