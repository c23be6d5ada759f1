// src/config.rs

//! TOML settings for input paths, analysis, plotting and logging.
//!
//! Every section and field has a default, so an empty file (or no file at
//! all) yields a working configuration. Command-line flags are applied on
//! top by the binary.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::{
    DEFAULT_PRIMARY_PATH, DEFAULT_SECONDARY_PATH, PLOT_HEIGHT, PLOT_WIDTH, STACKED_PLOT_ROWS,
};
use crate::data_analysis::padding::PaddingScheme;
use crate::error::ConfigError;
use crate::plot_framework::min_plot_size;

/// Root settings structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub input: InputSettings,

    #[serde(default)]
    pub analysis: AnalysisSettings,

    #[serde(default)]
    pub plot: PlotSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where the two signal files live.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InputSettings {
    #[serde(default = "default_primary_path")]
    pub primary: PathBuf,

    #[serde(default = "default_secondary_path")]
    pub secondary: PathBuf,
}

fn default_primary_path() -> PathBuf {
    PathBuf::from(DEFAULT_PRIMARY_PATH)
}

fn default_secondary_path() -> PathBuf {
    PathBuf::from(DEFAULT_SECONDARY_PATH)
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            primary: default_primary_path(),
            secondary: default_secondary_path(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisSettings {
    /// Zero padding around the secondary signal.
    #[serde(default)]
    pub padding: PaddingScheme,

    /// Lag used when none is given on the command line.
    #[serde(default)]
    pub default_lag: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlotSettings {
    #[serde(default = "default_plot_width")]
    pub width: u32,

    #[serde(default = "default_plot_height")]
    pub height: u32,

    /// Directory the PNG files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_plot_width() -> u32 {
    PLOT_WIDTH
}

fn default_plot_height() -> u32 {
    PLOT_HEIGHT
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl PlotSettings {
    /// Rejects images too small for the stacked correlation charts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min_width, min_height) = min_plot_size(STACKED_PLOT_ROWS);
        if self.width < min_width || self.height < min_height {
            return Err(ConfigError::PlotSize {
                width: self.width,
                height: self.height,
                min_width,
                min_height,
            });
        }
        Ok(())
    }
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            width: default_plot_width(),
            height: default_plot_height(),
            output_dir: default_output_dir(),
        }
    }
}

/// Log verbosity when `RUST_LOG` is not set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// One step more verbose per count, saturating at `Trace`.
    pub fn raised_by(self, steps: u8) -> Self {
        const ORDER: [LogLevel; 5] = [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];
        let current = ORDER.iter().position(|l| *l == self).unwrap_or(2);
        ORDER[(current + steps as usize).min(ORDER.len() - 1)]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub level: LogLevel,
}

impl Settings {
    /// Parses and validates settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content)?;
        settings.plot.validate()?;
        Ok(settings)
    }

    /// Reads settings from `path`. The file must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Reads settings from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn plot_size(&self) -> (u32, u32) {
        (self.plot.width, self.plot.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_gives_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.input.primary, PathBuf::from("Data/Heel123.txt"));
        assert_eq!(settings.input.secondary, PathBuf::from("Data/Toe123.txt"));
        assert_eq!(settings.analysis.padding, PaddingScheme::Asymmetric);
        assert_eq!(settings.plot_size(), (PLOT_WIDTH, PLOT_HEIGHT));
        assert_eq!(settings.logging.level, LogLevel::Info);
    }

    #[test]
    fn sections_override_individual_fields() {
        let settings = Settings::from_toml_str(
            r#"
            [input]
            secondary = "walk/toe.txt"

            [analysis]
            padding = "symmetric"
            default_lag = -3

            [plot]
            width = 800

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(settings.input.primary, PathBuf::from("Data/Heel123.txt"));
        assert_eq!(settings.input.secondary, PathBuf::from("walk/toe.txt"));
        assert_eq!(settings.analysis.padding, PaddingScheme::Symmetric);
        assert_eq!(settings.analysis.default_lag, -3);
        assert_eq!(settings.plot_size(), (800, PLOT_HEIGHT));
        assert_eq!(settings.logging.level, LogLevel::Debug);
    }

    #[test]
    fn unknown_padding_is_a_parse_error() {
        let err = Settings::from_toml_str("[analysis]\npadding = \"mirrored\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn undersized_plot_is_rejected() {
        for plot in ["width = 0", "height = 0", "width = 100", "height = 200"] {
            let err = Settings::from_toml_str(&format!("[plot]\n{plot}\n")).unwrap_err();
            assert!(matches!(err, ConfigError::PlotSize { .. }), "{plot}");
        }

        let (min_width, min_height) = min_plot_size(STACKED_PLOT_ROWS);
        let smallest = format!("[plot]\nwidth = {min_width}\nheight = {min_height}\n");
        assert_eq!(
            Settings::from_toml_str(&smallest).unwrap().plot_size(),
            (min_width, min_height)
        );
        assert!(PlotSettings::default().validate().is_ok());
    }

    #[test]
    fn explicit_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("settings.toml");
        assert!(matches!(
            Settings::load_or_default(Some(&missing)),
            Err(ConfigError::NotFound(_))
        ));
        assert_eq!(Settings::load_or_default(None).unwrap(), Settings::default());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[plot]\noutput_dir = \"charts\"").unwrap();
        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.plot.output_dir, PathBuf::from("charts"));
    }

    #[test]
    fn verbosity_steps_saturate_at_trace() {
        assert_eq!(LogLevel::Info.raised_by(0), LogLevel::Info);
        assert_eq!(LogLevel::Info.raised_by(1), LogLevel::Debug);
        assert_eq!(LogLevel::Warn.raised_by(5), LogLevel::Trace);
    }
}
