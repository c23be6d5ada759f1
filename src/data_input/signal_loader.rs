// src/data_input/signal_loader.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::data_input::signal_data::Signal;
use crate::error::LoadError;

/// Marks the start of a comment; the rest of the line is ignored.
const COMMENT_MARKER: char = '#';

/// Parses whitespace/newline-delimited floating-point tokens.
///
/// Blank lines and `#` comments are skipped. Any other token that does not
/// parse as `f64` fails the whole read; `path` is only used for the error.
pub fn parse_signal_text<R: BufRead>(reader: R, path: &Path) -> Result<Vec<f64>, LoadError> {
    let mut samples = Vec::new();

    for (line_index, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content = match line.find(COMMENT_MARKER) {
            Some(pos) => &line[..pos],
            None => line.as_str(),
        };

        for token in content.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| LoadError::Parse {
                path: path.to_path_buf(),
                line: line_index + 1,
                token: token.to_string(),
            })?;
            samples.push(value);
        }
    }

    Ok(samples)
}

/// Reads one signal file into a named `Signal`.
pub fn load_signal(path: &Path, name: &str) -> Result<Signal, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let samples = parse_signal_text(BufReader::new(file), path)?;
    debug!(path = %path.display(), samples = samples.len(), "parsed signal file");

    Ok(Signal::new(name, samples).with_source(path))
}

/// Reads the primary and secondary signal files.
///
/// Both are read before returning so a bad secondary file is reported even
/// when the primary is fine.
pub fn load_signal_pair(
    primary_path: &Path,
    secondary_path: &Path,
) -> Result<(Signal, Signal), LoadError> {
    let primary = load_signal(primary_path, crate::constants::PRIMARY_SIGNAL_NAME)?;
    let secondary = load_signal(secondary_path, crate::constants::SECONDARY_SIGNAL_NAME)?;
    info!(
        primary = %primary_path.display(),
        primary_len = primary.len(),
        secondary = %secondary_path.display(),
        secondary_len = secondary.len(),
        "loaded signals"
    );
    Ok((primary, secondary))
}
