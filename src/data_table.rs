// src/data_table.rs

use std::io::Write;

use csv::WriterBuilder;
use ndarray::ArrayView1;

use crate::constants::{CORRELATION_NAME, NORMALIZED_CORRELATION_NAME};
use crate::correlation_session::{CorrelationSession, LagResult};
use crate::error::RenderError;

const TABLE_TARGET: &str = "data table";

fn cell(values: ArrayView1<f64>, row: usize) -> String {
    values.get(row).map(|v| v.to_string()).unwrap_or_default()
}

/// Writes the four derived sequences as a tab-separated table, one row per
/// index. Rows run to the longest column; shorter columns leave cells empty.
pub fn write_data_table<W: Write>(
    writer: W,
    session: &CorrelationSession,
    result: &LagResult,
) -> Result<(), RenderError> {
    let primary = session.primary().view();
    let shifted = result.shifted_secondary.view();
    let correlation = result.correlation.view();
    let normalized = result.normalized_correlation.view();

    let mut wtr = WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    wtr.write_record([
        "Index",
        session.primary().name(),
        session.secondary().name(),
        CORRELATION_NAME,
        NORMALIZED_CORRELATION_NAME,
    ])
    .map_err(|e| RenderError::new(TABLE_TARGET, e))?;

    let row_count = [primary.len(), shifted.len(), correlation.len(), normalized.len()]
        .into_iter()
        .max()
        .unwrap_or(0);

    for row in 0..row_count {
        wtr.write_record([
            row.to_string(),
            cell(primary, row),
            cell(shifted, row),
            cell(correlation, row),
            cell(normalized, row),
        ])
        .map_err(|e| RenderError::new(TABLE_TARGET, e))?;
    }

    wtr.flush().map_err(|e| RenderError::new(TABLE_TARGET, e))?;
    Ok(())
}

/// One-line description of the current lag and the correlation peak.
pub fn lag_summary(session: &CorrelationSession, result: &LagResult) -> String {
    let bounds = session.lag_bounds();
    let peak = match result.peak {
        Some(p) => format!(
            "peak {} (normalized {}) at offset {}",
            p.value,
            p.value / session.primary().len() as f64,
            p.offset
        ),
        None => "no peak".to_string(),
    };
    format!(
        "Time Lag {} (range {}..={}), {} samples, {}",
        result.lag,
        bounds.min(),
        bounds.max(),
        result.correlation.len(),
        peak
    )
}
