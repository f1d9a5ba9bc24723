//! Acquisition step: one line in, at most one sample out
//!
//! The sensor emits records of the form `Distance: <float>\n`. Each tick reads
//! one record, and a well-formed one is stored negated so that the chart
//! grows downward from zero as the measured distance increases. Anything else
//! is dropped without touching the history.

use crate::backend::serial::LineSource;
use crate::error::{Result, ResultExt};
use crate::types::{History, RejectReason, TickOutcome};

/// Label that every accepted record starts with
pub const DISTANCE_PREFIX: &str = "Distance: ";

/// Separator between a label and its value
const FIELD_SEPARATOR: &str = ": ";

/// Decode raw bytes as UTF-8, dropping invalid sequences, and trim
pub fn decode_line(bytes: &[u8]) -> String {
    let text: String = bytes.utf8_chunks().map(|chunk| chunk.valid()).collect();
    text.trim().to_string()
}

/// Extract the distance value from a decoded line
///
/// Only the field directly after the label is considered; a further
/// `": "`-separated field is ignored.
pub fn parse_distance(line: &str) -> std::result::Result<f64, RejectReason> {
    if line.is_empty() {
        return Err(RejectReason::Empty);
    }

    let rest = line
        .strip_prefix(DISTANCE_PREFIX)
        .ok_or(RejectReason::MissingPrefix)?;

    let field = rest.split(FIELD_SEPARATOR).next().unwrap_or(rest).trim();

    match field.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RejectReason::InvalidNumber),
    }
}

/// Turn a decoded line into a history update
pub fn apply_line(line: &str, history: &mut History) -> TickOutcome {
    match parse_distance(line) {
        Ok(distance) => {
            let value = -distance;
            if let Some(evicted) = history.push(value) {
                tracing::trace!("Evicted {} from history", evicted);
            }
            TickOutcome::Appended(value)
        }
        Err(reason) => {
            tracing::trace!("Ignoring line {:?}: {}", line, reason);
            TickOutcome::Ignored(reason)
        }
    }
}

/// Run one acquisition tick against `source`
///
/// Returns the outcome together with the number of raw bytes read. Read
/// errors are returned to the caller; no retry is attempted.
pub fn tick(source: &mut dyn LineSource, history: &mut History) -> Result<(TickOutcome, usize)> {
    let bytes = source
        .read_line()
        .context("Failed to read from serial port")?;
    let line = decode_line(&bytes);
    Ok((apply_line(&line, history), bytes.len()))
}
