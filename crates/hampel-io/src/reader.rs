//! Reader for whitespace-delimited recordings
//!
//! Files are headerless: every non-blank line is one sample, with one
//! whitespace-separated numeric field per channel. The first non-blank line
//! fixes the channel count. Rows with a missing, unparseable or non-finite
//! field are dropped; rows with extra fields are rejected.

use crate::error::{Error, Result};
use crate::table::SignalTable;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Why a row was left out of the table
#[derive(Debug, Clone, PartialEq)]
pub enum DroppedRow {
    /// Fewer fields than channels
    Short { line: usize, found: usize },
    /// A field that is not a finite number
    Malformed { line: usize, field: String },
}

/// Loaded table plus the rows that were dropped
#[derive(Debug, Clone)]
pub struct LoadedSignal {
    pub table: SignalTable,
    pub dropped: Vec<DroppedRow>,
}

/// Read a recording from `path`
pub fn read_signal_table(path: impl AsRef<Path>) -> Result<LoadedSignal> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let loaded = parse_signal_table(file)?;
    debug!(
        "Loaded {} | Columns: {} | Samples: {}",
        path.display(),
        loaded.table.n_columns(),
        loaded.table.n_rows()
    );
    Ok(loaded)
}

/// Parse a recording from any reader
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// stray byte only drops the row it appears in.
pub fn parse_signal_table<R: Read>(mut reader: R) -> Result<LoadedSignal> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8_lossy(&bytes);

    let mut n_columns = None;
    let mut rows = Vec::new();
    let mut dropped = Vec::new();

    for (k, raw) in text.lines().enumerate() {
        let line = k + 1;
        let fields: Vec<&str> = raw.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let expected = *n_columns.get_or_insert(fields.len());

        if fields.len() > expected {
            return Err(Error::RaggedRow {
                line,
                expected,
                found: fields.len(),
            });
        }
        if fields.len() < expected {
            warn!("Dropping line {line}: {} of {expected} fields", fields.len());
            dropped.push(DroppedRow::Short {
                line,
                found: fields.len(),
            });
            continue;
        }

        match parse_row(&fields) {
            Ok(row) => rows.push(row),
            Err(field) => {
                warn!("Dropping line {line}: malformed value {field:?}");
                dropped.push(DroppedRow::Malformed {
                    line,
                    field: field.to_string(),
                });
            }
        }
    }

    let n_columns = n_columns.ok_or(Error::EmptyFile)?;
    if rows.is_empty() {
        return Err(Error::EmptyFile);
    }

    Ok(LoadedSignal {
        table: SignalTable::from_rows(n_columns, rows),
        dropped,
    })
}

/// Parse every field, returning the first bad one on failure
fn parse_row<'a>(fields: &[&'a str]) -> std::result::Result<Vec<f64>, &'a str> {
    fields
        .iter()
        .map(|&field| match field.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(field),
        })
        .collect()
}
