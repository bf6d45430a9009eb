//! Export of cleaned tables as comma-separated text

use crate::error::Result;
use crate::table::SignalTable;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extension of exported files
pub const FILTERED_EXTENSION: &str = "ecg";

/// Write `table` as CSV: a header row of column names, then one row per sample
pub fn write_signal_table<W: Write>(table: &SignalTable, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(table.names())?;
    for i in 0..table.n_rows() {
        wtr.write_record(table.row(i).map(|v| v.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `table` to `path`, replacing any existing file
pub fn write_signal_table_to_path(table: &SignalTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_signal_table(table, File::create(path)?)?;
    debug!("Wrote {} rows to {}", table.n_rows(), path.display());
    Ok(())
}

/// Default export path: `<dir>/<name up to the first dot>_filtered.ecg`
pub fn default_output_path(input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();
    let name = format!("{stem}_filtered.{FILTERED_EXTENSION}");
    match input.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}
