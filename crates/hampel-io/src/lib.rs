//! Ingestion and export for recorded waveforms
//!
//! Reads headerless, whitespace-delimited numeric recordings into an
//! immutable [`SignalTable`] and writes cleaned tables back out as CSV.
//!
//! # Example
//!
//! ```rust
//! use hampel_io::{parse_signal_table, write_signal_table};
//!
//! let loaded = parse_signal_table("0.1 1.0\n0.2 1.1\n".as_bytes()).unwrap();
//! let mut out = Vec::new();
//! write_signal_table(&loaded.table, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("ECG1,ECG2\n"));
//! ```

mod error;
mod reader;
mod table;
mod writer;

pub use error::{Error, Result};
pub use reader::{parse_signal_table, read_signal_table, DroppedRow, LoadedSignal};
pub use table::{channel_name, SignalTable};
pub use writer::{default_output_path, write_signal_table, write_signal_table_to_path, FILTERED_EXTENSION};
