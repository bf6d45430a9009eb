//! Hampel-filter outlier removal for recorded physiological waveforms
//!
//! This crate re-exports the workspace crates and provides the `hampel-ecg`
//! command-line tool:
//!
//! - [`hampel_core`]: error type, robust primitives, execution engines
//! - [`hampel_filter`]: detection, correction and outlier reports
//! - [`hampel_io`]: loading recordings and exporting cleaned tables
//! - [`hampel_viz`]: SVG charts of a filter run
//!
//! # Example
//!
//! ```rust
//! use hampel_ecg::{FilterParameters, HampelFilter, OutlierFilter};
//! use hampel_ecg::io::parse_signal_table;
//!
//! let recording = "0.0\n0.5\n-0.5\n0.25\n-0.25\n100.0\n0.5\n-0.5\n0.25\n-0.25\n0.0\n";
//! let table = parse_signal_table(recording.as_bytes()).unwrap().table;
//!
//! let filter = HampelFilter::new(FilterParameters::new(5, 3.0).unwrap()).unwrap();
//! let result = filter.apply(table.column(0).unwrap()).unwrap();
//! assert_eq!(result.outliers().indices(), &[5]);
//! ```

pub mod cli;

pub use hampel_core::{Error, ExecutionEngine, Result, SequentialEngine};
#[cfg(feature = "parallel")]
pub use hampel_core::ParallelEngine;
pub use hampel_filter::{
    correct, detect, CleanedSignal, DeviationHistogram, FilterParameters, FilterResult,
    HampelFilter, OutlierCorrector, OutlierDetector, OutlierFilter, OutlierReport, OutlierSet,
    OutlierVisualizer,
};

pub use hampel_io as io;
pub use hampel_viz as viz;
