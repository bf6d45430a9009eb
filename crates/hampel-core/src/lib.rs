//! Core types and primitives for Hampel-filter outlier detection
//!
//! This crate provides the pieces shared by the other hampel crates:
//!
//! - [`Error`] and [`Result`], the unified error type
//! - [`utils`], robust primitives (median, scaled MAD) over `f64` slices
//! - [`execution`], sequential and (with the `parallel` feature) Rayon-backed
//!   engines for evaluating independent indices
//!
//! # Example
//!
//! ```rust
//! use hampel_core::utils::{median, scaled_mad};
//!
//! let window = [1.0, 2.0, 3.0, 4.0, 100.0];
//! assert_eq!(median(&window).unwrap(), 3.0);
//! assert!(scaled_mad(&window).unwrap() < 2.0);
//! ```

pub mod error;
pub mod execution;
pub mod utils;

pub use error::{Error, Result};
pub use execution::{sequential, ExecutionEngine, ExecutionStrategy, SequentialEngine};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};
pub use utils::MAD_CONSISTENCY_CONSTANT;
