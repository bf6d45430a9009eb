//! Sliding-window Hampel filter for point anomalies in sampled signals
//!
//! The filter estimates the local center and spread of a signal with the
//! median and the scaled Median Absolute Deviation (MAD) of a window around
//! each sample, flags samples that sit too far from the center, and replaces
//! them with the window median.
//!
//! # Decision rule
//!
//! For sample `i` of a signal of length `N`, with `half = window_size / 2`:
//!
//! 1. `window = signal[max(0, i - half) .. min(N, i + half + 1)]`
//! 2. `median = median(window)`, `mad = 1.4826 * median(|window - median|)`
//! 3. if `mad == 0` the sample is never flagged
//! 4. otherwise `i` is an outlier iff `|signal[i] - median| > threshold * mad`
//!
//! # Examples
//!
//! ```rust
//! use hampel_filter::{FilterParameters, HampelFilter, OutlierFilter};
//!
//! let signal = vec![0.0, 0.5, -0.5, 0.25, -0.25, 100.0, 0.5, -0.5, 0.25, -0.25, 0.0];
//!
//! let params = FilterParameters::builder()
//!     .window_size(5)
//!     .threshold(3.0)
//!     .build()
//!     .unwrap();
//! let filter = HampelFilter::new(params).unwrap();
//! let result = filter.apply(&signal).unwrap();
//!
//! assert_eq!(result.outliers().indices(), &[5]);
//! assert_eq!(result.cleaned()[5], 0.25);
//! ```

pub mod filter;
pub mod params;
pub mod report;
pub mod traits;
pub mod types;
pub mod visualization;
pub mod window;

pub use filter::{correct, detect, HampelFilter};
pub use params::{FilterParameters, FilterParametersBuilder, DEFAULT_THRESHOLD, DEFAULT_WINDOW_SIZE};
pub use report::{DeviationHistogram, HistogramBin, OutlierEntry, OutlierReport, DEFAULT_HISTOGRAM_BINS};
pub use traits::{OutlierCorrector, OutlierDetector, OutlierDetectorProperties, OutlierFilter};
pub use types::{CleanedSignal, FilterResult, OutlierSet};
pub use visualization::{NullOutlierVisualizer, OutlierVisualizer};
pub use window::{window_bounds, WindowStats};

pub use hampel_core::{Error, Result};
