//! Core traits for outlier detection
//!
//! A detector classifies samples and a corrector replaces the flagged ones.
//! [`OutlierFilter::apply`] ties the two together over one signal.

use crate::types::{CleanedSignal, FilterResult, OutlierSet};
use hampel_core::Result;

/// Properties of an outlier detector that don't depend on the data
pub trait OutlierDetectorProperties {
    /// Get the name of the detection algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Get the minimum sample size for which detection can flag anything
    fn minimum_sample_size(&self) -> usize;
}

/// Classifies samples of a one-dimensional signal as inliers or outliers
pub trait OutlierDetector: OutlierDetectorProperties {
    /// Return the sorted set of outlier indices in `signal`
    fn detect(&self, signal: &[f64]) -> Result<OutlierSet>;
}

/// Replaces flagged samples of a signal
pub trait OutlierCorrector {
    /// Return a copy of `signal` with every index in `outliers` replaced
    fn correct(&self, signal: &[f64], outliers: &OutlierSet) -> Result<CleanedSignal>;
}

/// Detection followed by correction
pub trait OutlierFilter: OutlierDetector + OutlierCorrector {
    /// Detect outliers and correct them in one pass over `signal`
    fn apply(&self, signal: &[f64]) -> Result<FilterResult>;
}
