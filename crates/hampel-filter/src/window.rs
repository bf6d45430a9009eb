//! Clamped sliding windows and their robust statistics
//!
//! Detection and correction both go through [`window_bounds`], so the two
//! always look at the same samples for a given index.

use hampel_core::utils::{mad_around, median_mut};
use hampel_core::{Result, MAD_CONSISTENCY_CONSTANT};
use std::ops::Range;

/// Bounds of the window centred on `index` in a signal of length `len`
///
/// The window spans `index - window_size / 2 ..= index + window_size / 2`
/// and is clamped to `0..len`; it shrinks near the edges and always
/// contains `index`.
#[inline]
pub fn window_bounds(index: usize, len: usize, window_size: usize) -> Range<usize> {
    debug_assert!(index < len);
    let half = window_size / 2;
    let start = index.saturating_sub(half);
    let end = index.saturating_add(half).saturating_add(1).min(len);
    start..end
}

/// Local center and spread of one window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowStats {
    /// Median of the window
    pub median: f64,
    /// MAD of the window scaled by the consistency constant
    pub scaled_mad: f64,
}

impl WindowStats {
    /// Compute the statistics of `window`
    ///
    /// `values` and `deviations` are scratch buffers, reused across windows.
    pub fn compute(
        window: &[f64],
        values: &mut Vec<f64>,
        deviations: &mut Vec<f64>,
    ) -> Result<Self> {
        values.clear();
        values.extend_from_slice(window);
        let median = median_mut(values)?;
        let mad = mad_around(window, median, deviations)?;
        Ok(Self {
            median,
            scaled_mad: MAD_CONSISTENCY_CONSTANT * mad,
        })
    }

    /// Whether the window has zero spread
    ///
    /// A flat window gives no basis for an outlier test, so its center
    /// sample is never flagged.
    pub fn is_degenerate(&self) -> bool {
        self.scaled_mad == 0.0
    }

    /// Hampel decision rule for `value` against this window
    pub fn is_outlier(&self, value: f64, threshold: f64) -> bool {
        if self.is_degenerate() {
            return false;
        }
        (value - self.median).abs() > threshold * self.scaled_mad
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bounds_interior() {
        assert_eq!(window_bounds(5, 11, 5), 3..8);
        assert_eq!(window_bounds(5, 11, 4), 3..8);
        assert_eq!(window_bounds(5, 11, 1), 5..6);
    }

    #[test]
    fn test_bounds_clamped_at_edges() {
        assert_eq!(window_bounds(0, 11, 5), 0..3);
        assert_eq!(window_bounds(1, 11, 5), 0..4);
        assert_eq!(window_bounds(10, 11, 5), 8..11);
    }

    #[test]
    fn test_bounds_window_larger_than_signal() {
        for i in 0..3 {
            assert_eq!(window_bounds(i, 3, 21), 0..3);
        }
        assert_eq!(window_bounds(2, 3, usize::MAX), 0..3);
    }

    #[test]
    fn test_stats_with_spike() {
        let (mut v, mut d) = (Vec::new(), Vec::new());
        let stats = WindowStats::compute(&[1.0, 2.0, 3.0, 4.0, 100.0], &mut v, &mut d).unwrap();
        assert_eq!(stats.median, 3.0);
        assert_relative_eq!(stats.scaled_mad, 1.4826, epsilon = 1e-12);
        assert!(stats.is_outlier(100.0, 3.0));
        assert!(!stats.is_outlier(4.0, 3.0));
    }

    #[test]
    fn test_degenerate_window_never_flags() {
        let (mut v, mut d) = (Vec::new(), Vec::new());
        // Majority-flat window: MAD is zero even though one value sticks out
        let stats = WindowStats::compute(&[0.0, 0.0, 100.0, 0.0, 0.0], &mut v, &mut d).unwrap();
        assert!(stats.is_degenerate());
        assert!(!stats.is_outlier(100.0, 3.0));
    }

    #[test]
    fn test_single_sample_window() {
        let (mut v, mut d) = (Vec::new(), Vec::new());
        let stats = WindowStats::compute(&[42.0], &mut v, &mut d).unwrap();
        assert_eq!(stats.median, 42.0);
        assert!(stats.is_degenerate());
    }
}
