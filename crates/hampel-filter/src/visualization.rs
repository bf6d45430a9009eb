//! Visualization interface for the Hampel filter
//!
//! The filter calls these hooks without depending on a plotting library.
//! Use [`NullOutlierVisualizer`] when nothing should be recorded.

use crate::types::FilterResult;
use hampel_core::Result;

/// Hooks invoked while a filter runs
pub trait OutlierVisualizer {
    /// Record the input signal before analysis begins
    fn record_signal(&self, signal: &[f64]) -> Result<()>;

    /// Record the final outliers and cleaned signal
    fn record_result(&self, signal: &[f64], result: &FilterResult) -> Result<()>;

    /// Check if this visualizer is active
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Null visualizer that does nothing (for when visualization is disabled)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOutlierVisualizer;

impl OutlierVisualizer for NullOutlierVisualizer {
    fn record_signal(&self, _signal: &[f64]) -> Result<()> {
        Ok(())
    }

    fn record_result(&self, _signal: &[f64], _result: &FilterResult) -> Result<()> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
