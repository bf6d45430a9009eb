//! Filter parameters and their builder

use hampel_core::{Error, Result};
use std::fmt;

/// Default window size (samples)
pub const DEFAULT_WINDOW_SIZE: usize = 21;

/// Default threshold multiplier on the scaled MAD
pub const DEFAULT_THRESHOLD: f64 = 3.0;

/// Parameters of a single Hampel filter invocation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParameters {
    /// Number of samples in the full window; the half-width is `window_size / 2`
    pub window_size: usize,
    /// Multiplier on the scaled MAD above which a sample is an outlier
    pub threshold: f64,
    /// Cap on outlier magnitude. Carried and reported, never consulted by
    /// detection or correction.
    pub max_delta: Option<f64>,
}

impl FilterParameters {
    /// Create parameters without a `max_delta`, validating them
    pub fn new(window_size: usize, threshold: f64) -> Result<Self> {
        let params = Self {
            window_size,
            threshold,
            max_delta: None,
        };
        params.validate()?;
        Ok(params)
    }

    /// Start building a parameter set from the defaults
    pub fn builder() -> FilterParametersBuilder {
        FilterParametersBuilder::default()
    }

    /// Half-width of the window
    pub fn half_window(&self) -> usize {
        self.window_size / 2
    }

    /// Check that `window_size >= 1` and `threshold` is positive and finite
    pub fn validate(&self) -> Result<()> {
        validate_window_size(self.window_size)?;
        validate_threshold(self.threshold)
    }
}

impl Default for FilterParameters {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            threshold: DEFAULT_THRESHOLD,
            max_delta: None,
        }
    }
}

impl fmt::Display for FilterParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "window_size={}, threshold={}",
            self.window_size, self.threshold
        )?;
        if let Some(max_delta) = self.max_delta {
            write!(f, ", max_delta={max_delta} (unused)")?;
        }
        Ok(())
    }
}

pub(crate) fn validate_window_size(window_size: usize) -> Result<()> {
    if window_size == 0 {
        return Err(Error::invalid_window(window_size));
    }
    Ok(())
}

pub(crate) fn validate_threshold(threshold: f64) -> Result<()> {
    if !(threshold.is_finite() && threshold > 0.0) {
        return Err(Error::invalid_threshold(threshold));
    }
    Ok(())
}

/// Builder for [`FilterParameters`]
///
/// Unset fields keep their defaults; [`build`](Self::build) validates.
#[derive(Debug, Clone, Default)]
pub struct FilterParametersBuilder {
    params: FilterParameters,
}

impl FilterParametersBuilder {
    /// Sets the window size (samples, at least 1)
    pub fn window_size(mut self, window_size: usize) -> Self {
        self.params.window_size = window_size;
        self
    }

    /// Sets the threshold multiplier (positive)
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.params.threshold = threshold;
        self
    }

    /// Sets the max-delta slot
    pub fn max_delta(mut self, max_delta: f64) -> Self {
        self.params.max_delta = Some(max_delta);
        self
    }

    /// Sets or clears the max-delta slot
    pub fn maybe_max_delta(mut self, max_delta: Option<f64>) -> Self {
        self.params.max_delta = max_delta;
        self
    }

    /// Validates and returns the parameters
    pub fn build(self) -> Result<FilterParameters> {
        self.params.validate()?;
        Ok(self.params)
    }
}
