//! Sliding-window Hampel filter
//!
//! For each index the filter takes the clamped window around it, computes
//! the window median and the MAD scaled by 1.4826, and flags the sample when
//! its distance from the median exceeds `threshold` times the scaled MAD.
//! Windows with zero MAD never flag their sample. Correction replaces each
//! flagged sample with the median of its window over the original signal,
//! never over a partially corrected copy.

use crate::params::{validate_window_size, FilterParameters};
use crate::traits::{
    OutlierCorrector, OutlierDetector, OutlierDetectorProperties, OutlierFilter,
};
use crate::types::{CleanedSignal, FilterResult, OutlierSet};
use crate::visualization::{NullOutlierVisualizer, OutlierVisualizer};
use crate::window::{window_bounds, WindowStats};
use hampel_core::utils::{ensure_finite, median_mut};
use hampel_core::{Error, ExecutionEngine, Result, SequentialEngine};
use tracing::{debug, instrument};

/// Hampel outlier filter
#[derive(Debug, Clone)]
pub struct HampelFilter<E = SequentialEngine, V = NullOutlierVisualizer> {
    params: FilterParameters,
    engine: E,
    visualizer: V,
}

impl HampelFilter {
    /// Create a sequential filter with validated parameters
    pub fn new(params: FilterParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            engine: SequentialEngine::new(),
            visualizer: NullOutlierVisualizer,
        })
    }
}

impl<E: ExecutionEngine, V: OutlierVisualizer> HampelFilter<E, V> {
    /// Replace the execution engine
    pub fn with_engine<E2: ExecutionEngine>(self, engine: E2) -> HampelFilter<E2, V> {
        HampelFilter {
            params: self.params,
            engine,
            visualizer: self.visualizer,
        }
    }

    /// Replace the visualizer
    pub fn with_visualizer<V2: OutlierVisualizer>(self, visualizer: V2) -> HampelFilter<E, V2> {
        HampelFilter {
            params: self.params,
            engine: self.engine,
            visualizer,
        }
    }

    /// Parameters this filter runs with
    pub fn parameters(&self) -> &FilterParameters {
        &self.params
    }

    /// The visualizer receiving the filter's hooks
    pub fn visualizer(&self) -> &V {
        &self.visualizer
    }

    fn chunk_size(&self, n: usize) -> usize {
        if self.engine.is_parallel() {
            let target_chunks = self.engine.num_threads() * 6;
            n.div_ceil(target_chunks).max(64)
        } else {
            n.max(1)
        }
    }
}

impl<E, V> OutlierDetectorProperties for HampelFilter<E, V> {
    fn algorithm_name(&self) -> &'static str {
        "Hampel"
    }

    fn minimum_sample_size(&self) -> usize {
        // A one-sample window has zero MAD
        2
    }
}

impl<E: ExecutionEngine, V: OutlierVisualizer> OutlierDetector for HampelFilter<E, V> {
    #[instrument(skip(self, signal), fields(n = signal.len(), window_size = self.params.window_size, threshold = self.params.threshold))]
    fn detect(&self, signal: &[f64]) -> Result<OutlierSet> {
        self.params.validate()?;
        if signal.is_empty() {
            debug!("Empty signal, nothing to detect");
            return Ok(OutlierSet::empty());
        }
        ensure_finite(signal, "signal")?;

        let n = signal.len();
        let window_size = self.params.window_size;
        let threshold = self.params.threshold;
        let chunk_size = self.chunk_size(n);
        let n_chunks = n.div_ceil(chunk_size);

        let chunks = self.engine.execute_batch(n_chunks, |c| -> Result<Vec<usize>> {
            let start = c * chunk_size;
            let end = (start + chunk_size).min(n);
            let capacity = window_size.min(n);
            let mut values = Vec::with_capacity(capacity);
            let mut deviations = Vec::with_capacity(capacity);
            let mut flagged = Vec::new();
            for i in start..end {
                let window = &signal[window_bounds(i, n, window_size)];
                let stats = WindowStats::compute(window, &mut values, &mut deviations)?;
                if stats.is_outlier(signal[i], threshold) {
                    flagged.push(i);
                }
            }
            Ok(flagged)
        });

        let mut outliers = Vec::new();
        for chunk in chunks {
            outliers.extend(chunk?);
        }
        debug!("Flagged {} of {} samples", outliers.len(), n);

        Ok(OutlierSet::from_sorted(outliers))
    }
}

impl<E: ExecutionEngine, V: OutlierVisualizer> OutlierCorrector for HampelFilter<E, V> {
    fn correct(&self, signal: &[f64], outliers: &OutlierSet) -> Result<CleanedSignal> {
        correct_with(&self.engine, signal, outliers, self.params.window_size)
    }
}

impl<E: ExecutionEngine, V: OutlierVisualizer> OutlierFilter for HampelFilter<E, V> {
    fn apply(&self, signal: &[f64]) -> Result<FilterResult> {
        if self.visualizer.is_enabled() {
            self.visualizer.record_signal(signal)?;
        }

        let outliers = self.detect(signal)?;
        let cleaned = self.correct(signal, &outliers)?;
        let result = FilterResult::new(
            outliers,
            cleaned,
            self.params,
            self.algorithm_name().to_string(),
        );

        if self.visualizer.is_enabled() {
            self.visualizer.record_result(signal, &result)?;
        }
        Ok(result)
    }
}

fn correct_with<E: ExecutionEngine>(
    engine: &E,
    signal: &[f64],
    outliers: &OutlierSet,
    window_size: usize,
) -> Result<CleanedSignal> {
    validate_window_size(window_size)?;
    let n = signal.len();
    if let Some(max) = outliers.max_index() {
        if max >= n {
            return Err(Error::InvalidInput(format!(
                "Outlier index {max} out of range for signal of length {n}"
            )));
        }
    }

    let flagged = outliers.indices();
    let medians = engine.execute_batch(flagged.len(), |k| {
        let i = flagged[k];
        let mut window = signal[window_bounds(i, n, window_size)].to_vec();
        median_mut(&mut window)
    });

    let mut cleaned = signal.to_vec();
    for (&i, median) in flagged.iter().zip(medians) {
        cleaned[i] = median?;
    }
    Ok(CleanedSignal::new(cleaned))
}

/// Indices of `signal` flagged as outliers by a Hampel filter
///
/// Fails with [`Error::InvalidParameter`] when `window_size == 0` or
/// `threshold` is not positive, before any computation. An empty signal
/// yields an empty set.
///
/// # Examples
///
/// ```rust
/// use hampel_filter::detect;
///
/// let signal = [0.0, 0.5, -0.5, 0.25, -0.25, 100.0, 0.5, -0.5, 0.25, -0.25, 0.0];
/// let outliers = detect(&signal, 5, 3.0).unwrap();
/// assert_eq!(outliers.indices(), &[5]);
/// ```
pub fn detect(signal: &[f64], window_size: usize, threshold: f64) -> Result<OutlierSet> {
    HampelFilter::new(FilterParameters::new(window_size, threshold)?)?.detect(signal)
}

/// Copy of `signal` with each index in `outliers` replaced by the median of
/// its clamped window over the original signal
///
/// Fails with [`Error::InvalidParameter`] when `window_size == 0` and with
/// [`Error::InvalidInput`] when an index is out of range.
pub fn correct(signal: &[f64], outliers: &OutlierSet, window_size: usize) -> Result<CleanedSignal> {
    correct_with(&SequentialEngine::new(), signal, outliers, window_size)
}
