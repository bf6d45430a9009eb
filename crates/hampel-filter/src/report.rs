//! Outlier report: per-outlier details and the histogram of deviations

use crate::types::FilterResult;
use hampel_core::{Error, Result};
use std::fmt;

/// Default number of histogram bins
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// One flagged sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierEntry {
    /// Sample index
    pub index: usize,
    /// Value in the input signal
    pub original: f64,
    /// Window median that replaced it
    pub replacement: f64,
}

impl OutlierEntry {
    /// Signed distance of the original value from its replacement
    pub fn deviation(&self) -> f64 {
        self.original - self.replacement
    }
}

/// Per-outlier details of a filter run
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierReport {
    entries: Vec<OutlierEntry>,
    sample_size: usize,
}

impl OutlierReport {
    /// Build a report for `result`, computed over `signal`
    pub fn new(signal: &[f64], result: &FilterResult) -> Result<Self> {
        if signal.len() != result.sample_size() {
            return Err(Error::size_mismatch(
                result.sample_size(),
                signal.len(),
                "outlier report",
            ));
        }
        let cleaned = result.cleaned();
        let entries = result
            .outliers()
            .iter()
            .map(|index| OutlierEntry {
                index,
                original: signal[index],
                replacement: cleaned[index],
            })
            .collect();
        Ok(Self {
            entries,
            sample_size: signal.len(),
        })
    }

    /// Flagged samples in index order
    pub fn entries(&self) -> &[OutlierEntry] {
        &self.entries
    }

    /// Signed deviations in index order
    pub fn deviations(&self) -> Vec<f64> {
        self.entries.iter().map(OutlierEntry::deviation).collect()
    }

    /// Number of samples in the analyzed signal
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Largest absolute deviation, if any outlier was flagged
    pub fn max_abs_deviation(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(|e| e.deviation().abs())
            .max_by(|a, b| a.total_cmp(b))
    }

    /// Histogram of the signed deviations
    pub fn histogram(&self, bins: usize) -> Result<DeviationHistogram> {
        DeviationHistogram::new(&self.deviations(), bins)
    }
}

impl fmt::Display for OutlierReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>8}  {:>14}  {:>14}  {:>14}", "index", "original", "replacement", "deviation")?;
        for e in &self.entries {
            writeln!(
                f,
                "{:>8}  {:>14.6}  {:>14.6}  {:>14.6}",
                e.index,
                e.original,
                e.replacement,
                e.deviation()
            )?;
        }
        Ok(())
    }
}

/// One histogram bin covering `[lower, upper)`; the last bin includes `upper`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram of outlier deviations
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeviationHistogram {
    bins: Vec<HistogramBin>,
}

impl DeviationHistogram {
    /// Bin `values` into `bins` equal-width bins over their range
    ///
    /// When every value is equal the range is widened to `value ± 0.5`.
    /// No values give a histogram without bins.
    pub fn new(values: &[f64], bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(Error::InvalidParameter(
                "Histogram needs at least one bin".to_string(),
            ));
        }
        if values.is_empty() {
            return Ok(Self::default());
        }
        hampel_core::utils::ensure_finite(values, "deviations")?;

        let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }
        let width = (hi - lo) / bins as f64;

        let mut counts = vec![0usize; bins];
        for &v in values {
            let k = (((v - lo) / width).floor() as usize).min(bins - 1);
            counts[k] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(k, count)| HistogramBin {
                lower: lo + k as f64 * width,
                upper: if k + 1 == bins { hi } else { lo + (k + 1) as f64 * width },
                count,
            })
            .collect();
        Ok(Self { bins })
    }

    /// Bins in ascending order
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Total number of binned values
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Largest bin count
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Check if the histogram has no bins
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::FilterParameters;
    use crate::traits::OutlierFilter;
    use crate::HampelFilter;
    use approx::assert_relative_eq;

    #[test]
    fn test_report_entries() {
        let signal = [0.0, 0.5, -0.5, 0.25, -0.25, 100.0, 0.5, -0.5, 0.25, -0.25, 0.0];
        let filter = HampelFilter::new(FilterParameters::new(5, 3.0).unwrap()).unwrap();
        let result = filter.apply(&signal).unwrap();
        let report = OutlierReport::new(&signal, &result).unwrap();

        assert_eq!(report.sample_size(), 11);
        assert_eq!(report.entries().len(), 1);
        let entry = report.entries()[0];
        assert_eq!(entry.index, 5);
        assert_eq!(entry.original, 100.0);
        assert_eq!(entry.replacement, 0.25);
        assert_relative_eq!(entry.deviation(), 99.75);
        assert_eq!(report.max_abs_deviation(), Some(99.75));
        assert!(report.to_string().contains("99.750000"));
    }

    #[test]
    fn test_report_rejects_other_signal() {
        let filter = HampelFilter::new(FilterParameters::default()).unwrap();
        let result = filter.apply(&[1.0, 2.0, 3.0]).unwrap();
        assert!(OutlierReport::new(&[1.0, 2.0], &result).is_err());
    }

    #[test]
    fn test_histogram_counts() {
        let hist = DeviationHistogram::new(&[0.0, 1.0, 2.0, 3.0, 4.0], 4).unwrap();
        let counts: Vec<usize> = hist.bins().iter().map(|b| b.count).collect();
        // The maximum lands in the last, closed bin
        assert_eq!(counts, vec![1, 1, 1, 2]);
        assert_eq!(hist.total(), 5);
        assert_eq!(hist.max_count(), 2);
        assert_eq!(hist.bins()[0].lower, 0.0);
        assert_eq!(hist.bins()[3].upper, 4.0);
    }

    #[test]
    fn test_histogram_constant_values() {
        let hist = DeviationHistogram::new(&[2.0, 2.0, 2.0], 2).unwrap();
        assert_eq!(hist.bins()[0].lower, 1.5);
        assert_eq!(hist.bins()[1].upper, 2.5);
        assert_eq!(hist.total(), 3);
    }

    #[test]
    fn test_histogram_edge_cases() {
        assert!(DeviationHistogram::new(&[], 20).unwrap().is_empty());
        assert!(matches!(
            DeviationHistogram::new(&[1.0], 0),
            Err(Error::InvalidParameter(_))
        ));
    }
}
