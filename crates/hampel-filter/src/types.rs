//! Artifacts produced by the Hampel filter

use crate::params::FilterParameters;
use std::fmt;
use std::ops::Index;

/// Sorted, duplicate-free set of sample indices flagged as outliers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutlierSet {
    indices: Vec<usize>,
}

impl OutlierSet {
    /// Create an empty set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a set from indices in any order; duplicates are dropped
    pub fn from_indices(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    /// Wrap indices that are already strictly ascending
    pub(crate) fn from_sorted(indices: Vec<usize>) -> Self {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        Self { indices }
    }

    /// Flagged indices in ascending order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Iterate over flagged indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Check whether `index` is flagged
    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// Number of flagged indices
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Check if nothing was flagged
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Largest flagged index, if any
    pub fn max_index(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    /// Consume the set, returning the sorted indices
    pub fn into_vec(self) -> Vec<usize> {
        self.indices
    }
}

impl fmt::Display for OutlierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, index) in self.indices.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{index}")?;
        }
        write!(f, "]")
    }
}

impl<'a> IntoIterator for &'a OutlierSet {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.iter().copied()
    }
}

/// Signal with every outlier replaced by its local window median
///
/// Same length and indexing as the input signal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanedSignal {
    values: Vec<f64>,
}

impl CleanedSignal {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Cleaned samples
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the signal has no samples
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume into the underlying samples
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl Index<usize> for CleanedSignal {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

impl AsRef<[f64]> for CleanedSignal {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

/// Result of one filter invocation
#[derive(Debug, Clone)]
pub struct FilterResult {
    outliers: OutlierSet,
    cleaned: CleanedSignal,
    parameters: FilterParameters,
    algorithm: String,
}

impl FilterResult {
    /// Create a new filter result
    pub fn new(
        outliers: OutlierSet,
        cleaned: CleanedSignal,
        parameters: FilterParameters,
        algorithm: String,
    ) -> Self {
        Self {
            outliers,
            cleaned,
            parameters,
            algorithm,
        }
    }

    /// Flagged indices
    pub fn outliers(&self) -> &OutlierSet {
        &self.outliers
    }

    /// Corrected signal
    pub fn cleaned(&self) -> &CleanedSignal {
        &self.cleaned
    }

    /// Parameters the filter ran with
    pub fn parameters(&self) -> &FilterParameters {
        &self.parameters
    }

    /// Get the algorithm name used for detection
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Number of samples analyzed
    pub fn sample_size(&self) -> usize {
        self.cleaned.len()
    }

    /// Number of outliers found
    pub fn count(&self) -> usize {
        self.outliers.len()
    }

    /// Check if any outliers were detected
    pub fn has_outliers(&self) -> bool {
        !self.outliers.is_empty()
    }

    /// Share of samples flagged, in percent (0 for an empty signal)
    pub fn outlier_percentage(&self) -> f64 {
        if self.sample_size() == 0 {
            return 0.0;
        }
        self.count() as f64 / self.sample_size() as f64 * 100.0
    }

    /// Split into the outlier set and the cleaned signal
    pub fn into_parts(self) -> (OutlierSet, CleanedSignal) {
        (self.outliers, self.cleaned)
    }
}

impl fmt::Display for FilterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Found {} outliers ({:.1}%)",
            self.count(),
            self.outlier_percentage()
        )?;
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "Window size: {}", self.parameters.window_size)?;
        write!(f, "Threshold: {}", self.parameters.threshold)?;
        if let Some(max_delta) = self.parameters.max_delta {
            write!(f, "\nMax delta: {max_delta} (not applied)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outlier_set_sorts_and_dedups() {
        let set = OutlierSet::from_indices(vec![7, 2, 7, 5, 2]);
        assert_eq!(set.indices(), &[2, 5, 7]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(5));
        assert!(!set.contains(4));
        assert_eq!(set.max_index(), Some(7));
        assert_eq!(set.to_string(), "[2, 5, 7]");
        assert_eq!((&set).into_iter().collect::<Vec<_>>(), vec![2, 5, 7]);
    }

    #[test]
    fn test_empty_outlier_set() {
        let set = OutlierSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.max_index(), None);
        assert_eq!(set.to_string(), "[]");
    }

    #[test]
    fn test_result_summary() {
        let result = FilterResult::new(
            OutlierSet::from_indices(vec![3]),
            CleanedSignal::new(vec![0.0; 8]),
            FilterParameters::default(),
            "Hampel".to_string(),
        );
        assert_eq!(result.count(), 1);
        assert!(result.has_outliers());
        assert_eq!(result.sample_size(), 8);
        assert_eq!(result.outlier_percentage(), 12.5);

        let text = result.to_string();
        assert!(text.starts_with("Found 1 outliers (12.5%)"));
        assert!(text.contains("Window size: 21"));
        assert!(text.contains("Threshold: 3"));
        assert!(!text.contains("Max delta"));
    }

    #[test]
    fn test_result_percentage_empty_signal() {
        let result = FilterResult::new(
            OutlierSet::empty(),
            CleanedSignal::default(),
            FilterParameters::default(),
            "Hampel".to_string(),
        );
        assert_eq!(result.outlier_percentage(), 0.0);
    }
}
