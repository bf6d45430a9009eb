//! Visualizer that renders every filter run to SVG files

use crate::plots::{plot_deviation_histogram, plot_signal, plot_signal_with_outliers, DEFAULT_SIZE};
use hampel_core::Result;
use hampel_filter::{FilterResult, OutlierReport, OutlierVisualizer, DEFAULT_HISTOGRAM_BINS};
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes `<prefix>_signal.svg`, `<prefix>_outliers.svg` and
/// `<prefix>_deviations.svg`
#[derive(Debug, Clone)]
pub struct SvgOutlierVisualizer {
    output_prefix: PathBuf,
    size: (u32, u32),
    histogram_bins: usize,
}

impl SvgOutlierVisualizer {
    /// Create a visualizer writing files that start with `output_prefix`
    pub fn new(output_prefix: impl Into<PathBuf>) -> Self {
        Self {
            output_prefix: output_prefix.into(),
            size: DEFAULT_SIZE,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }

    /// Sets the chart size in pixels
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Sets the number of deviation histogram bins
    pub fn histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins;
        self
    }

    /// Path of the chart called `kind`
    pub fn chart_path(&self, kind: &str) -> PathBuf {
        let mut name = self
            .output_prefix
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!("_{kind}.svg"));
        match self.output_prefix.parent() {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }

    /// Paths of every chart this visualizer writes
    pub fn chart_paths(&self) -> Vec<PathBuf> {
        ["signal", "outliers", "deviations"]
            .iter()
            .map(|kind| self.chart_path(kind))
            .collect()
    }

    fn log_written(path: &Path) {
        info!("Wrote {}", path.display());
    }
}

impl OutlierVisualizer for SvgOutlierVisualizer {
    fn record_signal(&self, signal: &[f64]) -> Result<()> {
        let path = self.chart_path("signal");
        plot_signal(&path, signal, self.size)?;
        Self::log_written(&path);
        Ok(())
    }

    fn record_result(&self, signal: &[f64], result: &FilterResult) -> Result<()> {
        let path = self.chart_path("outliers");
        plot_signal_with_outliers(&path, signal, result, self.size)?;
        Self::log_written(&path);

        let histogram = OutlierReport::new(signal, result)?.histogram(self.histogram_bins)?;
        let path = self.chart_path("deviations");
        plot_deviation_histogram(&path, &histogram, self.size)?;
        Self::log_written(&path);
        Ok(())
    }
}
