//! SVG plots for Hampel filter runs
//!
//! [`SvgOutlierVisualizer`] plugs into a filter through the
//! [`OutlierVisualizer`](hampel_filter::OutlierVisualizer) hooks; the chart
//! functions in [`plots`] can also be called directly.

pub mod plots;
pub mod visualizer;

pub use plots::{plot_deviation_histogram, plot_signal, plot_signal_with_outliers, DEFAULT_SIZE};
pub use visualizer::SvgOutlierVisualizer;
