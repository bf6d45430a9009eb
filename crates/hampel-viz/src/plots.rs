//! SVG charts for signals, outliers and deviation histograms

use hampel_core::{Error, Result};
use hampel_filter::{DeviationHistogram, FilterResult};
use plotters::prelude::*;
use std::path::Path;

/// Chart size in pixels
pub const DEFAULT_SIZE: (u32, u32) = (1000, 600);

fn draw_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Other(anyhow::anyhow!("drawing failed: {e}"))
}

/// `(min, max)` of the values, widened when they coincide
fn value_range<'a>(values: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return (-1.0, 1.0);
    }
    if lo == hi {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}

/// Plot a raw signal
pub fn plot_signal(path: &Path, signal: &[f64], size: (u32, u32)) -> Result<()> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let (y_min, y_max) = value_range(signal.iter());
    let mut chart = ChartBuilder::on(&root)
        .caption("Recorded signal", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..signal.len().max(1), y_min..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc("Samples")
        .y_desc("Amplitude")
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(LineSeries::new(
            signal.iter().enumerate().map(|(i, &v)| (i, v)),
            &BLUE,
        ))
        .map_err(draw_err)?
        .label("Original ECG")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

/// Plot the original and cleaned signal with the outliers marked
pub fn plot_signal_with_outliers(
    path: &Path,
    signal: &[f64],
    result: &FilterResult,
    size: (u32, u32),
) -> Result<()> {
    let cleaned = result.cleaned().as_slice();
    if cleaned.len() != signal.len() {
        return Err(Error::size_mismatch(signal.len(), cleaned.len(), "outlier plot"));
    }

    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let (y_min, y_max) = value_range(signal.iter().chain(cleaned));
    let mut chart = ChartBuilder::on(&root)
        .caption("Hampel filter", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..signal.len().max(1), y_min..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc("Samples")
        .y_desc("Amplitude")
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(LineSeries::new(
            signal.iter().enumerate().map(|(i, &v)| (i, v)),
            &BLUE.mix(0.5),
        ))
        .map_err(draw_err)?
        .label("Original ECG")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE.mix(0.5)));

    chart
        .draw_series(LineSeries::new(
            cleaned.iter().enumerate().map(|(i, &v)| (i, v)),
            GREEN.stroke_width(2),
        ))
        .map_err(draw_err)?
        .label("Filtered ECG")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.stroke_width(2)));

    chart
        .draw_series(
            result
                .outliers()
                .iter()
                .map(|i| Cross::new((i, signal[i]), 5, RED.stroke_width(2))),
        )
        .map_err(draw_err)?
        .label(format!("Outliers ({})", result.count()))
        .legend(|(x, y)| Cross::new((x + 10, y), 5, RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

/// Plot the histogram of outlier deviations
pub fn plot_deviation_histogram(
    path: &Path,
    histogram: &DeviationHistogram,
    size: (u32, u32),
) -> Result<()> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let bins = histogram.bins();
    let (x_min, x_max) = match (bins.first(), bins.last()) {
        (Some(first), Some(last)) => (first.lower, last.upper),
        _ => (-1.0, 1.0),
    };

    let mut chart = ChartBuilder::on(&root)
        .caption("Outlier Distribution (Hampel Filter)", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0..histogram.max_count() + 1)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc("Deviation")
        .y_desc("Frequency")
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(bins.iter().map(|b| {
            Rectangle::new([(b.lower, 0), (b.upper, b.count)], RED.mix(0.7).filled())
        }))
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_range() {
        assert_eq!(value_range(std::iter::empty()), (-1.0, 1.0));
        assert_eq!(value_range([2.0, 2.0].iter()), (1.0, 3.0));
        let (lo, hi) = value_range([0.0, 10.0].iter());
        assert!(lo < 0.0 && hi > 10.0);
    }
}
