//! Utility functions for working with data slices
//!
//! The robust primitives here are the building blocks of the Hampel rule:
//! a median for the local center and a scaled MAD for the local spread.

use crate::{Error, Result};
use std::cmp::Ordering;

/// Consistency constant that makes the MAD a consistent estimator of the
/// standard deviation for normally distributed data.
pub const MAD_CONSISTENCY_CONSTANT: f64 = 1.4826;

/// Total order used for sorting samples: NaN goes after every number.
fn nan_last(a: &f64, b: &f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// Median of a buffer, reordering it in place
///
/// For an even number of samples the two middle values are averaged
/// without overflowing near `f64::MAX`.
/// Fails with [`Error::InsufficientData`] on an empty buffer.
pub fn median_mut(buf: &mut [f64]) -> Result<f64> {
    if buf.is_empty() {
        return Err(Error::empty_input("median"));
    }
    buf.sort_unstable_by(nan_last);
    let n = buf.len();
    if n % 2 == 0 {
        Ok(buf[n / 2 - 1] / 2.0 + buf[n / 2] / 2.0)
    } else {
        Ok(buf[n / 2])
    }
}

/// Median of a slice
///
/// # Examples
///
/// ```rust
/// use hampel_core::utils::median;
///
/// assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
/// assert!(median(&[]).is_err());
/// ```
pub fn median(data: &[f64]) -> Result<f64> {
    let mut buf = data.to_vec();
    median_mut(&mut buf)
}

/// Unscaled median absolute deviation of `data` around `center`
///
/// `scratch` is overwritten with the absolute deviations; pass a buffer that
/// is reused across calls to avoid an allocation per window.
pub fn mad_around(data: &[f64], center: f64, scratch: &mut Vec<f64>) -> Result<f64> {
    scratch.clear();
    scratch.extend(data.iter().map(|&x| (x - center).abs()));
    median_mut(scratch)
}

/// Median absolute deviation scaled by [`MAD_CONSISTENCY_CONSTANT`]
///
/// # Examples
///
/// ```rust
/// use hampel_core::utils::scaled_mad;
///
/// // Deviations from the median 3.0 are [2, 1, 0, 1, 2], whose median is 1
/// let s = scaled_mad(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!((s - 1.4826).abs() < 1e-12);
/// ```
pub fn scaled_mad(data: &[f64]) -> Result<f64> {
    let center = median(data)?;
    let mut scratch = Vec::with_capacity(data.len());
    Ok(MAD_CONSISTENCY_CONSTANT * mad_around(data, center, &mut scratch)?)
}

/// Check that every value is finite
pub fn ensure_finite(data: &[f64], context: &str) -> Result<()> {
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}
