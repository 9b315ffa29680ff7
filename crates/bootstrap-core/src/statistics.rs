//! Point statistics
//!
//! Plain functions that reduce a sample to a scalar. Each one is a
//! [`Statistic`](crate::Statistic) through the blanket closure impl.

use crate::{Error, Result};

/// Arithmetic mean of a sample
///
/// Uses a running update (`m += (x - m) / k`) instead of `sum / n`, so large
/// samples of large values cannot overflow and a constant sample returns
/// exactly that constant.
///
/// # Errors
/// Returns [`Error::InvalidInput`] for an empty sample.
pub fn mean(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::empty_input("mean"));
    }

    let mut m = 0.0;
    for (k, &x) in sample.iter().enumerate() {
        m += (x - m) / (k + 1) as f64;
    }
    Ok(m)
}

/// Median of a sample
///
/// Averages the two middle order statistics for even lengths.
pub fn median(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::empty_input("median"));
    }

    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Unbiased sample variance (n - 1 denominator), Welford's algorithm
pub fn variance(sample: &[f64]) -> Result<f64> {
    if sample.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: sample.len(),
        });
    }

    let mut m = 0.0;
    let mut m2 = 0.0;
    for (k, &x) in sample.iter().enumerate() {
        let delta = x - m;
        m += delta / (k + 1) as f64;
        m2 += delta * (x - m);
    }
    Ok(m2 / (sample.len() - 1) as f64)
}
