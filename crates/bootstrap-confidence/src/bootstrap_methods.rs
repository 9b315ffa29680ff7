//! Bootstrap method implementations
//!
//! This module provides the methods that turn a bootstrap distribution into
//! a confidence interval.

use crate::ConfidenceInterval;
use bootstrap_core::{Error, Result};
use tracing::debug;

/// Absorbs floating-point drift in `p * B` before rounding to a rank
const RANK_TOLERANCE: f64 = 1e-9;

/// Bootstrap method for calculating confidence intervals
///
/// This trait defines how to construct a confidence interval from
/// bootstrap estimates. Different methods (percentile, basic, etc.)
/// implement this trait.
pub trait BootstrapMethod: Clone + Send + Sync {
    /// Calculate confidence interval from bootstrap distribution
    fn calculate_interval(
        &self,
        bootstrap_estimates: &[f64],
        original_estimate: f64,
        confidence_level: f64,
    ) -> Result<ConfidenceInterval>;

    /// Method name for documentation
    fn name(&self) -> &'static str;
}

/// 0-indexed ranks of the percentile bounds in a sorted distribution of size `n`
///
/// Lower rank is `floor(alpha/2 * n)`, upper rank is `ceil((1 - alpha/2) * n) - 1`,
/// both clamped to `[0, n - 1]`. An empty distribution yields `(0, 0)`.
pub fn percentile_ranks(n: usize, confidence_level: f64) -> (usize, usize) {
    let alpha = 1.0 - confidence_level;
    let b = n as f64;

    let lower = ((alpha / 2.0) * b + RANK_TOLERANCE).floor();
    let upper = ((1.0 - alpha / 2.0) * b - RANK_TOLERANCE).ceil() - 1.0;

    let last = n.saturating_sub(1);
    let lower = (lower.max(0.0) as usize).min(last);
    let upper = (upper.max(0.0) as usize).min(last);
    (lower, upper.max(lower))
}

fn sorted_estimates(bootstrap_estimates: &[f64]) -> Result<Vec<f64>> {
    if bootstrap_estimates.is_empty() {
        return Err(Error::InvalidInput("No bootstrap estimates".to_string()));
    }
    let mut sorted = bootstrap_estimates.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

/// Percentile bootstrap method
///
/// The simplest bootstrap method. Uses the empirical percentiles of the
/// bootstrap distribution to construct the confidence interval. Bounds are
/// always values from the distribution, never interpolated.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentileBootstrap;

impl BootstrapMethod for PercentileBootstrap {
    fn calculate_interval(
        &self,
        bootstrap_estimates: &[f64],
        original_estimate: f64,
        confidence_level: f64,
    ) -> Result<ConfidenceInterval> {
        let sorted = sorted_estimates(bootstrap_estimates)?;
        let (lower_idx, upper_idx) = percentile_ranks(sorted.len(), confidence_level);

        debug!(
            "Percentile ranks: lower={}, upper={} of {}",
            lower_idx,
            upper_idx,
            sorted.len()
        );

        Ok(ConfidenceInterval::new(
            sorted[lower_idx],
            sorted[upper_idx],
            original_estimate,
            confidence_level,
        ))
    }

    fn name(&self) -> &'static str {
        "Percentile Bootstrap"
    }
}

/// Basic bootstrap method
///
/// Uses the reflection principle: if θ̂* is the bootstrap estimate and θ̂ is the
/// original estimate, then the interval is [2θ̂ - q_{1-α/2}, 2θ̂ - q_{α/2}]
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicBootstrap;

impl BootstrapMethod for BasicBootstrap {
    fn calculate_interval(
        &self,
        bootstrap_estimates: &[f64],
        original_estimate: f64,
        confidence_level: f64,
    ) -> Result<ConfidenceInterval> {
        let sorted = sorted_estimates(bootstrap_estimates)?;
        let (lower_idx, upper_idx) = percentile_ranks(sorted.len(), confidence_level);

        // Basic method: 2*theta - quantile
        let lower = 2.0 * original_estimate - sorted[upper_idx];
        let upper = 2.0 * original_estimate - sorted[lower_idx];

        Ok(ConfidenceInterval::new(
            lower,
            upper,
            original_estimate,
            confidence_level,
        ))
    }

    fn name(&self) -> &'static str {
        "Basic Bootstrap"
    }
}
