//! High-level API for bootstrap confidence intervals
//!
//! This module provides clean, easy-to-use functions for the common case:
//! one sample, one statistic, a percentile interval.

use crate::{
    bootstrap::{Bootstrap, DEFAULT_RESAMPLES},
    bootstrap_methods::PercentileBootstrap,
    sampler, ConfidenceLevel,
};
use bootstrap_core::{execution::sequential, Result, Statistic};
use rand::Rng;

pub use bootstrap_core::mean;

/// Fast number of resamples for quick estimates
pub const FAST_RESAMPLES: usize = 2_000;

/// Default significance level (two-tailed)
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Draw one resample of `data` with replacement
///
/// # Example
/// ```rust
/// use bootstrap_confidence::api::sample;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let data = vec![1.0, 2.0, 3.0];
/// let mut rng = StdRng::seed_from_u64(42);
/// let resampled = sample(&data, &mut rng).unwrap();
/// assert_eq!(resampled.len(), 3);
/// assert!(resampled.iter().all(|x| data.contains(x)));
/// ```
pub fn sample<R: Rng + ?Sized>(data: &[f64], rng: &mut R) -> Result<Vec<f64>> {
    sampler::resample(data, rng)
}

/// 95% percentile bootstrap interval of `statistic` for `data`
///
/// Uses [`DEFAULT_RESAMPLES`] resamples on the sequential engine with a
/// fresh random seed. Returns `(lower, upper)`.
///
/// # Example
/// ```rust
/// use bootstrap_confidence::api::{bootstrapci, mean};
///
/// let data = vec![3.0; 20];
/// assert_eq!(bootstrapci(&data, mean).unwrap(), (3.0, 3.0));
/// ```
pub fn bootstrapci<S: Statistic>(data: &[f64], statistic: S) -> Result<(f64, f64)> {
    bootstrapci_with(data, statistic, DEFAULT_RESAMPLES, DEFAULT_ALPHA, None)
}

/// Percentile bootstrap interval with explicit resample count, alpha and seed
///
/// The interval has confidence level `1 - alpha`. Passing a seed makes the
/// result reproducible.
///
/// # Errors
/// Fails with an invalid-input error for an empty sample, zero resamples or
/// an alpha outside (0, 1).
pub fn bootstrapci_with<S: Statistic>(
    data: &[f64],
    statistic: S,
    n_resamples: usize,
    alpha: f64,
    seed: Option<u64>,
) -> Result<(f64, f64)> {
    let level = ConfidenceLevel::from_alpha(alpha)?;

    let mut bootstrap = Bootstrap::new(sequential(), PercentileBootstrap)
        .with_resamples(n_resamples)
        .with_confidence_level(level.value());
    if let Some(seed) = seed {
        bootstrap = bootstrap.with_seed(seed);
    }

    bootstrap
        .confidence_interval(data, statistic)
        .map(|result| result.bounds())
}
