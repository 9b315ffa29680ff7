//! Core traits for bootstrap estimation
//!
//! A statistic is anything that reduces a sample to a single scalar. The
//! estimator is generic over it, so the mean, the median or a caller's own
//! closure can be bootstrapped the same way.

use crate::Result;

/// A pure reduction of a sample to a scalar
///
/// Implementations must not carry side effects: the bootstrap evaluates the
/// statistic on thousands of resamples, possibly from several threads.
///
/// Any `Fn(&[f64]) -> Result<f64> + Send + Sync` is a statistic, which
/// covers plain functions such as [`mean`](crate::mean):
///
/// ```rust
/// use bootstrap_core::{mean, Statistic};
///
/// let data = [1.0, 2.0, 3.0];
/// assert_eq!(mean.compute(&data).unwrap(), 2.0);
///
/// let max = |s: &[f64]| -> bootstrap_core::Result<f64> {
///     Ok(s.iter().cloned().fold(f64::MIN, f64::max))
/// };
/// assert_eq!(max.compute(&data).unwrap(), 3.0);
/// ```
pub trait Statistic: Send + Sync {
    /// Evaluate the statistic on a sample
    fn compute(&self, sample: &[f64]) -> Result<f64>;

    /// Human-readable name of the statistic
    fn name(&self) -> &str {
        "statistic"
    }
}

impl<F> Statistic for F
where
    F: Fn(&[f64]) -> Result<f64> + Send + Sync,
{
    fn compute(&self, sample: &[f64]) -> Result<f64> {
        self(sample)
    }
}

/// A statistic with an explicit name, for logging and reports
#[derive(Clone, Debug)]
pub struct Named<S> {
    name: &'static str,
    statistic: S,
}

impl<S: Statistic> Named<S> {
    pub fn new(name: &'static str, statistic: S) -> Self {
        Self { name, statistic }
    }
}

impl<S: Statistic> Statistic for Named<S> {
    fn compute(&self, sample: &[f64]) -> Result<f64> {
        self.statistic.compute(sample)
    }

    fn name(&self) -> &str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mean, Error};

    #[test]
    fn test_function_is_statistic() {
        let data = vec![1.0, 2.0, 3.0, 4.0];
        assert_eq!(mean.compute(&data).unwrap(), 2.5);
        assert_eq!(mean.name(), "statistic");
    }

    #[test]
    fn test_closure_is_statistic() {
        let sum = |s: &[f64]| -> Result<f64> { Ok(s.iter().sum()) };
        assert_eq!(sum.compute(&[1.0, 2.0, 3.0]).unwrap(), 6.0);
    }

    #[test]
    fn test_errors_propagate() {
        let failing = |_: &[f64]| -> Result<f64> { Err(Error::Computation("boom".to_string())) };
        assert!(failing.compute(&[1.0]).is_err());
    }

    #[test]
    fn test_named_statistic() {
        let named = Named::new("Mean", mean);
        assert_eq!(named.name(), "Mean");
        assert_eq!(named.compute(&[2.0, 4.0]).unwrap(), 3.0);
    }
}
