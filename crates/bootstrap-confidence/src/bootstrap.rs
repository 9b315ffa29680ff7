//! Bootstrap confidence interval estimation
//!
//! [`Bootstrap`] estimates a confidence interval for any [`Statistic`] given
//! a single observed sample:
//!
//! 1. The statistic is evaluated on the original sample (the point estimate)
//! 2. `n_resamples` resamples are drawn with replacement, each from its own
//!    generator derived from a base seed
//! 3. The statistic is evaluated on every resample through the execution engine
//! 4. A [`BootstrapMethod`] turns the resulting distribution into an interval
//!
//! Iterations only share the read-only sample, so the engine is free to run
//! them in parallel. Results come back in iteration order, which keeps seeded
//! runs identical across engines.

use crate::{sampler, BootstrapMethod, ConfidenceInterval, ConfidenceLevel};
use bootstrap_core::{execution::ExecutionEngine, Error, Result, Statistic};
use rand::{thread_rng, Rng};
use tracing::{debug, instrument};

/// Default number of bootstrap resamples
pub const DEFAULT_RESAMPLES: usize = 10_000;

/// Default confidence level
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Result of bootstrap confidence interval estimation
#[derive(Debug, Clone)]
pub struct BootstrapResult {
    /// The confidence interval
    pub interval: ConfidenceInterval,
    /// Number of bootstrap resamples performed
    pub n_resamples: usize,
    /// Base seed the resamples were derived from
    pub seed: u64,
    /// Time taken for bootstrap
    pub bootstrap_time_ms: u64,
}

impl BootstrapResult {
    /// The interval bounds as `(lower, upper)`
    pub fn bounds(&self) -> (f64, f64) {
        self.interval.bounds()
    }

    /// The point estimate on the original sample
    pub fn estimate(&self) -> f64 {
        self.interval.estimate
    }
}

/// Bootstrap confidence interval estimator
///
/// Configured through builder methods. Parameters are validated when an
/// estimate is requested, so a misconfigured estimator fails with an error
/// rather than a panic.
///
/// # Example
/// ```rust
/// use bootstrap_confidence::{Bootstrap, PercentileBootstrap};
/// use bootstrap_core::{execution::sequential, mean};
///
/// let sample = vec![1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0];
///
/// let bootstrap = Bootstrap::new(sequential(), PercentileBootstrap)
///     .with_resamples(2000)
///     .with_confidence_level(0.95)
///     .with_seed(42);
///
/// let result = bootstrap.confidence_interval(&sample, mean).unwrap();
/// let (lower, upper) = result.bounds();
/// assert!(lower <= upper);
/// ```
#[derive(Clone, Debug)]
pub struct Bootstrap<E, M> {
    engine: E,
    method: M,
    n_resamples: usize,
    confidence_level: f64,
    seed: Option<u64>,
}

impl<E, M> Bootstrap<E, M>
where
    E: ExecutionEngine,
    M: BootstrapMethod,
{
    /// Create a new bootstrap estimator
    pub fn new(engine: E, method: M) -> Self {
        Self {
            engine,
            method,
            n_resamples: DEFAULT_RESAMPLES,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            seed: None,
        }
    }

    /// Set the number of bootstrap resamples
    pub fn with_resamples(mut self, n_resamples: usize) -> Self {
        self.n_resamples = n_resamples;
        self
    }

    /// Set the confidence level
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn n_resamples(&self) -> usize {
        self.n_resamples
    }

    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn method(&self) -> &M {
        &self.method
    }

    /// Check the configuration and the sample before any work is done
    fn validate(&self, sample: &[f64]) -> Result<()> {
        if sample.is_empty() {
            return Err(Error::empty_input("bootstrap"));
        }
        if sample.iter().any(|x| !x.is_finite()) {
            return Err(Error::InvalidInput(
                "Sample contains NaN or infinite values".to_string(),
            ));
        }
        if self.n_resamples == 0 {
            return Err(Error::zero_resamples());
        }
        ConfidenceLevel::new(self.confidence_level)?;
        Ok(())
    }

    /// Compute the confidence interval of `statistic` for `sample`
    ///
    /// Uses the configured seed, or a fresh one from `thread_rng` which is
    /// reported in the result.
    pub fn confidence_interval<S>(&self, sample: &[f64], statistic: S) -> Result<BootstrapResult>
    where
        S: Statistic,
    {
        self.validate(sample)?;
        let seed = match self.seed {
            Some(seed) => seed,
            None => thread_rng().gen(),
        };
        self.run(sample, &statistic, seed)
    }

    /// Compute the confidence interval drawing the base seed from `rng`
    ///
    /// Any configured seed is ignored. The generator is only advanced once
    /// the sample and configuration have been accepted.
    pub fn confidence_interval_with_rng<S, R>(
        &self,
        sample: &[f64],
        statistic: S,
        rng: &mut R,
    ) -> Result<BootstrapResult>
    where
        S: Statistic,
        R: Rng + ?Sized,
    {
        self.validate(sample)?;
        let seed = rng.gen();
        self.run(sample, &statistic, seed)
    }

    #[instrument(
        skip(self, sample, statistic),
        fields(n = sample.len(), n_resamples = self.n_resamples, method = self.method.name())
    )]
    fn run<S>(&self, sample: &[f64], statistic: &S, seed: u64) -> Result<BootstrapResult>
    where
        S: Statistic,
    {
        let start_time = std::time::Instant::now();

        let original_estimate = statistic.compute(sample)?;
        debug!(
            "Original {} estimate: {}, base seed: {}",
            statistic.name(),
            original_estimate,
            seed
        );

        debug!("Running bootstrap with {} resamples", self.n_resamples);
        let bootstrap_estimates = self
            .engine
            .execute_batch(self.n_resamples, |i| {
                let mut rng = sampler::iteration_rng(seed, i);
                let resampled = sampler::resample(sample, &mut rng)?;
                statistic.compute(&resampled)
            })
            .into_iter()
            .collect::<Result<Vec<f64>>>()?;

        if bootstrap_estimates.iter().any(|x| !x.is_finite()) {
            return Err(Error::non_finite("Bootstrap distribution"));
        }

        debug!("Bootstrap completed, calculating confidence interval");

        let interval = self.method.calculate_interval(
            &bootstrap_estimates,
            original_estimate,
            self.confidence_level,
        )?;

        Ok(BootstrapResult {
            interval,
            n_resamples: self.n_resamples,
            seed,
            bootstrap_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }
}
