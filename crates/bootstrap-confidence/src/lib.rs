//! Bootstrap confidence interval estimation
//!
//! This crate estimates confidence intervals for a statistic of a population
//! when all that is available is one observed sample. It resamples the sample
//! with replacement, evaluates the statistic on every resample and reads the
//! interval off the resulting empirical distribution.
//!
//! - **Percentile intervals**: raw percentiles of the bootstrap distribution
//! - **Basic intervals**: percentile bounds reflected around the point estimate
//!
//! No distributional assumption is made, which suits ordinal data such as
//! Likert ratings.
//!
//! # Examples
//!
//! ## One-call interval
//!
//! ```rust
//! use bootstrap_confidence::api::{bootstrapci_with, mean};
//!
//! let mut ratings = vec![5.0; 217];
//! ratings.extend(vec![4.0; 158]);
//! ratings.extend(vec![3.0; 64]);
//! ratings.extend(vec![2.0; 55]);
//! ratings.extend(vec![1.0; 6]);
//!
//! let (lower, upper) = bootstrapci_with(&ratings, mean, 2000, 0.05, Some(7)).unwrap();
//! assert!(lower < upper);
//! assert!(upper - lower < 0.2);
//! ```
//!
//! ## Configured estimator
//!
//! ```rust
//! use bootstrap_confidence::{Bootstrap, PercentileBootstrap};
//! use bootstrap_core::{execution::auto_engine, median};
//!
//! let sample = vec![1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0];
//! let result = Bootstrap::new(auto_engine(), PercentileBootstrap)
//!     .with_resamples(1000)
//!     .with_confidence_level(0.90)
//!     .with_seed(42)
//!     .confidence_interval(&sample, median)
//!     .unwrap();
//!
//! println!("{}", result.interval);
//! ```

pub mod api;
mod bootstrap;
mod bootstrap_methods;
pub mod sampler;
mod types;

// Re-exports
pub use api::{bootstrapci, bootstrapci_with, sample, FAST_RESAMPLES};
pub use bootstrap::{Bootstrap, BootstrapResult, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_RESAMPLES};
pub use bootstrap_methods::{percentile_ranks, BasicBootstrap, BootstrapMethod, PercentileBootstrap};
pub use types::{ConfidenceInterval, ConfidenceLevel};
