//! Bootstrap statistics for Likert-scale survey ratings
//!
//! This crate re-exports the workspace crates under one roof and adds
//! helpers for tallied Likert responses:
//!
//! - [`bootstrap_core`]: error type, the [`Statistic`] trait, point statistics, execution engines
//! - [`bootstrap_confidence`]: resampling, percentile intervals and the [`Bootstrap`] estimator
//! - [`likert`]: expanding response tallies and summarizing them
//!
//! # Example
//!
//! ```rust
//! use likert_stats::{likert::{summarize, LikertCounts}, Bootstrap, PercentileBootstrap};
//! use likert_stats::bootstrap_core::execution::sequential;
//!
//! // Responses for options 1..=5
//! let counts = LikertCounts::from([6, 55, 64, 158, 217]);
//!
//! let bootstrap = Bootstrap::new(sequential(), PercentileBootstrap)
//!     .with_resamples(2000)
//!     .with_seed(42);
//!
//! let summary = summarize(&counts, &bootstrap).unwrap();
//! assert!(summary.interval.lower <= summary.mean);
//! assert!(summary.mean <= summary.interval.upper);
//! ```

pub mod likert;

pub use bootstrap_confidence;
pub use bootstrap_core;

pub use bootstrap_confidence::{
    api::{bootstrapci, bootstrapci_with, mean, sample},
    BasicBootstrap, Bootstrap, BootstrapMethod, BootstrapResult, ConfidenceInterval,
    ConfidenceLevel, PercentileBootstrap, DEFAULT_RESAMPLES,
};
pub use bootstrap_core::{Error, Result, Statistic};
pub use likert::{summarize, LikertCounts, LikertSummary};
