//! Core traits and types for bootstrap estimation
//!
//! This crate provides the pieces every estimator in the workspace builds on:
//!
//! - [`Error`] and [`Result`], the shared error type
//! - [`Statistic`], the seam through which callers supply the quantity to estimate
//! - Point statistics ([`mean`], [`median`], [`variance`])
//! - [`execution`] engines that run independent iterations sequentially or in parallel
//!
//! # Example
//!
//! ```rust
//! use bootstrap_core::{execution::{sequential, ExecutionEngine}, mean, Statistic};
//!
//! let engine = sequential();
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! let means = engine.execute_batch(3, |i| mean.compute(&data[i..]).unwrap());
//! assert_eq!(means, vec![3.0, 3.5, 4.0]);
//! ```

pub mod error;
pub mod execution;
pub mod statistics;
pub mod traits;

// Re-export core types
pub use error::{Error, Result};

pub use execution::{auto_engine, sequential, ExecutionEngine, ExecutionStrategy, SequentialEngine};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};

pub use statistics::{mean, median, variance};
pub use traits::{Named, Statistic};
