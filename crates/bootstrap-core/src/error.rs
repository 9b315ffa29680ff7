//! Error types for bootstrap estimation
//!
//! Provides a unified error type for all workspace crates.

use thiserror::Error;

/// Core error type for bootstrap operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// Errors raised by caller-supplied statistics
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::InvalidInput(format!("{operation} requires a non-empty sample"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a confidence level outside (0, 1)
    pub fn invalid_confidence_level(level: f64) -> Self {
        Self::InvalidParameter(format!("Confidence level {level} must be in (0, 1)"))
    }

    /// Create an error for a zero resample count
    pub fn zero_resamples() -> Self {
        Self::InvalidParameter("Number of resamples must be positive".to_string())
    }

    /// Whether this error signals a caller mistake rather than a failed computation
    ///
    /// Empty samples, bad resample counts and out-of-range confidence levels
    /// all fall into this category. These are never worth retrying.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::InvalidParameter(_) | Self::InsufficientData { .. }
        )
    }
}
