//! Likert-scale rating distributions
//!
//! Survey exports usually report how many respondents picked each option
//! rather than the raw responses. [`LikertCounts`] holds those tallies for a
//! five-point scale and expands them back into observations the bootstrap
//! can resample.

use bootstrap_confidence::{Bootstrap, BootstrapMethod, ConfidenceInterval};
use bootstrap_core::{execution::ExecutionEngine, mean, Error, Result};
use std::fmt;
use tracing::debug;

/// Number of options on the scale
pub const LIKERT_POINTS: usize = 5;

/// Response tallies for options 1 through 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LikertCounts {
    counts: [usize; LIKERT_POINTS],
}

impl LikertCounts {
    /// Build from tallies ordered by option, `counts[0]` being option 1
    pub fn from_counts(counts: [usize; LIKERT_POINTS]) -> Self {
        Self { counts }
    }

    /// Tally for a single option (1..=5)
    pub fn count(&self, option: usize) -> Option<usize> {
        option
            .checked_sub(1)
            .and_then(|idx| self.counts.get(idx))
            .copied()
    }

    /// Total number of responses
    ///
    /// # Errors
    /// Fails with an invalid-input error when the tallies overflow `usize`.
    pub fn total(&self) -> Result<usize> {
        self.counts
            .iter()
            .try_fold(0usize, |acc, &n| acc.checked_add(n))
            .ok_or_else(|| Error::InvalidInput("Likert tallies overflow".to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&n| n == 0)
    }

    /// Expand the tallies into raw observations
    ///
    /// Observations are grouped by option from 5 down to 1. Order does not
    /// affect any statistic, but keeps expansions comparable across datasets.
    ///
    /// # Errors
    /// Fails with an invalid-input error when the expansion cannot be
    /// allocated.
    pub fn expand(&self) -> Result<Vec<f64>> {
        let total = self.total()?;
        let mut data = Vec::new();
        data.try_reserve_exact(total).map_err(|e| {
            Error::InvalidInput(format!("Cannot expand {total} Likert responses: {e}"))
        })?;
        for (idx, &n) in self.counts.iter().enumerate().rev() {
            data.extend(std::iter::repeat((idx + 1) as f64).take(n));
        }
        Ok(data)
    }

    /// Mean rating, computed from the tallies without expanding them
    pub fn mean(&self) -> Result<f64> {
        let total = self.total()?;
        if total == 0 {
            return Err(Error::empty_input("Likert mean"));
        }
        let weighted = self
            .counts
            .iter()
            .enumerate()
            .try_fold(0usize, |acc, (idx, &n)| {
                n.checked_mul(idx + 1).and_then(|w| acc.checked_add(w))
            })
            .ok_or_else(|| Error::InvalidInput("Likert weighted sum overflows".to_string()))?;
        Ok(weighted as f64 / total as f64)
    }
}

impl From<[usize; LIKERT_POINTS]> for LikertCounts {
    fn from(counts: [usize; LIKERT_POINTS]) -> Self {
        Self::from_counts(counts)
    }
}

/// Mean rating with its bootstrap confidence interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LikertSummary {
    pub mean: f64,
    pub interval: ConfidenceInterval,
    pub n_responses: usize,
}

impl fmt::Display for LikertSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean {:.4} (n = {}), {}",
            self.mean, self.n_responses, self.interval
        )
    }
}

/// Summarize a rating distribution with the given bootstrap estimator
///
/// # Errors
/// Fails with an invalid-input error when no responses were recorded, and
/// with whatever the estimator reports for a bad configuration.
pub fn summarize<E, M>(counts: &LikertCounts, bootstrap: &Bootstrap<E, M>) -> Result<LikertSummary>
where
    E: ExecutionEngine,
    M: BootstrapMethod,
{
    if counts.is_empty() {
        return Err(Error::empty_input("Likert summary"));
    }

    let data = counts.expand()?;
    debug!("Summarizing {} Likert responses", data.len());

    let result = bootstrap.confidence_interval(&data, mean)?;
    Ok(LikertSummary {
        mean: result.estimate(),
        interval: result.interval,
        n_responses: data.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bootstrap_confidence::PercentileBootstrap;
    use bootstrap_core::execution::sequential;

    #[test]
    fn test_expand() {
        let counts = LikertCounts::from_counts([1, 0, 2, 0, 3]);
        assert_eq!(counts.expand().unwrap(), vec![5.0, 5.0, 5.0, 3.0, 3.0, 1.0]);
        assert_eq!(counts.total().unwrap(), 6);
    }

    #[test]
    fn test_count_lookup() {
        let counts = LikertCounts::from([6, 55, 64, 158, 217]);
        assert_eq!(counts.count(1), Some(6));
        assert_eq!(counts.count(5), Some(217));
        assert_eq!(counts.count(0), None);
        assert_eq!(counts.count(6), None);
    }

    #[test]
    fn test_mean_matches_expansion() {
        let counts = LikertCounts::from([205, 93, 51, 70, 13]);
        let from_counts = counts.mean().unwrap();
        let from_data = mean(&counts.expand().unwrap()).unwrap();
        assert_relative_eq!(from_counts, from_data, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_counts() {
        let counts = LikertCounts::default();
        assert!(counts.is_empty());
        assert!(counts.expand().unwrap().is_empty());
        assert!(counts.mean().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_overflowing_tallies() {
        let counts = LikertCounts::from([usize::MAX, 1, 0, 0, 0]);
        assert!(!counts.is_empty());
        assert!(counts.total().unwrap_err().is_invalid_input());
        assert!(counts.expand().unwrap_err().is_invalid_input());
        assert!(counts.mean().unwrap_err().is_invalid_input());

        // Total fits, the weighted sum does not
        let counts = LikertCounts::from([0, 0, 0, 0, usize::MAX / 2]);
        assert_eq!(counts.total().unwrap(), usize::MAX / 2);
        assert!(counts.mean().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_summarize_rejects_overflow() {
        let bootstrap = Bootstrap::new(sequential(), PercentileBootstrap);
        let counts = LikertCounts::from([usize::MAX, 1, 0, 0, 0]);
        assert!(summarize(&counts, &bootstrap).unwrap_err().is_invalid_input());
    }
}
