//! Resampling with replacement
//!
//! The random source is always passed in. The estimator derives one
//! generator per iteration from a base seed, so a seeded run produces the
//! same bootstrap distribution whichever engine executes it.

use bootstrap_core::{Error, Result};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draw `n` indices uniformly from `[0, n)`
///
/// Returns an empty vector for `n == 0`.
pub fn resample_indices<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let dist = Uniform::new(0, n);
    (0..n).map(|_| dist.sample(rng)).collect()
}

/// Draw one resample of the same length as `sample`, with replacement
///
/// # Errors
/// Returns [`Error::InvalidInput`] for an empty sample, which has no
/// element to draw from.
pub fn resample<R: Rng + ?Sized>(sample: &[f64], rng: &mut R) -> Result<Vec<f64>> {
    if sample.is_empty() {
        return Err(Error::empty_input("resample"));
    }
    Ok(resample_indices(sample.len(), rng)
        .into_iter()
        .map(|i| sample[i])
        .collect())
}

/// Generator for bootstrap iteration `iteration` under `base_seed`
pub fn iteration_rng(base_seed: u64, iteration: usize) -> StdRng {
    StdRng::seed_from_u64(base_seed.wrapping_add(iteration as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_resample_length_and_membership() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let r = resample(&data, &mut rng).unwrap();
            assert_eq!(r.len(), data.len());
            assert!(r.iter().all(|x| data.contains(x)));
        }
    }

    #[test]
    fn test_resample_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = resample(&[], &mut rng).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(resample_indices(0, &mut rng).is_empty());
    }

    #[test]
    fn test_resample_single_element() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(resample(&[4.0], &mut rng).unwrap(), vec![4.0]);
    }

    #[test]
    fn test_indices_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let idx = resample_indices(17, &mut rng);
        assert_eq!(idx.len(), 17);
        assert!(idx.iter().all(|&i| i < 17));
    }

    #[test]
    fn test_dyn_rng() {
        let mut rng = StdRng::seed_from_u64(5);
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        let r = resample(&[1.0, 2.0], dyn_rng).unwrap();
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn test_iteration_rng_reproducible() {
        let data: Vec<f64> = (0..50).map(f64::from).collect();

        let a = resample(&data, &mut iteration_rng(42, 3)).unwrap();
        let b = resample(&data, &mut iteration_rng(42, 3)).unwrap();
        let c = resample(&data, &mut iteration_rng(42, 4)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_different_resamples() {
        // Hypothetically two draws could coincide, but more than one is likely a bug
        let data: Vec<f64> = (0..1000).map(f64::from).collect();
        let mut rng = StdRng::seed_from_u64(11);

        let mut duplicated = 0;
        for _ in 0..100 {
            let a = resample(&data, &mut rng).unwrap();
            let b = resample(&data, &mut rng).unwrap();
            if a == b {
                duplicated += 1;
            }
        }
        assert!(duplicated <= 1, "Found {} duplicate resamples", duplicated);
    }

    #[test]
    fn test_resample_draws_with_replacement() {
        let data: Vec<f64> = (0..100).map(f64::from).collect();
        let mut rng = StdRng::seed_from_u64(99);
        let r = resample(&data, &mut rng).unwrap();

        // With replacement, 100 draws from 100 values almost surely repeat
        let distinct: HashSet<u64> = r.iter().map(|x| x.to_bits()).collect();
        assert!(distinct.len() < data.len());
    }
}
