//! Deterministic random number generation.
//!
//! Implements PCG (Permuted Congruential Generator) seeded from a single
//! master seed.
//!
//! # Reproducibility Guarantee
//!
//! Given the same master seed, all random number sequences — and therefore
//! all constructed tours — are bitwise-identical across runs and platforms.

use rand::prelude::*;
use rand_pcg::Pcg64;

/// Deterministic, reproducible random number generator.
///
/// Based on PCG (Permuted Congruential Generator) which provides:
/// - Excellent statistical properties
/// - Fast generation
/// - Predictable sequences from seed
#[derive(Debug, Clone)]
pub struct ColonyRng {
    /// Master seed for reproducibility.
    master_seed: u64,
    /// Internal PCG state.
    rng: Pcg64,
}

impl ColonyRng {
    /// Create a new RNG with the given master seed.
    #[must_use]
    pub fn new(master_seed: u64) -> Self {
        let rng = Pcg64::seed_from_u64(master_seed);
        Self { master_seed, rng }
    }

    /// Get the master seed.
    #[must_use]
    pub const fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Generate a random f64 in [0, 1).
    pub fn gen_f64(&mut self) -> f64 {
        self.rng.gen()
    }

    /// Generate a random u64.
    pub fn gen_u64(&mut self) -> u64 {
        self.rng.gen()
    }

    /// Generate a uniform random index in [0, max).
    ///
    /// Returns 0 when `max == 0`.
    pub fn gen_index(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        (self.gen_u64() as usize) % max
    }

    /// Sample an index with probability proportional to `weights[i]`.
    ///
    /// Uses a linear cumulative-sum walk: one uniform draw is scaled by the
    /// total weight and the first index whose running sum exceeds it wins.
    /// Cost is linear in the candidate count and no intermediate
    /// normalization is required.
    ///
    /// Returns 0 when `weights` is empty; if the total weight is zero the
    /// last index is returned (the running sum never reaches the threshold),
    /// so callers wanting a uniform fallback must supply uniform weights.
    pub fn choose_weighted(&mut self, weights: &[f64]) -> usize {
        if weights.is_empty() {
            return 0;
        }
        let total: f64 = weights.iter().sum();
        let threshold = self.gen_f64() * total;

        let mut cumulative = 0.0;
        for (i, w) in weights.iter().enumerate() {
            cumulative += w;
            if threshold < cumulative {
                return i;
            }
        }
        weights.len() - 1
    }
}


#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Falsification test: reproducibility holds for any seed.
        #[test]
        fn prop_reproducibility(seed in 0u64..u64::MAX) {
            let mut rng1 = ColonyRng::new(seed);
            let mut rng2 = ColonyRng::new(seed);

            let seq1: Vec<f64> = (0..100).map(|_| rng1.gen_f64()).collect();
            let seq2: Vec<f64> = (0..100).map(|_| rng2.gen_f64()).collect();

            prop_assert_eq!(seq1, seq2);
        }

        /// Falsification test: values in [0, 1) for any seed.
        #[test]
        fn prop_unit_interval(seed in 0u64..u64::MAX) {
            let mut rng = ColonyRng::new(seed);

            for _ in 0..100 {
                let v = rng.gen_f64();
                prop_assert!(v >= 0.0 && v < 1.0, "Value {} not in [0, 1)", v);
            }
        }

        /// Falsification test: weighted choice always returns a valid index.
        #[test]
        fn prop_choose_weighted_in_range(
            seed in 0u64..u64::MAX,
            weights in prop::collection::vec(0.0f64..100.0, 1..20),
        ) {
            let mut rng = ColonyRng::new(seed);
            let idx = rng.choose_weighted(&weights);
            prop_assert!(idx < weights.len());
        }

        /// Falsification test: zero-weight candidates are never chosen when
        /// positive mass exists elsewhere.
        #[test]
        fn prop_choose_weighted_skips_zero(seed in 0u64..u64::MAX) {
            let mut rng = ColonyRng::new(seed);
            let idx = rng.choose_weighted(&[0.0, 0.5, 0.0, 0.5, 0.0]);
            prop_assert!(idx == 1 || idx == 3, "chose zero-weight index {}", idx);
        }
    }
}
