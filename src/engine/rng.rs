//! Deterministic random number generation.
//!
//! The original photon-counting experiment used an unseeded process-wide
//! generator. Here the random source is caller-owned and explicitly injected
//! into the trial counter, so tests can pin a seed and production runs can
//! draw one from OS entropy while still reporting it.
//!
//! # Reproducibility Guarantee
//!
//! Given the same seed, all random number sequences are bitwise-identical
//! across runs and platforms.

use rand::prelude::*;
use rand_pcg::Pcg64;

/// Deterministic, reproducible random number generator.
///
/// Based on PCG (Permuted Congruential Generator) which provides:
/// - Excellent statistical properties
/// - Fast generation
/// - Predictable sequences from seed
#[derive(Debug, Clone)]
pub struct SimRng {
    /// Seed for reproducibility.
    seed: u64,
    /// Internal PCG state.
    rng: Pcg64,
}

impl SimRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The drawn seed is retained and can be read back via [`Self::seed`],
    /// so a run can always be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Get the seed this generator was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random f64 in [0, 1).
    pub fn gen_f64(&mut self) -> f64 {
        self.rng.gen()
    }

    /// Perform one Bernoulli trial: a uniform draw in [0, 1) compared
    /// against the success probability.
    pub fn bernoulli(&mut self, p: f64) -> bool {
        self.gen_f64() < p
    }

    /// Generate n random f64 samples in [0, 1).
    #[must_use]
    pub fn sample_n(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.gen_f64()).collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Falsification test: reproducibility holds for any seed.
        #[test]
        fn prop_reproducibility(seed in 0u64..u64::MAX) {
            let mut rng1 = SimRng::new(seed);
            let mut rng2 = SimRng::new(seed);

            let seq1: Vec<f64> = (0..100).map(|_| rng1.gen_f64()).collect();
            let seq2: Vec<f64> = (0..100).map(|_| rng2.gen_f64()).collect();

            prop_assert_eq!(seq1, seq2);
        }

        /// Falsification test: values in [0, 1) for any seed.
        #[test]
        fn prop_unit_interval(seed in 0u64..u64::MAX) {
            let mut rng = SimRng::new(seed);

            for _ in 0..100 {
                let v = rng.gen_f64();
                prop_assert!(v >= 0.0 && v < 1.0, "Value {} not in [0, 1)", v);
            }
        }
    }
}
