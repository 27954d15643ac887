//! Deterministic random point generation.
//!
//! Wraps PCG (Permuted Congruential Generator) behind an injectable source
//! so estimation runs are reproducible and tests can substitute seeded
//! sequences.
//!
//! # Reproducibility Guarantee
//!
//! Given the same master seed, all random number sequences are
//! bitwise-identical across runs and platforms.

use rand::prelude::*;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

/// Deterministic, reproducible random number generator.
///
/// Based on PCG, which provides excellent statistical properties, fast
/// generation, and predictable sequences from a seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleRng {
    /// Master seed for reproducibility.
    master_seed: u64,
    /// Internal PCG state.
    rng: Pcg64,
}

impl SampleRng {
    /// Create a new RNG with the given master seed.
    #[must_use]
    pub fn new(master_seed: u64) -> Self {
        Self {
            master_seed,
            rng: Pcg64::seed_from_u64(master_seed),
        }
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

    /// Generate a random f64 in the given range.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn gen_range_f64(&mut self, min: f64, max: f64) -> f64 {
        assert!(min <= max, "Invalid range: min > max");
        min + (max - min) * self.gen_f64()
    }

    /// Draw one uniform point from the bounding square [-1,1]².
    pub fn next_point(&mut self) -> (f64, f64) {
        let x = self.gen_range_f64(-1.0, 1.0);
        let y = self.gen_range_f64(-1.0, 1.0);
        (x, y)
    }
}
