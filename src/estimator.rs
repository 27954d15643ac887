//! Monte Carlo π estimator.
//!
//! Draws n uniform points in the bounding square [-1,1]² and estimates π
//! as 4 times the fraction landing inside the inscribed unit circle.
//!
//! # Convergence
//!
//! By the Central Limit Theorem the estimate converges at O(n^{-1/2});
//! accuracy is statistical, with no guaranteed precision bound for any
//! single run.

use crate::error::{PiError, PiResult};
use crate::rng::SampleRng;
use serde::{Deserialize, Serialize};

/// Whether a point of the bounding square lies inside the unit circle.
///
/// Boundary convention: points with squared distance exactly 1 count as
/// inside (inclusive comparison). This has no asymptotic effect on the
/// estimate but fixes small-n expectations.
#[must_use]
pub fn is_inside(x: f64, y: f64) -> bool {
    x * x + y * y <= 1.0
}

/// Result of one estimation run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PiEstimate {
    /// Number of points drawn.
    pub samples: u64,
    /// Points that landed inside the unit circle.
    pub inside: u64,
    /// Point estimate of π: 4 · inside / samples.
    pub estimate: f64,
}

impl PiEstimate {
    /// Create an estimate from raw counts.
    #[must_use]
    pub fn new(samples: u64, inside: u64) -> Self {
        Self {
            samples,
            inside,
            estimate: 4.0 * inside as f64 / samples as f64,
        }
    }

    /// Absolute deviation from the true value of π.
    #[must_use]
    pub fn deviation(&self) -> f64 {
        (self.estimate - std::f64::consts::PI).abs()
    }

    /// Binomial standard error of the estimate: 4·√(p̂(1−p̂)/n).
    #[must_use]
    pub fn std_error(&self) -> f64 {
        let n = self.samples as f64;
        let p = self.inside as f64 / n;
        4.0 * (p * (1.0 - p) / n).sqrt()
    }
}

/// Monte Carlo engine for one π estimation run.
#[derive(Debug, Clone, Copy)]
pub struct PiEstimator {
    /// Number of points to draw.
    n_samples: u64,
}

impl PiEstimator {
    /// Create an estimator that draws `n_samples` points.
    #[must_use]
    pub const fn with_samples(n_samples: u64) -> Self {
        Self { n_samples }
    }

    /// Run the estimation, consuming `2·n` draws from the source.
    ///
    /// The returned estimate always lies in [0, 4].
    ///
    /// # Errors
    ///
    /// Returns [`PiError::ZeroSamples`] if the estimator was constructed
    /// with zero samples.
    pub fn run(&self, rng: &mut SampleRng) -> PiResult<PiEstimate> {
        if self.n_samples == 0 {
            return Err(PiError::ZeroSamples);
        }

        let mut inside = 0u64;
        for _ in 0..self.n_samples {
            let (x, y) = rng.next_point();
            if is_inside(x, y) {
                inside += 1;
            }
        }

        Ok(PiEstimate::new(self.n_samples, inside))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Falsification: the estimate must lie in [0, 4] since the
        /// containment ratio lies in [0, 1].
        #[test]
        fn prop_estimate_in_range(seed in 0u64..10_000, n in 1u64..2_000) {
            let mut rng = SampleRng::new(seed);
            let est = PiEstimator::with_samples(n).run(&mut rng);

            prop_assert!(est.is_ok());
            if let Ok(est) = est {
                prop_assert!((0.0..=4.0).contains(&est.estimate));
                prop_assert_eq!(est.samples, n);
                prop_assert!(est.inside <= n);
            }
        }

        /// Falsification: deviation is exactly |estimate - π|.
        #[test]
        fn prop_deviation_definition(inside in 0u64..=1_000) {
            let est = PiEstimate::new(1_000, inside);
            let expected = (est.estimate - std::f64::consts::PI).abs();
            prop_assert!((est.deviation() - expected).abs() < f64::EPSILON);
        }
    }
}
