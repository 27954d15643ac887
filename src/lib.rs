//! # montepi
//!
//! Monte Carlo estimation of π with seeded reproducibility.
//!
//! Draws uniform random points in the bounding square [-1,1]², counts the
//! fraction landing inside the inscribed unit circle, and scales by 4. A
//! driver sweeps a logarithmically spaced range of sample sizes and a
//! reporter renders the convergence behavior (estimate and absolute
//! deviation versus sample size) to a two-panel PNG chart.
//!
//! ## Example
//!
//! ```rust
//! use montepi::prelude::*;
//!
//! let mut rng = SampleRng::new(42);
//! let estimate = PiEstimator::with_samples(10_000).run(&mut rng)?;
//! assert!(estimate.deviation() < 0.2);
//! # Ok::<(), montepi::PiError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_const_for_fn, // Many functions can't be const in stable Rust
)]

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod estimator;
pub mod report;
pub mod rng;
pub mod sampling;
pub mod series;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{RunConfig, RunConfigBuilder};
    pub use crate::error::{PiError, PiResult};
    pub use crate::estimator::{PiEstimate, PiEstimator};
    pub use crate::rng::SampleRng;
    pub use crate::series::{ResultSeries, SampleRecord};
}

/// Re-export for public API
pub use error::{PiError, PiResult};
