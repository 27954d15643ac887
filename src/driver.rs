//! Sweep orchestration.
//!
//! Single linear pass: validate the configuration, build the
//! logarithmically spaced sample sizes, run the estimator once per size in
//! ascending order, and accumulate the results.

use crate::config::RunConfig;
use crate::error::PiResult;
use crate::estimator::PiEstimator;
use crate::rng::SampleRng;
use crate::sampling;
use crate::series::{ResultSeries, SampleRecord};

/// Run one convergence sweep.
///
/// All estimation runs consume draws from a single seeded source, so a
/// given configuration reproduces the same series exactly.
///
/// # Errors
///
/// Returns an error if the configuration fails validation. Estimation
/// itself cannot fail once the sweep sizes are validated.
pub fn run(config: &RunConfig) -> PiResult<ResultSeries> {
    config.validate_all()?;

    let sizes = sampling::log_spaced(config.min_samples, config.max_samples, config.points)?;
    let mut rng = SampleRng::new(config.seed);

    let mut series = ResultSeries::with_capacity(sizes.len());
    for n in sizes {
        let estimate = PiEstimator::with_samples(n).run(&mut rng)?;
        series.push(SampleRecord::from(estimate));
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PiError;

    #[test]
    fn test_sweep_shape() -> PiResult<()> {
        let config = RunConfig::builder()
            .min_samples(10)
            .max_samples(100_000)
            .points(5)
            .build();

        let series = run(&config)?;
        assert_eq!(series.len(), 5);

        let sizes: Vec<u64> = series.iter().map(|r| r.samples).collect();
        assert_eq!(sizes, vec![10, 100, 1_000, 10_000, 100_000]);
        Ok(())
    }

    #[test]
    fn test_sweep_reproducible() -> PiResult<()> {
        let config = RunConfig::builder().points(4).seed(7).build();

        let a = run(&config)?;
        let b = run(&config)?;
        assert_eq!(a.records(), b.records());
        Ok(())
    }

    #[test]
    fn test_invalid_config_aborts_before_estimation() {
        let config = RunConfig::builder().min_samples(500).max_samples(10).build();
        assert!(matches!(run(&config), Err(PiError::InvalidRange { .. })));
    }
}
