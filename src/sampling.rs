//! Logarithmically spaced sample-size sweeps.
//!
//! Extracted from the driver as a pure helper so the spacing logic is
//! independently testable.

use crate::error::{PiError, PiResult};

/// Build a logarithmically spaced, strictly increasing sequence of sample
/// sizes between `min_n` and `max_n` inclusive.
///
/// Interpolates geometrically between the bounds and rounds to integers.
/// Rounding collisions are bumped to the previous value plus one; candidates
/// pushed past `max_n` are dropped, so degenerate ranges can yield fewer
/// than `points` entries. With `points == 1` the sequence is `[min_n]`.
///
/// # Errors
///
/// Returns an error if `min_n` is zero, `min_n > max_n`, or `points` is
/// zero.
pub fn log_spaced(min_n: u64, max_n: u64, points: usize) -> PiResult<Vec<u64>> {
    if min_n == 0 {
        return Err(PiError::ZeroSamples);
    }
    if min_n > max_n {
        return Err(PiError::InvalidRange {
            min: min_n,
            max: max_n,
        });
    }
    if points == 0 {
        return Err(PiError::config("sweep must contain at least one point"));
    }
    if points == 1 {
        return Ok(vec![min_n]);
    }

    let ln_min = (min_n as f64).ln();
    let ln_max = (max_n as f64).ln();
    let step = (ln_max - ln_min) / (points - 1) as f64;

    let mut sizes: Vec<u64> = Vec::with_capacity(points);
    for i in 0..points {
        let raw = (ln_min + step * i as f64).exp().round() as u64;
        let candidate = raw.clamp(min_n, max_n);
        let next = sizes.last().map_or(candidate, |&prev| candidate.max(prev + 1));
        if next > max_n {
            break;
        }
        sizes.push(next);
    }

    Ok(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_sweep() -> PiResult<()> {
        let sizes = log_spaced(10, 100_000, 5)?;
        assert_eq!(sizes, vec![10, 100, 1_000, 10_000, 100_000]);
        Ok(())
    }

    #[test]
    fn test_endpoints_inclusive() -> PiResult<()> {
        let sizes = log_spaced(10, 100_000, 7)?;
        assert_eq!(sizes.first(), Some(&10));
        assert_eq!(sizes.last(), Some(&100_000));
        Ok(())
    }

    #[test]
    fn test_single_point() -> PiResult<()> {
        assert_eq!(log_spaced(10, 100_000, 1)?, vec![10]);
        Ok(())
    }

    #[test]
    fn test_degenerate_range_truncates() -> PiResult<()> {
        // Only 3 distinct integers exist in [2, 4].
        let sizes = log_spaced(2, 4, 10)?;
        assert!(sizes.len() <= 3);
        assert_eq!(sizes.first(), Some(&2));
        Ok(())
    }

    #[test]
    fn test_zero_min_rejected() {
        assert!(matches!(log_spaced(0, 100, 5), Err(PiError::ZeroSamples)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert!(matches!(
            log_spaced(100, 10, 5),
            Err(PiError::InvalidRange { min: 100, max: 10 })
        ));
    }

    #[test]
    fn test_zero_points_rejected() {
        assert!(matches!(log_spaced(10, 100, 0), Err(PiError::Config { .. })));
    }
}
