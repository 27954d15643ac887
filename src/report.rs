//! Convergence chart rendering.
//!
//! Renders a sweep as a two-panel PNG: estimate versus sample size on top
//! (with a true-π reference line), absolute deviation below. Both panels
//! use a logarithmic x-axis.
//!
//! The image is drawn into a temporary file in the destination directory
//! and persisted over the final path afterwards, so a rendering failure
//! never leaves a partial artifact behind.

use plotters::prelude::*;
use std::f64::consts::PI;
use std::path::Path;

use crate::error::{PiError, PiResult};
use crate::series::ResultSeries;

const CHART_SIZE: (u32, u32) = (900, 700);

/// Render the convergence chart for `series` to `path`.
///
/// # Errors
///
/// Returns [`PiError::EmptySeries`] for an empty series, an I/O error if
/// the destination is unwritable, and a render error if the drawing
/// backend fails.
pub fn render_convergence(series: &ResultSeries, path: &Path) -> PiResult<()> {
    if series.is_empty() {
        return Err(PiError::EmptySeries);
    }

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let tmp = tempfile::Builder::new()
        .prefix(".montepi-")
        .suffix(".png")
        .tempfile_in(parent)?;

    draw_chart(series, tmp.path())?;
    tmp.persist(path).map_err(|e| PiError::Io(e.error))?;

    Ok(())
}

fn draw_chart(series: &ResultSeries, path: &Path) -> PiResult<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(PiError::render)?;
    let panels = root.split_evenly((2, 1));

    let (x_min, x_max) = sample_bounds(series);
    let est_points: Vec<(f64, f64)> = series
        .iter()
        .map(|r| (r.samples as f64, r.estimate))
        .collect();
    let dev_points: Vec<(f64, f64)> = series
        .iter()
        .map(|r| (r.samples as f64, r.deviation))
        .collect();

    // Top panel: estimate vs n with the true value as reference.
    let (y_lo, y_hi) = estimate_bounds(series);
    let mut chart_est = ChartBuilder::on(&panels[0])
        .caption("Monte Carlo estimate of pi", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d((x_min..x_max).log_scale(), y_lo..y_hi)
        .map_err(PiError::render)?;

    chart_est
        .configure_mesh()
        .x_desc("sample size n")
        .y_desc("estimate of pi")
        .draw()
        .map_err(PiError::render)?;

    chart_est
        .draw_series(LineSeries::new(
            vec![(x_min, PI), (x_max, PI)],
            BLACK.mix(0.4),
        ))
        .map_err(PiError::render)?
        .label("true pi")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], BLACK.mix(0.4)));

    chart_est
        .draw_series(LineSeries::new(est_points, &BLUE))
        .map_err(PiError::render)?
        .label("estimate")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], BLUE));

    chart_est
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(PiError::render)?;

    // Bottom panel: absolute deviation vs n.
    let dev_hi = deviation_ceiling(series);
    let mut chart_dev = ChartBuilder::on(&panels[1])
        .caption("Deviation from true pi", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d((x_min..x_max).log_scale(), 0.0..dev_hi)
        .map_err(PiError::render)?;

    chart_dev
        .configure_mesh()
        .x_desc("sample size n")
        .y_desc("|estimate - pi|")
        .draw()
        .map_err(PiError::render)?;

    chart_dev
        .draw_series(LineSeries::new(dev_points, &GREEN))
        .map_err(PiError::render)?;

    root.present().map_err(PiError::render)?;
    Ok(())
}

/// X-axis bounds, widened for single-record series so the log range stays
/// non-degenerate.
fn sample_bounds(series: &ResultSeries) -> (f64, f64) {
    let min = series.first().map_or(1, |r| r.samples) as f64;
    let max = series.last().map_or(1, |r| r.samples) as f64;
    if max > min {
        (min, max)
    } else {
        (min, min * 10.0)
    }
}

/// Y-axis bounds of the estimate panel, always containing the true value.
fn estimate_bounds(series: &ResultSeries) -> (f64, f64) {
    let mut lo = PI;
    let mut hi = PI;
    for r in series {
        lo = lo.min(r.estimate);
        hi = hi.max(r.estimate);
    }
    (lo - 0.1, hi + 0.1)
}

fn deviation_ceiling(series: &ResultSeries) -> f64 {
    let max_dev = series.iter().map(|r| r.deviation).fold(0.0, f64::max);
    (max_dev * 1.1).max(0.05)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::PiEstimate;
    use crate::series::SampleRecord;

    fn sample_series(sizes: &[u64]) -> ResultSeries {
        let mut series = ResultSeries::with_capacity(sizes.len());
        for &n in sizes {
            series.push(SampleRecord::from(PiEstimate::new(n, (n * 785) / 1_000)));
        }
        series
    }

    #[test]
    fn test_empty_series_rejected() {
        let path = Path::new("unused.png");
        let result = render_convergence(&ResultSeries::default(), path);
        assert!(matches!(result, Err(PiError::EmptySeries)));
    }

    #[test]
    fn test_unwritable_destination_fails_clean() {
        let series = sample_series(&[10, 100, 1_000]);
        let path = Path::new("/nonexistent-montepi-dir/pi.png");

        assert!(matches!(
            render_convergence(&series, path),
            Err(PiError::Io(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_sample_bounds_widen_single_record() {
        let series = sample_series(&[100]);
        let (lo, hi) = sample_bounds(&series);
        assert!((lo - 100.0).abs() < f64::EPSILON);
        assert!((hi - 1_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_estimate_bounds_contain_pi() {
        let series = sample_series(&[10, 100]);
        let (lo, hi) = estimate_bounds(&series);
        assert!(lo < PI && PI < hi);
    }
}
