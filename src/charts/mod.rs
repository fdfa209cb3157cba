//! PNG chart rendering.
//!
//! Every chart follows the same shape: load the CSV (a missing file
//! surfaces as [`ReportError::MissingInput`] before anything is written),
//! draw onto a `BitMapBackend`, then `present()` once at the end.

pub mod accuracy;
pub mod high_dim;
pub mod schedule;
pub mod scaling;
pub mod validation;

use std::error::Error;
use std::path::Path;

use plotters::coord::CoordTranslate;
use plotters::prelude::*;

use crate::error::{ReportError, Result};

/// Result type of the inner drawing routines; plotters errors are boxed
/// and converted to [`ReportError::Render`] at the module boundary.
pub(crate) type DrawResult = std::result::Result<(), Box<dyn Error>>;

pub(crate) const FONT: &str = "sans-serif";
pub(crate) const CAPTION_SIZE: u32 = 24;
pub(crate) const DESC_SIZE: u32 = 18;

pub(crate) fn finish(output: &Path, drawn: DrawResult) -> Result<()> {
    drawn.map_err(|e| ReportError::render(output, e))?;
    log::debug!("wrote {}", output.display());
    Ok(())
}

/// Boxed legend in the given corner.
pub(crate) fn draw_legend<'a, DB, CT>(
    chart: &mut ChartContext<'a, DB, CT>,
    position: SeriesLabelPosition,
) -> DrawResult
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: 'static,
    CT: CoordTranslate,
{
    chart
        .configure_series_labels()
        .position(position)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT, 16))
        .draw()?;
    Ok(())
}

/// Legend swatch for line series: a short horizontal stroke.
pub(crate) fn line_swatch(style: ShapeStyle) -> impl Fn((i32, i32)) -> PathElement<(i32, i32)> {
    move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style)
}

// ---------------------------------------------------------------------------
// Axis ranges
// ---------------------------------------------------------------------------

/// Padded linear range covering `values`; never empty.
pub(crate) fn linear_range(values: impl IntoIterator<Item = f64>, pad: f64) -> (f64, f64) {
    let (lo, hi) = finite_bounds(values.into_iter().filter(|v| v.is_finite()));
    match (lo, hi) {
        (Some(lo), Some(hi)) if hi > lo => {
            let span = hi - lo;
            (lo - span * pad, hi + span * pad)
        }
        (Some(v), Some(_)) => (v - 0.5, v + 0.5),
        _ => (0.0, 1.0),
    }
}

/// Range for a log axis covering the positive entries of `values`.
///
/// Non-positive values are ignored. The range is widened by `factor` on
/// both ends (and by at least 2x when all values coincide).
pub(crate) fn log_range(values: impl IntoIterator<Item = f64>, factor: f64) -> (f64, f64) {
    let (lo, hi) = finite_bounds(values.into_iter().filter(|v| v.is_finite() && *v > 0.0));
    match (lo, hi) {
        (Some(lo), Some(hi)) if hi > lo => (lo / factor, hi * factor),
        (Some(v), Some(_)) => {
            let f = factor.max(2.0);
            (v / f, v * f)
        }
        _ => (1e-3, 1.0),
    }
}

fn finite_bounds(values: impl Iterator<Item = f64>) -> (Option<f64>, Option<f64>) {
    values.fold((None, None), |(lo, hi): (Option<f64>, Option<f64>), v| {
        (
            Some(lo.map_or(v, |l| l.min(v))),
            Some(hi.map_or(v, |h| h.max(v))),
        )
    })
}

/// `count` points evenly spaced in log10 between `lo` and `hi`, inclusive.
pub(crate) fn logspace(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let (a, b) = (lo.log10(), hi.log10());
            let step = (b - a) / (count - 1) as f64;
            (0..count)
                .map(|i| 10f64.powf(a + step * i as f64))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn linear_range_pads_and_handles_single_value() {
        let (lo, hi) = linear_range([2.0, 10.0], 0.05);
        assert_relative_eq!(lo, 1.6);
        assert_relative_eq!(hi, 10.4);

        assert_eq!(linear_range([3.0], 0.05), (2.5, 3.5));
        assert_eq!(linear_range(std::iter::empty(), 0.05), (0.0, 1.0));
    }

    #[test]
    fn log_range_skips_non_positive() {
        let (lo, hi) = log_range([0.0, -1.0, 0.01, 1.0], 2.0);
        assert_relative_eq!(lo, 0.005);
        assert_relative_eq!(hi, 2.0);

        let (lo, hi) = log_range([1e-3], 1.2);
        assert_relative_eq!(lo, 5e-4);
        assert_relative_eq!(hi, 2e-3);
    }

    #[test]
    fn logspace_hits_both_ends() {
        let pts = logspace(1e3, 1e5, 3);
        assert_eq!(pts.len(), 3);
        assert_relative_eq!(pts[0], 1e3, max_relative = 1e-12);
        assert_relative_eq!(pts[1], 1e4, max_relative = 1e-12);
        assert_relative_eq!(pts[2], 1e5, max_relative = 1e-12);
        assert_eq!(logspace(5.0, 5.0, 1), vec![5.0]);
    }
}
