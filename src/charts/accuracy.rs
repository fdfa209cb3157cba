use std::path::Path;

use plotters::prelude::*;

use super::{
    draw_legend, finish, line_swatch, log_range, logspace, DrawResult, CAPTION_SIZE, DESC_SIZE,
    FONT,
};
use crate::color;
use crate::data::loader::load_records;
use crate::data::model::AccuracyRecord;
use crate::error::Result;

/// The reference curve starts one decade below the first measurement.
pub const REFERENCE_SCALE: f64 = 0.1;
const REFERENCE_POINTS: usize = 100;

/// Log-log plot of relative error against sample count, with a
/// `1/sqrt(N)` reference curve.
pub fn render(input: &Path, output: &Path, size: (u32, u32)) -> Result<()> {
    let rows: Vec<AccuracyRecord> = load_records(input)?;
    finish(output, draw(&rows, output, size))
}

/// Points of the theoretical `1/sqrt(N)` curve, log-spaced over the
/// sampled N range and anchored at the first row `(N0, E0)`:
/// `err(N) = REFERENCE_SCALE / sqrt(N / N0) * E0`.
///
/// With a single distinct N the curve collapses to the anchor itself.
pub fn reference_curve(rows: &[AccuracyRecord]) -> Vec<(f64, f64)> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    if first.n == 0 {
        return Vec::new();
    }
    let n0 = first.n as f64;
    let e0 = first.relative_error;

    let sampled = rows.iter().filter(|r| r.n > 0).map(|r| r.n as f64);
    let lo = sampled.clone().fold(f64::INFINITY, f64::min);
    let hi = sampled.fold(f64::NEG_INFINITY, f64::max);
    let count = if hi > lo { REFERENCE_POINTS } else { 1 };

    logspace(lo, hi, count)
        .into_iter()
        .map(|n| (n, REFERENCE_SCALE / (n / n0).sqrt() * e0))
        .collect()
}

fn draw(rows: &[AccuracyRecord], output: &Path, size: (u32, u32)) -> DrawResult {
    let measured: Vec<(f64, f64)> = rows
        .iter()
        .map(|r| (r.n as f64, r.relative_error))
        .filter(|&(n, e)| n > 0.0 && e > 0.0)
        .collect();
    let reference = reference_curve(rows);

    let (x_lo, x_hi) = log_range(measured.iter().map(|p| p.0), 1.3);
    let (y_lo, y_hi) = log_range(measured.iter().chain(reference.iter()).map(|p| p.1), 1.5);

    let root = BitMapBackend::new(output, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Monte Carlo Accuracy vs Sample Size (n=10, p=4, R=1)",
            (FONT, CAPTION_SIZE),
        )
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d((x_lo..x_hi).log_scale(), (y_lo..y_hi).log_scale())?;

    chart
        .configure_mesh()
        .light_line_style(BLACK.mix(0.05))
        .x_desc("Number of Samples (N)")
        .y_desc("Relative Error")
        .axis_desc_style((FONT, DESC_SIZE))
        .x_label_formatter(&|v| format!("{v:.0e}"))
        .y_label_formatter(&|v| format!("{v:.0e}"))
        .draw()?;

    let data_style = color::DATA.stroke_width(2);
    chart
        .draw_series(LineSeries::new(measured, data_style).point_size(4))?
        .label("Monte Carlo")
        .legend(line_swatch(data_style));

    chart
        .draw_series(DashedLineSeries::new(
            reference,
            10,
            6,
            color::REFERENCE.mix(0.7).stroke_width(2),
        ))?
        .label("Theoretical ∝ 1/√N")
        .legend(line_swatch(color::REFERENCE.stroke_width(2)));

    draw_legend(&mut chart, SeriesLabelPosition::UpperRight)?;
    root.present()?;
    Ok(())
}
