use std::path::Path;

use plotters::prelude::*;

use super::{
    draw_legend, finish, line_swatch, linear_range, log_range, DrawResult, CAPTION_SIZE,
    DESC_SIZE, FONT,
};
use crate::color;
use crate::data::loader::load_records;
use crate::data::model::ValidationRecord;
use crate::error::Result;

/// Estimated volumes with error bars next to the exact volumes, per
/// dimension, on a log volume axis.
pub fn render(input: &Path, output: &Path, size: (u32, u32)) -> Result<()> {
    let rows: Vec<ValidationRecord> = load_records(input)?;
    finish(output, draw(&rows, output, size))
}

/// Vertical extent `(low, high)` of each error bar. The low end is clamped
/// to `floor` so it stays drawable on a log axis.
fn bar_extents(row: &ValidationRecord, floor: f64) -> (f64, f64) {
    let bar = row.error_bar().abs();
    let low = (row.estimated_volume - bar).max(floor);
    let high = (row.estimated_volume + bar).max(floor);
    (low, high)
}

fn draw(rows: &[ValidationRecord], output: &Path, size: (u32, u32)) -> DrawResult {
    let (x_lo, x_hi) = linear_range(rows.iter().map(|r| r.n as f64), 0.05);
    let (y_lo, y_hi) = log_range(
        rows.iter().flat_map(|r| {
            let bar = r.error_bar().abs();
            [
                r.exact_volume,
                r.estimated_volume,
                r.estimated_volume + bar,
                r.estimated_volume - bar,
            ]
        }),
        1.5,
    );

    let root = BitMapBackend::new(output, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Volume Validation: Monte Carlo vs Exact (p=2, R=1)",
            (FONT, CAPTION_SIZE),
        )
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_lo..x_hi, (y_lo..y_hi).log_scale())?;

    chart
        .configure_mesh()
        .light_line_style(BLACK.mix(0.05))
        .x_desc("Dimension (n)")
        .y_desc("Volume")
        .axis_desc_style((FONT, DESC_SIZE))
        .x_label_formatter(&|v| format!("{v:.0}"))
        .y_label_formatter(&|v| format!("{v:.1e}"))
        .draw()?;

    let exact: Vec<(f64, f64)> = rows
        .iter()
        .map(|r| (r.n as f64, r.exact_volume))
        .filter(|&(_, v)| v > 0.0)
        .collect();

    let exact_style = color::REFERENCE.stroke_width(3);
    chart
        .draw_series(LineSeries::new(exact.clone(), exact_style))?
        .label("Exact Values")
        .legend(line_swatch(exact_style));
    chart.draw_series(exact.into_iter().map(|c| {
        EmptyElement::at(c) + Rectangle::new([(-5, -5), (5, 5)], color::REFERENCE.filled())
    }))?;

    let estimates: Vec<&ValidationRecord> =
        rows.iter().filter(|r| r.estimated_volume > 0.0).collect();
    let data_style = color::DATA.stroke_width(2);

    chart
        .draw_series(estimates.iter().map(|r| {
            let (low, high) = bar_extents(r, y_lo);
            ErrorBar::new_vertical(r.n as f64, low, r.estimated_volume, high, data_style, 10)
        }))?
        .label("Monte Carlo Estimates")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, color::DATA.filled()));
    chart.draw_series(estimates.iter().map(|r| {
        Circle::new((r.n as f64, r.estimated_volume), 5, color::DATA.filled())
    }))?;

    draw_legend(&mut chart, SeriesLabelPosition::UpperRight)?;
    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_low_end_is_clamped_to_floor() {
        let row = ValidationRecord {
            n: 10,
            estimated_volume: 0.002,
            exact_volume: 0.0025,
            relative_error: 2.0,
        };
        let (low, high) = bar_extents(&row, 1e-4);
        assert_eq!(low, 1e-4);
        assert!((high - 0.007).abs() < 1e-12);
    }

    #[test]
    fn bar_is_symmetric_when_positive() {
        let row = ValidationRecord {
            n: 2,
            estimated_volume: 3.15,
            exact_volume: 3.0,
            relative_error: 0.05,
        };
        let (low, high) = bar_extents(&row, 1e-6);
        assert!((low - 3.0).abs() < 1e-12);
        assert!((high - 3.3).abs() < 1e-12);
    }
}
