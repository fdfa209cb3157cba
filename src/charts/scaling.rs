use std::path::Path;

use plotters::prelude::*;

use super::{draw_legend, finish, line_swatch, DrawResult, CAPTION_SIZE, DESC_SIZE, FONT};
use crate::color;
use crate::data::loader::load_records;
use crate::data::model::ScalingRecord;
use crate::error::Result;

/// Speedup and efficiency panels side by side, each against thread count
/// with its ideal reference.
pub fn render(input: &Path, output: &Path, size: (u32, u32)) -> Result<()> {
    let rows: Vec<ScalingRecord> = load_records(input)?;
    finish(output, draw(&rows, output, size))
}

/// X extent shared by both panels: `1..=max_threads`, widened when only one
/// thread count was measured.
fn thread_range(rows: &[ScalingRecord]) -> (f64, f64) {
    let max = rows.iter().map(|r| r.threads).max().unwrap_or(1) as f64;
    if max > 1.0 {
        (1.0, max)
    } else {
        (1.0, 2.0)
    }
}

fn draw(rows: &[ScalingRecord], output: &Path, size: (u32, u32)) -> DrawResult {
    let (x_lo, x_hi) = thread_range(rows);

    let root = BitMapBackend::new(output, size).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));

    // ---- Speedup ----
    let mut speedup = ChartBuilder::on(&panels[0])
        .caption("Parallel Speedup", (FONT, CAPTION_SIZE))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, x_lo..x_hi)?;

    speedup
        .configure_mesh()
        .light_line_style(BLACK.mix(0.05))
        .x_desc("Number of Threads")
        .y_desc("Speedup")
        .axis_desc_style((FONT, DESC_SIZE))
        .draw()?;

    speedup
        .draw_series(
            LineSeries::new(
                rows.iter().map(|r| (r.threads as f64, r.speedup)),
                color::DATA.stroke_width(2),
            )
            .point_size(4),
        )?
        .label("Actual Speedup")
        .legend(line_swatch(color::DATA.stroke_width(2)));

    speedup
        .draw_series(DashedLineSeries::new(
            rows.iter().map(|r| (r.threads as f64, r.threads as f64)),
            10,
            6,
            color::REFERENCE.stroke_width(2),
        ))?
        .label("Ideal Speedup")
        .legend(line_swatch(color::REFERENCE.stroke_width(2)));

    draw_legend(&mut speedup, SeriesLabelPosition::UpperLeft)?;

    // ---- Efficiency ----
    let mut efficiency = ChartBuilder::on(&panels[1])
        .caption("Parallel Efficiency", (FONT, CAPTION_SIZE))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, 0.0..1.1)?;

    efficiency
        .configure_mesh()
        .light_line_style(BLACK.mix(0.05))
        .x_desc("Number of Threads")
        .y_desc("Parallel Efficiency")
        .axis_desc_style((FONT, DESC_SIZE))
        .draw()?;

    efficiency
        .draw_series(
            LineSeries::new(
                rows.iter().map(|r| (r.threads as f64, r.efficiency)),
                color::EFFICIENCY.stroke_width(2),
            )
            .point_size(4),
        )?
        .label("Efficiency")
        .legend(line_swatch(color::EFFICIENCY.stroke_width(2)));

    efficiency
        .draw_series(DashedLineSeries::new(
            [(x_lo, 1.0), (x_hi, 1.0)],
            10,
            6,
            color::REFERENCE.stroke_width(2),
        ))?
        .label("Ideal Efficiency")
        .legend(line_swatch(color::REFERENCE.stroke_width(2)));

    draw_legend(&mut efficiency, SeriesLabelPosition::LowerLeft)?;

    root.present()?;
    Ok(())
}
