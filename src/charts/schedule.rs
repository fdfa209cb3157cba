use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{draw_legend, finish, DrawResult, CAPTION_SIZE, DESC_SIZE, FONT};
use crate::color;
use crate::data::group::{split_schedules, ScheduleSeries};
use crate::data::loader::load_records;
use crate::data::model::ScheduleRecord;
use crate::error::Result;

/// Grouped bars of runtime per chunk size: static on the left, dynamic on
/// the right of each pair.
pub fn render(input: &Path, output: &Path, size: (u32, u32)) -> Result<()> {
    let rows: Vec<ScheduleRecord> = load_records(input)?;
    let series = split_schedules(&rows);

    if !series.is_balanced() {
        log::warn!(
            "{}: {} static vs {} dynamic runs, charting the first {} pairs",
            input.display(),
            series.static_runs.len(),
            series.dynamic_runs.len(),
            series.pairs().count()
        );
    }
    if series.pairs().next().is_none() {
        log::warn!(
            "{}: no static/dynamic run pairs, drawing empty axes",
            input.display()
        );
    }

    finish(output, draw(&series, output, size))
}

/// Tick labels, one per bar pair, taken from the static runs.
pub fn tick_labels(series: &ScheduleSeries) -> Vec<String> {
    series.pairs().map(|(s, _)| s.chunk_label()).collect()
}

/// Width of one bar in x units; a pair spans `2 * BAR_WIDTH` around its slot.
const BAR_WIDTH: f64 = 0.35;

fn draw(series: &ScheduleSeries, output: &Path, size: (u32, u32)) -> DrawResult {
    let labels = tick_labels(series);
    let slots = labels.len().max(1) as f64;
    let y_max = series
        .pairs()
        .map(|(s, d)| s.runtime.max(d.runtime))
        .fold(0.0f64, f64::max);
    let y_hi = if y_max > 0.0 { y_max * 1.15 } else { 1.0 };

    let root = BitMapBackend::new(output, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "OpenMP Scheduling Comparison (n=10, p=4, R=1, N=5M, 4 threads)",
            (FONT, CAPTION_SIZE),
        )
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5..(slots - 0.5), 0.0..y_hi)?;

    // Chunk-size ticks are drawn by hand below, one per slot.
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|_| String::new())
        .light_line_style(BLACK.mix(0.05))
        .x_desc("Chunk Size")
        .y_desc("Runtime (seconds)")
        .axis_desc_style((FONT, DESC_SIZE))
        .draw()?;

    let static_style = color::DATA.mix(0.8).filled();
    let dynamic_style = color::REFERENCE.mix(0.8).filled();

    chart
        .draw_series(series.pairs().enumerate().map(|(i, (s, _))| {
            let x = i as f64;
            Rectangle::new([(x - BAR_WIDTH, 0.0), (x, s.runtime)], static_style)
        }))?
        .label("Static")
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 6), (x + 16, y + 6)], static_style)
        });

    chart
        .draw_series(series.pairs().enumerate().map(|(i, (_, d))| {
            let x = i as f64;
            Rectangle::new([(x, 0.0), (x + BAR_WIDTH, d.runtime)], dynamic_style)
        }))?
        .label("Dynamic")
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 6), (x + 16, y + 6)], dynamic_style)
        });

    let tick_style =
        TextStyle::from((FONT, 16).into_font()).pos(Pos::new(HPos::Center, VPos::Top));
    for (i, label) in labels.iter().enumerate() {
        let (px, py) = chart.backend_coord(&(i as f64, 0.0));
        root.draw(&Text::new(label.as_str(), (px, py + 8), tick_style.clone()))?;
    }

    draw_legend(&mut chart, SeriesLabelPosition::UpperRight)?;
    root.present()?;
    Ok(())
}
