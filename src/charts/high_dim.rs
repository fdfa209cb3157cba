use std::path::Path;

use plotters::prelude::*;

use super::{
    draw_legend, finish, line_swatch, linear_range, log_range, DrawResult, CAPTION_SIZE,
    DESC_SIZE, FONT,
};
use crate::color::ColorMap;
use crate::data::group::{group_by_p, p_labels, PGroup};
use crate::data::loader::load_records;
use crate::data::model::HighDimRecord;
use crate::error::Result;

/// Exact volume and acceptance ratio against dimension, one line per `p`,
/// both on log axes.
pub fn render(input: &Path, output: &Path, size: (u32, u32)) -> Result<()> {
    let rows: Vec<HighDimRecord> = load_records(input)?;
    let groups = group_by_p(&rows);
    log::debug!("{} p-series in {}", groups.len(), input.display());
    finish(output, draw(&rows, &groups, output, size))
}

/// Selects the plotted quantity for one panel.
type Metric = fn(&HighDimRecord) -> f64;

fn draw(rows: &[HighDimRecord], groups: &[PGroup], output: &Path, size: (u32, u32)) -> DrawResult {
    let labels = p_labels(groups);
    let legend = ColorMap::new(labels.iter()).legend_entries();

    let root = BitMapBackend::new(output, size).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));

    let specs: [(&str, &str, Metric); 2] = [
        (
            "Volume vs Dimension",
            "Volume (log scale)",
            |r: &HighDimRecord| r.exact_volume,
        ),
        (
            "Acceptance Ratio vs Dimension",
            "Acceptance Ratio (log scale)",
            |r: &HighDimRecord| r.acceptance_ratio,
        ),
    ];

    let (x_lo, x_hi) = linear_range(rows.iter().map(|r| r.n as f64), 0.05);

    for (panel, (caption, y_desc, metric)) in panels.iter().zip(specs) {
        let (y_lo, y_hi) = log_range(rows.iter().map(metric), 2.0);

        let mut chart = ChartBuilder::on(panel)
            .caption(caption, (FONT, CAPTION_SIZE))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(x_lo..x_hi, (y_lo..y_hi).log_scale())?;

        chart
            .configure_mesh()
            .light_line_style(BLACK.mix(0.05))
            .x_desc("Dimension (n)")
            .y_desc(y_desc)
            .axis_desc_style((FONT, DESC_SIZE))
            .x_label_formatter(&|v| format!("{v:.0}"))
            .y_label_formatter(&|v| format!("{v:.0e}"))
            .draw()?;

        for (group, (label, c)) in groups.iter().zip(&legend) {
            let points: Vec<(f64, f64)> = group
                .rows
                .iter()
                .map(|r| (r.n as f64, metric(r)))
                .filter(|&(_, y)| y > 0.0)
                .collect();
            chart
                .draw_series(LineSeries::new(points, c.stroke_width(2)).point_size(3))?
                .label(format!("p = {label}"))
                .legend(line_swatch(c.stroke_width(2)));
        }

        draw_legend(&mut chart, SeriesLabelPosition::LowerLeft)?;
    }

    root.present()?;
    Ok(())
}
