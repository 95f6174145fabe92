use plotters::element::Pie;
use plotters::prelude::*;
use std::path::Path;
use tracing::warn;

use crate::summary::{CameraCounts, SummaryReport};

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("chart rendering failed: {0}")]
    Render(String),
}

fn draw_err(e: impl std::fmt::Display) -> ChartError {
    ChartError::Render(e.to_string())
}

/// Grouped bar chart: one group per camera, a green valid bar and a red
/// invalid bar, saved as a PNG. Rendering only writes the file; nothing is
/// displayed.
pub fn render_bar_chart(report: &SummaryReport, date: &str, path: &Path) -> Result<(), ChartError> {
    let cameras: Vec<(u32, CameraCounts)> = report.iter().collect();
    let y_max = cameras
        .iter()
        .map(|(_, c)| c.valid.max(c.invalid))
        .max()
        .unwrap_or(0)
        .max(1)
        + 1;
    let x_max = cameras.len().max(1) as f64;

    let root = BitMapBackend::new(path, (960, 540)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Image Categorization for {date}"),
            ("sans-serif", 28),
        )
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(-0.6f64..x_max - 0.4, 0u64..y_max)
        .map_err(draw_err)?;

    let labels: Vec<String> = cameras
        .iter()
        .map(|(id, _)| format!("Camera {id}"))
        .collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Camera ID")
        .y_desc("Number of Images")
        .x_labels(cameras.len().max(1))
        .x_label_formatter(&|x: &f64| {
            // Only label ticks that land on a camera group position.
            let i = x.round();
            if (x - i).abs() < 0.25 && i >= 0.0 && (i as usize) < labels.len() {
                labels[i as usize].clone()
            } else {
                String::new()
            }
        })
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(cameras.iter().enumerate().map(|(i, (_, counts))| {
            Rectangle::new(
                [(i as f64 - 0.35, 0u64), (i as f64, counts.valid)],
                GREEN.filled(),
            )
        }))
        .map_err(draw_err)?
        .label("Valid")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], GREEN.filled()));

    chart
        .draw_series(cameras.iter().enumerate().map(|(i, (_, counts))| {
            Rectangle::new(
                [(i as f64, 0u64), (i as f64 + 0.35, counts.invalid)],
                RED.filled(),
            )
        }))
        .map_err(draw_err)?
        .label("Invalid")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], RED.filled()));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

/// Overall pie chart: two slices for total valid and total invalid counts,
/// starting at 90 degrees, saved as a PNG. A run with zero processed images
/// gets an empty (but titled) chart.
pub fn render_pie_chart(report: &SummaryReport, path: &Path) -> Result<(), ChartError> {
    let totals = report.totals();
    let total = totals.valid + totals.invalid;

    let root = BitMapBackend::new(path, (640, 640)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    let chart_area = root
        .titled("Overall Image Categorization", ("sans-serif", 28))
        .map_err(draw_err)?;

    if total == 0 {
        warn!("no images were processed, pie chart has no slices");
        root.present().map_err(draw_err)?;
        return Ok(());
    }

    let sizes = [totals.valid as f64, totals.invalid as f64];
    let colors = [GREEN, RED];
    let labels = [
        slice_label("Valid", totals.valid, total),
        slice_label("Invalid", totals.invalid, total),
    ];

    let center = (320, 300);
    let radius = 200.0;
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(90.0);
    pie.label_style(("sans-serif", 22).into_font());
    chart_area.draw(&pie).map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

/// Slice label text. The percentage is computed from the raw count, and the
/// displayed count is reconstructed by inverting that percentage, so the two
/// numbers on the chart always agree under floating-point rounding.
pub(crate) fn slice_label(name: &str, value: u64, total: u64) -> String {
    let percentage = 100.0 * value as f64 / total as f64;
    let count = (percentage * total as f64 / 100.0).round() as u64;
    format!("{name}: {percentage:.2}% ({count})")
}
