pub mod charts;
pub mod text;

use tracing::{error, info};

use crate::config::Config;
use crate::summary::SummaryReport;

/// Write the three report artifacts under `{base}/{date}`. Each write is
/// independent: a failure is logged and the remaining artifacts are still
/// attempted.
pub fn write_artifacts(report: &SummaryReport, config: &Config) {
    let date_dir = config.date_dir();
    let date = &config.dataset.date;

    let summary_path = date_dir.join("summary.txt");
    match text::write_summary(report, date, &summary_path) {
        Ok(()) => info!(path = %summary_path.display(), "summary report saved"),
        Err(e) => {
            error!(path = %summary_path.display(), error = %e, "failed to write summary report")
        }
    }

    let bar_path = date_dir.join("summary_bar_graph.png");
    match charts::render_bar_chart(report, date, &bar_path) {
        Ok(()) => info!(path = %bar_path.display(), "bar graph saved"),
        Err(e) => error!(path = %bar_path.display(), error = %e, "failed to render bar graph"),
    }

    let pie_path = date_dir.join("summary_pie_chart.png");
    match charts::render_pie_chart(report, &pie_path) {
        Ok(()) => info!(path = %pie_path.display(), "pie chart saved"),
        Err(e) => error!(path = %pie_path.display(), error = %e, "failed to render pie chart"),
    }
}
