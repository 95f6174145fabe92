mod collector;
mod config;
mod envelope;
mod report;
mod summary;

use collector::Collector;
use config::Config;
use std::path::PathBuf;
use tracing::{error, info};

fn main() {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"));

    let config = match Config::load(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config from {}: {e}", config_path.display());
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.parse().unwrap_or_default()),
        )
        .init();

    info!(
        base_dir = %config.dataset.base_dir.display(),
        date = config.dataset.date,
        cameras = config.dataset.camera_count,
        sub_folder = config.dataset.sub_folder,
        min_width = config.envelope.min_width,
        max_width = config.envelope.max_width,
        min_height = config.envelope.min_height,
        max_height = config.envelope.max_height,
        "starting plate triage"
    );

    // Output directories are required for anything else to happen.
    let collector = match Collector::new(&config) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "cannot set up output directories, aborting");
            std::process::exit(1);
        }
    };

    let summary = collector.run();
    info!(
        date = config.dataset.date,
        cameras = summary.len(),
        valid = summary.totals().valid,
        invalid = summary.totals().invalid,
        "processing completed for all cameras"
    );

    report::write_artifacts(&summary, &config);
}
