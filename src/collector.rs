use image::{ImageFormat, ImageReader};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::Config;
use crate::envelope::SizeEnvelope;
use crate::summary::SummaryReport;

/// Extensions we treat as images, matched case-insensitively. Anything else
/// is never opened.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

/// Walks the per-camera plate folders, classifies every decodable image by
/// the size envelope, and copies it into the consolidated valid/invalid
/// output folders under a sequential name.
///
/// The filename counter is owned here: it starts at 1 and advances once per
/// successfully written copy, across all cameras and both outcomes, so output
/// names are `0001.jpg`..`{N:04}.jpg` with no gaps for the files that exist.
pub struct Collector<'a> {
    config: &'a Config,
    envelope: SizeEnvelope,
    valid_dir: PathBuf,
    invalid_dir: PathBuf,
    file_counter: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: String,
        source: std::io::Error,
    },
}

impl<'a> Collector<'a> {
    /// Create both output directories up front. Failure here is fatal to the
    /// run: nothing can be copied without them.
    pub fn new(config: &'a Config) -> Result<Self, CollectError> {
        let date_dir = config.date_dir();
        let valid_dir = date_dir.join("output_valid");
        let invalid_dir = date_dir.join("output_invalid");

        for dir in [&valid_dir, &invalid_dir] {
            fs::create_dir_all(dir).map_err(|e| CollectError::CreateOutputDir {
                path: dir.display().to_string(),
                source: e,
            })?;
        }

        Ok(Self {
            envelope: SizeEnvelope::new(&config.envelope),
            config,
            valid_dir,
            invalid_dir,
            file_counter: 1,
        })
    }

    /// Process every camera in ascending id order and return the per-camera
    /// counts. All per-file and per-camera failures are logged and skipped.
    pub fn run(mut self) -> SummaryReport {
        let mut report = SummaryReport::new();

        for camera_id in 0..self.config.dataset.camera_count {
            let input_dir = self.config.camera_dir(camera_id);
            if !input_dir.is_dir() {
                warn!(
                    camera_id,
                    path = %input_dir.display(),
                    "input folder does not exist, skipping camera"
                );
                continue;
            }

            // The folder exists, so this camera appears in the report even
            // if it turns out to hold no images.
            report.ensure_camera(camera_id);
            info!(camera_id, path = %input_dir.display(), "processing camera");

            let entries = match fs::read_dir(&input_dir) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(camera_id, error = %e, "failed to list input folder, skipping camera");
                    continue;
                }
            };

            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        warn!(camera_id, error = %e, "unreadable directory entry, skipping");
                        continue;
                    }
                };
                let path = entry.path();
                if !has_image_extension(&path) {
                    continue;
                }
                self.process_file(camera_id, &path, &mut report);
            }
        }

        report
    }

    /// Decode, classify, and copy one image. A file that cannot be decoded
    /// or written contributes nothing: no count, no output, no counter
    /// advance.
    fn process_file(&mut self, camera_id: u32, path: &Path, report: &mut SummaryReport) {
        let reader = match ImageReader::open(path).and_then(|r| r.with_guessed_format()) {
            Ok(reader) => reader,
            Err(e) => {
                warn!(camera_id, file = %path.display(), error = %e, "failed to read file, skipping");
                return;
            }
        };
        let image = match reader.decode() {
            Ok(image) => image,
            Err(e) => {
                warn!(camera_id, file = %path.display(), error = %e, "not a valid image file, skipping");
                return;
            }
        };

        let (width, height) = (image.width(), image.height());
        let outcome = self.envelope.classify(width, height);
        let out_dir = if outcome.is_valid() {
            &self.valid_dir
        } else {
            &self.invalid_dir
        };
        let out_path = out_dir.join(format!("{:04}.jpg", self.file_counter));

        // JPEG cannot carry an alpha channel, so flatten to RGB first.
        if let Err(e) = image.to_rgb8().save_with_format(&out_path, ImageFormat::Jpeg) {
            warn!(
                camera_id,
                file = %path.display(),
                error = %e,
                "failed to write output copy, skipping"
            );
            return;
        }

        info!(
            camera_id,
            file = %path.display(),
            width,
            height,
            outcome = outcome.label(),
            copied_to = %out_path.display(),
            "image classified"
        );
        report.record(camera_id, outcome);
        self.file_counter += 1;
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
