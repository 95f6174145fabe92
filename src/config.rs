use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub envelope: EnvelopeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Root of the dataset tree; camera folders live under `{base_dir}/{date}`.
    pub base_dir: PathBuf,
    #[serde(default = "default_date")]
    pub date: String,
    #[serde(default = "default_camera_count")]
    pub camera_count: u32,
    #[serde(default = "default_sub_folder")]
    pub sub_folder: String,
}

/// Pixel-dimension bounds for the valid/invalid decision. All four bounds
/// are inclusive.
#[derive(Debug, Clone, Deserialize)]
pub struct EnvelopeConfig {
    #[serde(default = "default_min_width")]
    pub min_width: u32,
    #[serde(default = "default_max_width")]
    pub max_width: u32,
    #[serde(default = "default_min_height")]
    pub min_height: u32,
    #[serde(default = "default_max_height")]
    pub max_height: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            min_width: default_min_width(),
            max_width: default_max_width(),
            min_height: default_min_height(),
            max_height: default_max_height(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadFile(path.display().to_string(), e))?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(config)
    }

    /// Directory for the configured date, e.g. `{base_dir}/2024-11-23`.
    pub fn date_dir(&self) -> PathBuf {
        self.dataset.base_dir.join(&self.dataset.date)
    }

    /// Input folder for one camera: `{base_dir}/{date}/camera_{id}/{sub_folder}`.
    pub fn camera_dir(&self, camera_id: u32) -> PathBuf {
        self.date_dir()
            .join(format!("camera_{camera_id}"))
            .join(&self.dataset.sub_folder)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    ReadFile(String, std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(String),
}

// Default value functions
fn default_date() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
fn default_camera_count() -> u32 {
    10
}
fn default_sub_folder() -> String {
    "plates".into()
}
fn default_min_width() -> u32 {
    90
}
fn default_max_width() -> u32 {
    220
}
fn default_min_height() -> u32 {
    60
}
fn default_max_height() -> u32 {
    160
}
fn default_log_level() -> String {
    "info".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_gets_defaults() {
        let config: Config = toml::from_str(
            r#"
            [dataset]
            base_dir = "/data/plates"
            date = "2024-11-23"
            "#,
        )
        .unwrap();
        assert_eq!(config.dataset.camera_count, 10);
        assert_eq!(config.dataset.sub_folder, "plates");
        assert_eq!(config.envelope.min_width, 90);
        assert_eq!(config.envelope.max_width, 220);
        assert_eq!(config.envelope.min_height, 60);
        assert_eq!(config.envelope.max_height, 160);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn camera_dir_layout() {
        let config: Config = toml::from_str(
            r#"
            [dataset]
            base_dir = "/data/plates"
            date = "2024-11-23"
            sub_folder = "crops"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.camera_dir(3),
            PathBuf::from("/data/plates/2024-11-23/camera_3/crops")
        );
    }

    #[test]
    fn missing_base_dir_is_an_error() {
        let result: Result<Config, _> = toml::from_str("[dataset]\ndate = \"2024-11-23\"\n");
        assert!(result.is_err());
    }
}
