use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app::notice::DEFAULT_NOTICE;

pub const CONFIG_PATH_ENV: &str = "ARTIFACT_GALLERY_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "artifact_gallery.json";

const MIN_CARD_WIDTH: f32 = 120.0;
const MIN_WINDOW_WIDTH: f32 = 480.0;
const MIN_WINDOW_HEIGHT: f32 = 360.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub notice_duration_ms: u64,
    pub default_notice: String,
    pub image_root: String,
    pub seed_demo: bool,
    pub window_width: f32,
    pub window_height: f32,
    pub card_width: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            notice_duration_ms: 1800,
            default_notice: DEFAULT_NOTICE.to_string(),
            image_root: ".".to_string(),
            seed_demo: true,
            window_width: 1100.0,
            window_height: 760.0,
            card_width: 220.0,
        }
    }
}

impl AppConfig {
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Clamps layout sizes to usable minimums. Non-finite values fall back to defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.card_width = clamp_size(self.card_width, MIN_CARD_WIDTH, defaults.card_width);
        self.window_width = clamp_size(self.window_width, MIN_WINDOW_WIDTH, defaults.window_width);
        self.window_height =
            clamp_size(self.window_height, MIN_WINDOW_HEIGHT, defaults.window_height);
        self
    }

    /// Loads the config file, falling back to defaults when it is missing or broken.
    pub fn load() -> Self {
        let path = config_file_path();
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config.sanitized()
            }
            Err(error) => {
                log::warn!("{error}; using defaults");
                Self::default()
            }
        }
    }
}

fn clamp_size(value: f32, min: f32, fallback: f32) -> f32 {
    if !value.is_finite() {
        log::warn!("ignoring non-finite size {value}, using {fallback}");
        return fallback;
    }
    if value < min {
        log::warn!("size {value} is below the minimum {min}, clamping");
        return min;
    }
    value
}

fn config_file_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}
