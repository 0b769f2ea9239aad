//! Review configuration persistence
//!
//! Reads user preferences from `~/.config/minuta/config.yaml`

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Fixed name of the exported draft
pub const EXPORT_FILENAME: &str = "minuta.html";

/// Review configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewConfig {
    /// Directory `minuta.html` is written to (defaults to the downloads folder)
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
    /// How long success notifications stay visible
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,
    /// How long failure notifications stay visible
    #[serde(default = "default_error_notification_ms")]
    pub error_notification_ms: u64,
}

fn default_notification_ms() -> u64 {
    2000
}

fn default_error_notification_ms() -> u64 {
    3000
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            export_dir: None,
            notification_ms: default_notification_ms(),
            error_notification_ms: default_error_notification_ms(),
        }
    }
}

impl ReviewConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Full path of the exported draft
    pub fn export_path(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(crate::config_paths::default_export_dir)
            .join(EXPORT_FILENAME)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub fn error_notification_duration(&self) -> Duration {
        Duration::from_millis(self.error_notification_ms)
    }
}
