//! Runtime Configuration
//!
//! Startup configuration for the driver binary: where the sound library
//! lives and the initial volume mix. Loaded from a JSON file when present;
//! nothing is persisted back (settings do not survive restarts).

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{LoopscapeError, Result};

/// Default completion-watcher poll interval in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

/// Startup configuration for the mixer driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root directory of the sound library
    pub library_dir: PathBuf,
    /// Initial master volume in `[0, 1]`
    pub master_volume: f32,
    /// Initial music volume in `[0, 1]`
    pub music_volume: f32,
    /// Completion-watcher poll interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            library_dir: PathBuf::from("sounds"),
            master_volume: 0.8,
            music_volume: 0.6,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file.
    ///
    /// Volumes are clamped to `[0, 1]` on load.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let mut config: AppConfig = serde_json::from_str(&raw)
            .map_err(|e| LoopscapeError::Config(e.to_string()))?;
        config.master_volume = config.master_volume.clamp(0.0, 1.0);
        config.music_volume = config.music_volume.clamp(0.0, 1.0);
        Ok(config)
    }

    /// Load configuration from a JSON file, falling back to defaults when
    /// the file does not exist. A present-but-invalid file is still an
    /// error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(AppConfig::default())
        }
    }

    /// Watcher poll interval as a [`Duration`].
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.library_dir, PathBuf::from("sounds"));
        assert_eq!(config.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
        assert!(config.master_volume > 0.0 && config.master_volume <= 1.0);
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "library_dir": "/srv/sounds" }"#).unwrap();

        let config = AppConfig::load(&path).expect("Failed to load config");
        assert_eq!(config.library_dir, PathBuf::from("/srv/sounds"));
        assert_eq!(config.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
    }

    #[test]
    fn test_load_clamps_volumes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "master_volume": 7.5, "music_volume": -1.0 }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.master_volume, 1.0);
        assert_eq!(config.music_volume, 0.0);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_or_default(dir.path().join("absent.json")).unwrap();
        assert_eq!(config.library_dir, AppConfig::default().library_dir);
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(LoopscapeError::Config(_))
        ));
    }
}
