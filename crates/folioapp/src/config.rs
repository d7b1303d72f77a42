//! # Configuration
//!
//! Folio configuration is managed by [`confique`], which handles layered
//! loading from a TOML file, environment variables and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `FOLIO_THEME_KEY`, `FOLIO_STORAGE_DIR`, etc.
//! 2. **Config file**: `folio.toml`, when the host passes one.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `theme_key` | `"theme"` | Storage key of the persisted theme |
//! | `storage_dir` | platform data dir | Where `preferences.json` lives |
//! | `content_path` | bundled document | Project JSON to load instead of the bundled one |
//! | `scroll_throttle_ms` | `100` | Minimum interval between evaluated scroll ticks |
//! | `reveal_threshold` | `0.8` | Default viewport fraction for reveal triggers |
//! | `max_render_retries` | `3` | Error-boundary retries before a reload |
//! | `log_level` | `"info"` | File log level set up by [`crate::api::FolioApi::open`] |

use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for folio, optionally stored in `folio.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FolioConfig {
    /// Storage key of the persisted theme preference.
    #[config(env = "FOLIO_THEME_KEY", default = "theme")]
    pub theme_key: String,

    /// Directory holding `preferences.json`. When absent, the platform data
    /// directory is used.
    #[config(env = "FOLIO_STORAGE_DIR")]
    pub storage_dir: Option<PathBuf>,

    /// Content document to load instead of the bundled one.
    #[config(env = "FOLIO_CONTENT_PATH")]
    pub content_path: Option<PathBuf>,

    /// Minimum interval between evaluated scroll ticks, in milliseconds.
    #[config(env = "FOLIO_SCROLL_THROTTLE_MS", default = 100)]
    pub scroll_throttle_ms: u64,

    /// Default viewport fraction an element's top must cross to reveal.
    #[config(env = "FOLIO_REVEAL_THRESHOLD", default = 0.8)]
    pub reveal_threshold: f64,

    /// Render retries allowed before a full reload is required.
    #[config(env = "FOLIO_MAX_RENDER_RETRIES", default = 3)]
    pub max_render_retries: u32,

    /// Level for the file log under `<storage_dir>/logs`.
    #[config(env = "FOLIO_LOG_LEVEL", default = "info")]
    pub log_level: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            theme_key: "theme".to_string(),
            storage_dir: None,
            content_path: None,
            scroll_throttle_ms: 100,
            reveal_threshold: 0.8,
            max_render_retries: 3,
            log_level: "info".to_string(),
        }
    }
}

impl FolioConfig {
    /// Loads environment overrides, then the optional file, then defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// The scroll throttle interval as a `Duration`.
    pub fn scroll_throttle(&self) -> Duration {
        Duration::from_millis(self.scroll_throttle_ms)
    }

    /// Theme key, falling back to the default when configured blank.
    pub fn theme_key(&self) -> &str {
        let key = self.theme_key.trim();
        if key.is_empty() {
            "theme"
        } else {
            key
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = FolioConfig::default();
        assert_eq!(config.theme_key(), "theme");
        assert_eq!(config.scroll_throttle(), Duration::from_millis(100));
        assert_eq!(config.reveal_threshold, 0.8);
        assert_eq!(config.max_render_retries, 3);
        assert!(config.storage_dir.is_none());
        assert!(config.content_path.is_none());
    }

    #[test]
    fn test_blank_theme_key_falls_back() {
        let config = FolioConfig {
            theme_key: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.theme_key(), "theme");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(
            &path,
            "theme_key = \"portfolio-theme\"\nscroll_throttle_ms = 250\nmax_render_retries = 5\n",
        )
        .unwrap();

        let config = FolioConfig::load(Some(&path)).unwrap();
        assert_eq!(config.theme_key(), "portfolio-theme");
        assert_eq!(config.scroll_throttle(), Duration::from_millis(250));
        assert_eq!(config.max_render_retries, 5);
        assert_eq!(config.reveal_threshold, 0.8);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = FolioConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.max_render_retries, 3);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(&path, "scroll_throttle_ms = \"soon\"\n").unwrap();
        assert!(matches!(
            FolioConfig::load(Some(&path)),
            Err(crate::error::FolioError::Config(_))
        ));
    }
}
