//! Game configuration loaded from TOML.

use crate::store::{ScoreStore, StoreLayout, open_store};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Runtime settings for a game session.
///
/// Every field has a default, so an empty file (or no file) is valid:
///
/// ```toml
/// score_dir = "."
/// layout = "slot"        # or "versioned"
/// reset_delay_ms = 2000
/// persist = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Directory holding score records.
    #[serde(default = "default_score_dir")]
    score_dir: PathBuf,

    /// Persistence layout.
    #[serde(default)]
    layout: StoreLayout,

    /// Milliseconds the finished board stays visible before it is cleared.
    #[serde(default = "default_reset_delay_ms")]
    reset_delay_ms: u64,

    /// Whether scores are written to disk at all.
    #[serde(default = "default_persist")]
    persist: bool,
}

#[instrument]
fn default_score_dir() -> PathBuf {
    PathBuf::from(".")
}

#[instrument]
fn default_reset_delay_ms() -> u64 {
    2000
}

#[instrument]
fn default_persist() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            score_dir: default_score_dir(),
            layout: StoreLayout::default(),
            reset_delay_ms: default_reset_delay_ms(),
            persist: default_persist(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the score directory.
    pub fn with_score_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.score_dir = dir.into();
        self
    }

    /// Overrides the persistence layout.
    pub fn with_layout(mut self, layout: StoreLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Overrides the reset delay.
    pub fn with_reset_delay_ms(mut self, ms: u64) -> Self {
        self.reset_delay_ms = ms;
        self
    }

    /// Turns disk persistence on or off.
    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    /// The reset delay as a [`Duration`].
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    /// Opens the score store this configuration describes.
    pub fn open_store(&self) -> Box<dyn ScoreStore> {
        open_store(self.layout, self.score_dir.clone(), self.persist)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_file_uses_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("game.toml");
        std::fs::write(&path, "").expect("Write failed");

        let config = GameConfig::from_file(&path).expect("Load failed");
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.reset_delay(), Duration::from_secs(2));
        assert_eq!(*config.layout(), StoreLayout::Slot);
    }

    #[test]
    fn test_full_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("game.toml");
        std::fs::write(
            &path,
            r#"score_dir = "/tmp/scores"
layout = "versioned"
reset_delay_ms = 500
persist = false
"#,
        )
        .expect("Write failed");

        let config = GameConfig::from_file(&path).expect("Load failed");
        assert_eq!(config.score_dir(), Path::new("/tmp/scores"));
        assert_eq!(*config.layout(), StoreLayout::Versioned);
        assert_eq!(*config.reset_delay_ms(), 500);
        assert!(!*config.persist());
    }

    #[test]
    fn test_bad_layout_is_an_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("game.toml");
        std::fs::write(&path, "layout = \"sideways\"\n").expect("Write failed");
        assert!(GameConfig::from_file(&path).is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = GameConfig::from_file_or_default(dir.path().join("absent.toml"))
            .expect("Fallback failed");
        assert_eq!(config, GameConfig::default());
    }
}
