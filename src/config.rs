//! Terminal game configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the terminal front end, loaded from TOML.
///
/// ```toml
/// show_scores = true
/// json = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Print the engine's evaluation of every candidate after each reply.
    #[serde(default)]
    show_scores: bool,

    /// Print game snapshots as JSON instead of the drawn board.
    #[serde(default)]
    json: bool,
}

impl GameConfig {
    /// Creates a configuration.
    pub fn new(show_scores: bool, json: bool) -> Self {
        Self { show_scores, json }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(show_scores = config.show_scores, json = config.json, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns a copy with JSON output forced on when `json` is set.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json |= json;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(false, false)
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
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_scores = true").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert!(*config.show_scores());
        assert!(!*config.json());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_scores = \"often\"").unwrap();

        let err = GameConfig::load_or_default(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_json_flag_overrides() {
        let config = GameConfig::default().with_json(true);
        assert!(*config.json());
        assert!(*GameConfig::new(false, true).with_json(false).json());
    }
}
