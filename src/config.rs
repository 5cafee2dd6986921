use std::path::{Path, PathBuf};
use std::time::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::core::{DEFAULT_INPUT_POLL_MS, DEFAULT_LOG_FILE, DEFAULT_TICK_INTERVAL_MS, DEFAULT_TILE_SIZE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Session settings, resolved once at startup and passed down by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Milliseconds between enemy ticks.
    pub tick_interval_ms: u64,
    /// Pixel edge of one tile in the render projection.
    pub tile_size: i32,
    pub input_poll_ms: u64,
    pub log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            tile_size: DEFAULT_TILE_SIZE,
            input_poll_ms: DEFAULT_INPUT_POLL_MS,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl GameConfig {
    pub fn from_json(path: &Path, text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &text)
    }

    /// Defaults when no path is given.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn input_poll(&self) -> Duration {
        Duration::from_millis(self.input_poll_ms)
    }
}
