//! User configuration, read from `~/.config/scical/config.toml`.
//!
//! ```toml
//! angle_mode = "degrees"
//! history_limit = 100
//! time_format = "%H:%M:%S"
//! group_digits = true
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every key is optional; a missing file means all defaults.

use crate::calculator::AngleMode;
use crate::error::{Result, ScicalError};
use crate::history::{DEFAULT_HISTORY_LIMIT, DEFAULT_TIME_FORMAT, is_valid_time_format};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Angle mode at startup.
    pub angle_mode: AngleMode,
    /// Maximum number of history entries kept.
    pub history_limit: usize,
    /// strftime format for history timestamps.
    pub time_format: String,
    /// Show the display with thousand separators.
    pub group_digits: bool,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            angle_mode: AngleMode::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            group_digits: false,
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `warn` or `scical=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Location of the config file in the user's config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scical").join("config.toml"))
    }

    /// Load the config.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ScicalError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse TOML content; `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| ScicalError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace values that would misbehave at runtime with defaults,
    /// logging each replacement.
    pub fn sanitize(&mut self) {
        if self.history_limit == 0 {
            warn!("history_limit must be at least 1, using 1");
            self.history_limit = 1;
        }

        if !is_valid_time_format(&self.time_format) {
            warn!(
                time_format = %self.time_format,
                "invalid time_format, using {}", DEFAULT_TIME_FORMAT
            );
            self.time_format = DEFAULT_TIME_FORMAT.to_string();
        }
    }
}
