//! Error types for scical.
//!
//! Arithmetic never fails; these errors only come from the edges
//! (input tokens, configuration, clipboard, terminal I/O).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScicalError {
    #[error("Unknown key or button: {0}")]
    UnknownToken(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// `index` is 0-based; the message counts from 1 like the history list.
    #[error("No history entry #{} (history has {len} entries)", .index + 1)]
    HistoryIndex { index: usize, len: usize },

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScicalError {
    pub fn unknown_token(token: impl Into<String>) -> Self {
        Self::UnknownToken(token.into())
    }

    pub fn unknown_command(command: impl Into<String>) -> Self {
        Self::UnknownCommand(command.into())
    }

    pub fn clipboard(msg: impl Into<String>) -> Self {
        Self::Clipboard(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ScicalError>;
