use std::path::PathBuf;

use thiserror::Error;

use crate::document::Role;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("failed to find required element: {role}")]
    MissingElement { role: Role },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config {}: {message}", .path.display())]
    InvalidConfig { path: PathBuf, message: String },
}

impl BoardError {
    #[must_use]
    pub fn invalid_config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            path: path.into(),
            message: message.into(),
        }
    }
}
