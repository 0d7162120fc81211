#![forbid(unsafe_code)]

//! Board configuration: field length limits.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

/// Default maximum title length, in characters.
pub const TITLE_LIMIT: usize = 100;
/// Default maximum body length, in characters.
pub const BODY_LIMIT: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub title_limit: usize,
    pub body_limit: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title_limit: TITLE_LIMIT,
            body_limit: BODY_LIMIT,
        }
    }
}

impl BoardConfig {
    #[must_use]
    pub fn with_title_limit(mut self, limit: usize) -> Self {
        self.title_limit = limit;
        self
    }

    #[must_use]
    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit;
        self
    }

    /// Load a config from a JSON file. Missing keys fall back to defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str::<Self>(&content)?;
        config.check().map_err(|message| BoardError::invalid_config(path, message))?;
        Ok(config)
    }

    /// A zero limit would reject every non-empty field.
    pub fn check(&self) -> std::result::Result<(), String> {
        if self.title_limit == 0 {
            return Err("title_limit must be at least 1".to_string());
        }
        if self.body_limit == 0 {
            return Err("body_limit must be at least 1".to_string());
        }
        Ok(())
    }
}
