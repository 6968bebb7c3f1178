//! Configuration for search and serving

use crate::error::ConfigError;
use crate::types::Field;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Search scoring configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Fields joined (in order) into the text an entry is scored on
    pub fields: Vec<Field>,

    /// Joiner between fields
    pub separator: String,

    /// Entries scoring <= this are dropped
    pub min_score: f64,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self {
            fields: Field::ALL.to_vec(),
            separator: " ".to_string(),
            min_score: 0.0,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub server: ServerConfig,

    /// Database file; resolved from the data directory when unset
    pub db_path: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Apply `VOCAB_DB` / `VOCAB_BIND` overrides from `lookup`
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(db) = lookup("VOCAB_DB").filter(|v| !v.trim().is_empty()) {
            self.db_path = Some(PathBuf::from(db));
        }
        if let Some(bind) = lookup("VOCAB_BIND").filter(|v| !v.trim().is_empty()) {
            self.server.bind = bind;
        }
        self
    }
}
