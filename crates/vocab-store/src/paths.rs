//! Path resolution for the database and config files

use std::path::PathBuf;

/// Resolves standard per-user locations
#[derive(Debug, Clone)]
pub struct Paths {
    pub data_dir: PathBuf,
    pub config_dir: PathBuf,
}

impl Paths {
    pub fn new() -> std::io::Result<Self> {
        let data = dirs::data_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "data directory not found")
        })?;
        let config = dirs::config_dir().unwrap_or_else(|| data.clone());

        Ok(Self {
            data_dir: data.join("vocab"),
            config_dir: config.join("vocab"),
        })
    }

    /// Get vocab.db path
    pub fn db_file(&self) -> PathBuf {
        self.data_dir.join("vocab.db")
    }

    /// Get config.json path
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }
}
