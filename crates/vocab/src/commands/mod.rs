pub mod search;
pub mod serve;
pub mod version;
pub mod words;

use std::path::PathBuf;
use vocab_core::Config;
use vocab_store::{Paths, VocabDb};

/// Resolved configuration and database location for a command
pub struct Context {
    pub config: Config,
    pub db_path: PathBuf,
}

impl Context {
    /// Flags win over `VOCAB_*` variables, which win over the config file
    pub fn resolve(db: Option<PathBuf>, config: Option<PathBuf>) -> anyhow::Result<Self> {
        let paths = Paths::new().ok();

        let config_path = config.or_else(|| paths.as_ref().map(Paths::config_file));
        let config = match config_path {
            Some(path) => Config::load(&path)?,
            None => Config::default(),
        }
        .with_env_overrides(|key| std::env::var(key).ok());

        let db_path = db
            .or_else(|| config.db_path.clone())
            .or_else(|| paths.as_ref().map(Paths::db_file))
            .ok_or_else(|| anyhow::anyhow!("no database path; pass --db or set VOCAB_DB"))?;

        tracing::debug!(db = %db_path.display(), "resolved database");
        Ok(Self { config, db_path })
    }

    pub fn open_db(&self) -> anyhow::Result<VocabDb> {
        Ok(VocabDb::open(&self.db_path)?)
    }
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
