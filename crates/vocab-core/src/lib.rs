//! Vocabulary data model, validation and configuration

mod config;
mod error;
mod types;

pub use config::{Config, SearchConfig, ServerConfig};
pub use error::{ConfigError, ValidationError};
pub use types::{EntryPatch, Field, NewEntry, SortOrder, VocabEntry};
