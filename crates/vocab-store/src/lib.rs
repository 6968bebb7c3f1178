//! SQLite-backed vocabulary storage

mod error;
mod paths;
mod storage;

pub use error::StoreError;
pub use paths::Paths;
pub use storage::VocabDb;
