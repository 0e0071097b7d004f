//! Persistence: the library/favorites documents and the settings file.
//!
//! All documents live in one data directory (see [`config::data_dir`]).

pub mod config;
pub mod store;

pub use config::{data_dir, ConfigStore};
pub use store::{EntryStore, JsonStore, MemoryStore, StorageConfig};
