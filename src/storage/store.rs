//! Library and favorites persistence.
//!
//! Two independent JSON documents, each an array of entries. Reading never
//! fails: a missing file is an empty collection and an unreadable one is
//! logged and treated as empty. Writing reports errors to the caller.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;
use crate::model::constants::{FAVORITES_FILE, LIBRARY_FILE};
use crate::model::{FavoriteEntry, LibraryEntry};

/// Load/save access to the two persisted collections.
pub trait EntryStore {
    fn load_library(&self) -> Vec<LibraryEntry>;
    fn save_library(&mut self, entries: &[LibraryEntry]) -> Result<(), StorageError>;
    fn load_favorites(&self) -> Vec<FavoriteEntry>;
    fn save_favorites(&mut self, entries: &[FavoriteEntry]) -> Result<(), StorageError>;
}

/// Locations of the persisted documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub library_path: PathBuf,
    pub favorites_path: PathBuf,
}

impl StorageConfig {
    /// `games.json` and `favorites.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            library_path: dir.join(LIBRARY_FILE),
            favorites_path: dir.join(FAVORITES_FILE),
        }
    }
}

/// File-backed store writing pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonStore {
    config: StorageConfig,
}

impl JsonStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }
}

impl EntryStore for JsonStore {
    fn load_library(&self) -> Vec<LibraryEntry> {
        read_collection(&self.config.library_path)
    }

    fn save_library(&mut self, entries: &[LibraryEntry]) -> Result<(), StorageError> {
        write_collection(&self.config.library_path, entries)
    }

    fn load_favorites(&self) -> Vec<FavoriteEntry> {
        read_collection(&self.config.favorites_path)
    }

    fn save_favorites(&mut self, entries: &[FavoriteEntry]) -> Result<(), StorageError> {
        write_collection(&self.config.favorites_path, entries)
    }
}

/// Read a JSON array, returning an empty collection if missing or invalid.
fn read_collection<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{} does not exist yet", path.display());
            return Vec::new();
        }
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(items) => items,
        Err(e) => {
            warn!("Ignoring invalid JSON in {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Write a JSON array with four-space indentation.
///
/// The document is written to a sibling temp file and renamed over the
/// target, so a failed write leaves the previous contents intact.
fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StorageError> {
    let json = to_pretty_json(items).map_err(|source| StorageError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    let io_err = |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)?;
    debug!("Saved {} entries to {}", items.len(), path.display());
    Ok(())
}

/// Serialize with the same indentation the documents have always used.
pub(crate) fn to_pretty_json<T: Serialize + ?Sized>(
    value: &T,
) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut ser)?;
    Ok(out)
}

/// In-memory store for tests and previews.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    library: Vec<LibraryEntry>,
    favorites: Vec<FavoriteEntry>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_library(mut self, library: Vec<LibraryEntry>) -> Self {
        self.library = library;
        self
    }

    pub fn with_favorites(mut self, favorites: Vec<FavoriteEntry>) -> Self {
        self.favorites = favorites;
        self
    }

    /// Make every save fail, to exercise write-error reporting.
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    fn check_writable(&self, name: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Io {
                path: PathBuf::from(name),
                source: std::io::Error::new(ErrorKind::PermissionDenied, "store is read-only"),
            });
        }
        Ok(())
    }
}

impl EntryStore for MemoryStore {
    fn load_library(&self) -> Vec<LibraryEntry> {
        self.library.clone()
    }

    fn save_library(&mut self, entries: &[LibraryEntry]) -> Result<(), StorageError> {
        self.check_writable(LIBRARY_FILE)?;
        self.library = entries.to_vec();
        Ok(())
    }

    fn load_favorites(&self) -> Vec<FavoriteEntry> {
        self.favorites.clone()
    }

    fn save_favorites(&mut self, entries: &[FavoriteEntry]) -> Result<(), StorageError> {
        self.check_writable(FAVORITES_FILE)?;
        self.favorites = entries.to_vec();
        Ok(())
    }
}
