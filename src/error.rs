//! Error types shared by the storage, launcher and presentation layers.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to start a game executable.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to start {}: {message}", .path.display())]
    Spawn { path: PathBuf, message: String },
}

/// Failure to persist a collection or the settings file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors surfaced to the user by the launcher.
#[derive(Debug, Error)]
pub enum LauncherError {
    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("{} is already in the library", .0.display())]
    DuplicateEntry(PathBuf),

    #[error("{} is not in the library", .0.display())]
    UnknownEntry(PathBuf),
}

pub type LauncherResult<T> = Result<T, LauncherError>;
