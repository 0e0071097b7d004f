//! View models handed to the host for rendering.

use std::path::PathBuf;

use crate::error::{LaunchError, LauncherError};
use crate::model::LibraryEntry;
use crate::tr_key;

/// Contents of the details panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDetails {
    pub name: String,
    pub path: String,
    pub icon: Option<PathBuf>,
    pub play_enabled: bool,
}

impl GameDetails {
    /// Placeholder shown while nothing is selected.
    pub fn empty(ru: bool) -> Self {
        Self {
            name: tr_key("Select a game", ru).into_owned(),
            path: String::new(),
            icon: None,
            play_enabled: false,
        }
    }

    pub fn for_entry(entry: &LibraryEntry) -> Self {
        Self {
            name: entry.name.clone(),
            path: entry.path.display().to_string(),
            icon: entry.icon.clone(),
            play_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A message the host shows in a blocking modal box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: NoticeKind::Info,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }

    /// Response to the settings button.
    pub fn settings_placeholder(ru: bool) -> Self {
        Self::info(
            tr_key("Settings", ru),
            tr_key("Settings will be added in a future update.", ru),
        )
    }

    /// Localized notice for a failed operation.
    pub fn from_error(err: &LauncherError, ru: bool) -> Self {
        match err {
            LauncherError::Launch(LaunchError::NotFound(path)) => Self::error(
                tr_key("Error", ru),
                format!("{}:\n{}", tr_key("File not found", ru), path.display()),
            ),
            LauncherError::Launch(LaunchError::Spawn { message, .. }) => {
                Self::error(tr_key("Launch error", ru), message.clone())
            }
            LauncherError::Storage(e) => Self::error(
                tr_key("Error", ru),
                format!("{}:\n{}", tr_key("Could not save changes", ru), e),
            ),
            LauncherError::DuplicateEntry(path) => Self::info(
                tr_key("Add game", ru),
                format!("{}:\n{}", tr_key("Already in the library", ru), path.display()),
            ),
            LauncherError::UnknownEntry(path) => Self::error(
                tr_key("Error", ru),
                format!("{}:\n{}", tr_key("Not in the library", ru), path.display()),
            ),
        }
    }
}

/// Prompt shown before removing a favorite.
pub fn remove_favorite_prompt(name: &str, ru: bool) -> String {
    if ru {
        format!("Удалить '{}' из избранного?", name)
    } else {
        format!("Remove '{}' from favorites?", name)
    }
}
