//! Application events for host-to-core communication.
//!
//! Every user action the window can produce, with its payload spelled out.
//! This module is pure Rust with no FFI dependencies.

use std::path::PathBuf;

/// User actions, published by the host and handled by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === Library ===
    /// "Add game" button pressed; the host should show a file picker
    AddGameRequested,

    /// The file picker returned an executable
    GameChosen { path: PathBuf },

    /// A library row was selected
    GameSelected { path: PathBuf },

    /// A library row was double-clicked or a favorite was clicked
    LaunchRequested { path: PathBuf },

    /// Play button pressed
    PlaySelected,

    /// "Remove game" chosen from the row menu
    RemoveGameRequested { path: PathBuf },

    // === Favorites ===
    AddFavoriteRequested { path: PathBuf },

    /// Removal was already confirmed by the user
    RemoveFavoriteRequested { path: PathBuf },

    // === Title bar ===
    ShowSettings,
    Minimize,
    CloseRequested,
}

impl AppEvent {
    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::AddGameRequested => "Add game requested",
            AppEvent::GameChosen { .. } => "Executable chosen",
            AppEvent::GameSelected { .. } => "Game selected",
            AppEvent::LaunchRequested { .. } => "Launch requested",
            AppEvent::PlaySelected => "Play selected game",
            AppEvent::RemoveGameRequested { .. } => "Remove game",
            AppEvent::AddFavoriteRequested { .. } => "Add favorite",
            AppEvent::RemoveFavoriteRequested { .. } => "Remove favorite",
            AppEvent::ShowSettings => "Show settings",
            AppEvent::Minimize => "Minimize window",
            AppEvent::CloseRequested => "Close window",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_not_empty() {
        let events = [
            AppEvent::AddGameRequested,
            AppEvent::PlaySelected,
            AppEvent::ShowSettings,
            AppEvent::Minimize,
            AppEvent::CloseRequested,
        ];
        for event in &events {
            assert!(!event.description().is_empty());
        }
    }
}
