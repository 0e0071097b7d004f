//! The launcher's application core: library, favorites and selection.
//!
//! Every mutation builds the new collection, persists it, and only then
//! replaces the in-memory copy. A failed save leaves the previous state
//! visible and is returned to the caller.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::view::GameDetails;
use crate::error::{LauncherError, LauncherResult};
use crate::model::{FavoriteEntry, LibraryEntry};
use crate::services::{GameLauncher, IconService};
use crate::storage::EntryStore;

pub struct LauncherApp<S, I, L> {
    store: S,
    icons: I,
    launcher: L,
    library: Vec<LibraryEntry>,
    favorites: Vec<FavoriteEntry>,
    selected: Option<PathBuf>,
    ru: bool,
}

impl<S, I, L> LauncherApp<S, I, L>
where
    S: EntryStore,
    I: IconService,
    L: GameLauncher,
{
    /// Load both collections from `store`.
    pub fn new(store: S, icons: I, launcher: L) -> Self {
        let library = store.load_library();
        let favorites = store.load_favorites();
        info!(
            "Loaded {} games and {} favorites",
            library.len(),
            favorites.len()
        );
        Self {
            store,
            icons,
            launcher,
            library,
            favorites,
            selected: None,
            ru: false,
        }
    }

    pub fn with_russian(mut self, ru: bool) -> Self {
        self.ru = ru;
        self
    }

    pub fn is_russian(&self) -> bool {
        self.ru
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add an executable to the library.
    ///
    /// The display name is the file stem; the icon comes from the icon
    /// service and is left empty when extraction fails.
    pub fn add_game(&mut self, path: &Path) -> LauncherResult<&LibraryEntry> {
        if self.find_game(path).is_some() {
            return Err(LauncherError::DuplicateEntry(path.to_path_buf()));
        }

        let icon = self.icons.extract_icon(path);
        if icon.is_none() {
            debug!("No icon for {}", path.display());
        }
        let entry = LibraryEntry::from_executable(path, icon);

        let mut library = self.library.clone();
        library.push(entry);
        self.store.save_library(&library)?;
        self.library = library;

        info!("Added {}", path.display());
        let index = self.library.len() - 1;
        Ok(&self.library[index])
    }

    /// Remove a game. Favorites are left as they are.
    pub fn remove_game(&mut self, path: &Path) -> LauncherResult<()> {
        if self.find_game(path).is_none() {
            return Err(LauncherError::UnknownEntry(path.to_path_buf()));
        }

        let library: Vec<LibraryEntry> = self
            .library
            .iter()
            .filter(|g| g.path != path)
            .cloned()
            .collect();
        self.store.save_library(&library)?;
        self.library = library;

        if self.selected.as_deref() == Some(path) {
            self.selected = None;
        }
        info!("Removed {}", path.display());
        Ok(())
    }

    pub fn select_game(&mut self, path: &Path) -> LauncherResult<()> {
        if self.find_game(path).is_none() {
            return Err(LauncherError::UnknownEntry(path.to_path_buf()));
        }
        self.selected = Some(path.to_path_buf());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    /// Launch the selected game. Returns `false` when nothing is selected.
    pub fn play_selected(&self) -> LauncherResult<bool> {
        match &self.selected {
            Some(path) => {
                self.launch_path(path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn launch_path(&self, path: &Path) -> LauncherResult<()> {
        self.launcher.launch(path).map_err(|e| {
            warn!("{}", e);
            LauncherError::from(e)
        })
    }

    /// Snapshot a library entry into the favorites bar.
    ///
    /// Returns `false` when the path is already a favorite.
    pub fn add_to_favorites(&mut self, path: &Path) -> LauncherResult<bool> {
        let Some(game) = self.find_game(path) else {
            return Err(LauncherError::UnknownEntry(path.to_path_buf()));
        };
        if self.favorites.iter().any(|f| f.path == path) {
            return Ok(false);
        }

        let mut favorites = self.favorites.clone();
        favorites.push(FavoriteEntry::from(game));
        self.store.save_favorites(&favorites)?;
        self.favorites = favorites;

        info!("Favorited {}", path.display());
        Ok(true)
    }

    /// Returns `false` when the path was not a favorite.
    pub fn remove_favorite(&mut self, path: &Path) -> LauncherResult<bool> {
        if !self.favorites.iter().any(|f| f.path == path) {
            return Ok(false);
        }

        let favorites: Vec<FavoriteEntry> = self
            .favorites
            .iter()
            .filter(|f| f.path != path)
            .cloned()
            .collect();
        self.store.save_favorites(&favorites)?;
        self.favorites = favorites;

        info!("Unfavorited {}", path.display());
        Ok(true)
    }

    pub fn library_rows(&self) -> &[LibraryEntry] {
        &self.library
    }

    pub fn favorites(&self) -> &[FavoriteEntry] {
        &self.favorites
    }

    pub fn details(&self) -> GameDetails {
        self.selected
            .as_deref()
            .and_then(|path| self.find_game(path))
            .map(GameDetails::for_entry)
            .unwrap_or_else(|| GameDetails::empty(self.ru))
    }

    fn find_game(&self, path: &Path) -> Option<&LibraryEntry> {
        self.library.iter().find(|g| g.path == path)
    }
}
