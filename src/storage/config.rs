//! JSON settings file.
//!
//! Stores settings in `%APPDATA%/Enlaut/config.json` next to the library and
//! favorites documents.
//!
//! Uses an in-memory cache so repeated reads do not touch the disk.
//! Call [`ConfigStore::flush`] to persist changes.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use super::store::to_pretty_json;
use crate::error::StorageError;
use crate::model::constants::*;
use crate::model::LauncherSettings;

/// Serializable config structure for JSON persistence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
struct Config {
    background_image: PathBuf,
    window_width: i32,
    window_height: i32,
    min_width: i32,
    min_height: i32,
    lang: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self::from(&LauncherSettings::default())
    }
}

impl From<&LauncherSettings> for Config {
    fn from(s: &LauncherSettings) -> Self {
        Self {
            background_image: s.background_image.clone(),
            window_width: s.window_width,
            window_height: s.window_height,
            min_width: s.min_width,
            min_height: s.min_height,
            lang: s.lang,
        }
    }
}

impl From<Config> for LauncherSettings {
    fn from(c: Config) -> Self {
        Self {
            background_image: c.background_image,
            window_width: c.window_width,
            window_height: c.window_height,
            min_width: c.min_width,
            min_height: c.min_height,
            lang: c.lang,
        }
    }
}

/// Directory holding all documents: `%APPDATA%/Enlaut`, or the current
/// directory when `APPDATA` is not set.
pub fn data_dir() -> PathBuf {
    match std::env::var_os("APPDATA") {
        Some(appdata) => PathBuf::from(appdata).join(APP_DIR_NAME),
        None => PathBuf::from("."),
    }
}

/// Cached access to `config.json`.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    cache: Option<Config>,
    dirty: bool,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: None,
            dirty: false,
        }
    }

    /// Store for `config.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults, then validate.
    pub fn load_settings(&mut self) -> LauncherSettings {
        let mut settings = LauncherSettings::from(self.cached().clone());
        settings.validate();
        settings
    }

    /// Update the cached settings. Written to disk on [`flush`](Self::flush).
    pub fn save_settings(&mut self, settings: &LauncherSettings) {
        let config = Config::from(settings);
        if self.cache.as_ref() != Some(&config) {
            self.cache = Some(config);
            self.dirty = true;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the cache to disk if it changed since the last flush.
    pub fn flush(&mut self) -> Result<(), StorageError> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(config) = &self.cache {
            save_config_to_disk(&self.path, config)?;
        }
        self.dirty = false;
        Ok(())
    }

    fn cached(&mut self) -> &Config {
        let path = &self.path;
        self.cache.get_or_insert_with(|| load_config_from_disk(path))
    }
}

/// Load config from JSON file, returning defaults if not found or invalid.
fn load_config_from_disk(path: &Path) -> Config {
    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!("Invalid config at {}: {}; using defaults", path.display(), e);
            Config::default()
        }),
        Err(_) => Config::default(),
    }
}

/// Save config to JSON file.
fn save_config_to_disk(path: &Path, config: &Config) -> Result<(), StorageError> {
    let io_err = |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = to_pretty_json(config).map_err(|source| StorageError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.window_width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(config.lang, LANG_EN);
    }

    #[test]
    fn partial_config_fills_missing_fields() {
        let config: Config = serde_json::from_str(r#"{"lang": 1}"#).unwrap();
        assert_eq!(config.lang, LANG_RU);
        assert_eq!(config.window_height, DEFAULT_WINDOW_HEIGHT);
    }

    #[test]
    fn config_serialization_roundtrip() {
        let config = Config {
            background_image: PathBuf::from("bg.png"),
            window_width: 1024,
            window_height: 768,
            min_width: 500,
            min_height: 300,
            lang: LANG_RU,
        };
        let json = serde_json::to_string(&config).unwrap();
        let loaded: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn unchanged_settings_do_not_mark_dirty() {
        let mut store = ConfigStore::new("/nonexistent/enlaut/config.json");
        let settings = store.load_settings();
        store.save_settings(&settings);
        assert!(!store.is_dirty());
    }
}
