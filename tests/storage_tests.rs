//! JSON persistence of the library, favorites and settings.

use std::fs;
use std::path::PathBuf;

use enlaut::model::constants::*;
use enlaut::model::{FavoriteEntry, LauncherSettings, LibraryEntry};
use enlaut::storage::{ConfigStore, EntryStore, JsonStore, StorageConfig};
use tempfile::tempdir;

fn sample_library() -> Vec<LibraryEntry> {
    vec![
        LibraryEntry::new("Quake", "C:/Games/Quake/quake.exe", Some(PathBuf::from("C:/Temp/q.ico"))),
        LibraryEntry::new("Doom", "C:/Games/Doom/doom.exe", None),
        LibraryEntry::new("Abe", "C:/Games/Abe/abe.exe", None),
    ]
}

// === Library / favorites ===

#[test]
fn library_round_trip_preserves_order() {
    let dir = tempdir().unwrap();
    let mut store = JsonStore::new(StorageConfig::in_dir(dir.path()));

    store.save_library(&sample_library()).unwrap();
    assert_eq!(store.load_library(), sample_library());
}

#[test]
fn favorites_are_stored_separately() {
    let dir = tempdir().unwrap();
    let mut store = JsonStore::new(StorageConfig::in_dir(dir.path()));
    let favs: Vec<FavoriteEntry> = sample_library().iter().take(1).map(FavoriteEntry::from).collect();

    store.save_favorites(&favs).unwrap();
    assert_eq!(store.load_favorites(), favs);
    assert!(store.load_library().is_empty());
    assert!(dir.path().join(FAVORITES_FILE).exists());
    assert!(!dir.path().join(LIBRARY_FILE).exists());
}

#[test]
fn missing_files_load_as_empty() {
    let dir = tempdir().unwrap();
    let store = JsonStore::new(StorageConfig::in_dir(dir.path()));
    assert!(store.load_library().is_empty());
    assert!(store.load_favorites().is_empty());
}

#[test]
fn invalid_json_loads_as_empty() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(LIBRARY_FILE), "{ not json").unwrap();
    fs::write(dir.path().join(FAVORITES_FILE), r#"{"name": "not an array"}"#).unwrap();
    let store = JsonStore::new(StorageConfig::in_dir(dir.path()));
    assert!(store.load_library().is_empty());
    assert!(store.load_favorites().is_empty());
}

#[test]
fn saved_document_is_pretty_printed_with_empty_icon() {
    let dir = tempdir().unwrap();
    let mut store = JsonStore::new(StorageConfig::in_dir(dir.path()));
    store
        .save_library(&[LibraryEntry::new("Doom", "C:/Games/Doom/doom.exe", None)])
        .unwrap();

    let text = fs::read_to_string(dir.path().join(LIBRARY_FILE)).unwrap();
    assert!(text.starts_with("[\n    {\n        \"name\": \"Doom\""));
    assert!(text.contains("\"icon\": \"\""));
}

#[test]
fn documents_written_by_hand_are_readable() {
    let dir = tempdir().unwrap();
    let doc = r#"[
    {
        "name": "Doom",
        "path": "C:/Games/Doom/doom.exe",
        "icon": "",
        "added": "2020-01-01"
    }
]"#;
    fs::write(dir.path().join(LIBRARY_FILE), doc).unwrap();
    let store = JsonStore::new(StorageConfig::in_dir(dir.path()));
    assert_eq!(
        store.load_library(),
        vec![LibraryEntry::new("Doom", "C:/Games/Doom/doom.exe", None)]
    );
}

#[test]
fn save_creates_missing_directory() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("Enlaut");
    let mut store = JsonStore::new(StorageConfig::in_dir(&nested));
    store.save_library(&sample_library()).unwrap();
    assert!(nested.join(LIBRARY_FILE).exists());
}

#[test]
fn save_overwrites_previous_document() {
    let dir = tempdir().unwrap();
    let mut store = JsonStore::new(StorageConfig::in_dir(dir.path()));
    store.save_library(&sample_library()).unwrap();
    store.save_library(&sample_library()[1..]).unwrap();
    assert_eq!(store.load_library(), sample_library()[1..].to_vec());
}

// === Settings ===

#[test]
fn config_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let mut config = ConfigStore::in_dir(dir.path());
    assert_eq!(config.load_settings(), LauncherSettings::default());
    assert!(!config.is_dirty());
}

#[test]
fn config_values_are_clamped_on_load() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE),
        r#"{ "window_width": 10, "window_height": 99999, "lang": 7 }"#,
    )
    .unwrap();

    let settings = ConfigStore::in_dir(dir.path()).load_settings();
    assert_eq!(settings.window_width, DEFAULT_MIN_WIDTH);
    assert_eq!(settings.window_height, MAX_WINDOW_HEIGHT);
    assert_eq!(settings.lang, LANG_EN);
    assert_eq!(settings.background_image, PathBuf::from(DEFAULT_BACKGROUND_IMAGE));
}

#[test]
fn config_flush_and_reload() {
    let dir = tempdir().unwrap();
    let mut config = ConfigStore::in_dir(dir.path());

    let mut settings = config.load_settings();
    settings.window_width = 1000;
    settings.lang = LANG_RU;
    config.save_settings(&settings);
    assert!(config.is_dirty());
    config.flush().unwrap();
    assert!(!config.is_dirty());

    let reloaded = ConfigStore::in_dir(dir.path()).load_settings();
    assert_eq!(reloaded.window_width, 1000);
    assert!(reloaded.is_russian());
}

#[test]
fn config_unchanged_settings_do_not_dirty() {
    let dir = tempdir().unwrap();
    let mut config = ConfigStore::in_dir(dir.path());
    let settings = config.load_settings();
    config.save_settings(&settings);
    assert!(!config.is_dirty());
    config.flush().unwrap();
    assert!(!dir.path().join(CONFIG_FILE).exists());
}
