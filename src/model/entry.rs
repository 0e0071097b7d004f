//! Library and favorite records as stored in the JSON documents.
//!
//! Both documents are arrays of `{ "name", "path", "icon" }` objects where
//! `icon` is an empty string when no icon was extracted. Unknown fields are
//! ignored when reading and are not written back.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A game in the library. Identity is `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryEntry {
    pub name: String,
    pub path: PathBuf,
    #[serde(default, with = "icon_field")]
    pub icon: Option<PathBuf>,
}

impl LibraryEntry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, icon: Option<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            icon,
        }
    }

    /// Entry named after the executable's file stem.
    pub fn from_executable(path: &Path, icon: Option<PathBuf>) -> Self {
        Self::new(display_name(path), path, icon)
    }
}

/// A favorite: a snapshot of a library entry taken when it was starred.
///
/// Favorites are not updated when the library entry changes or is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub name: String,
    pub path: PathBuf,
    #[serde(default, with = "icon_field")]
    pub icon: Option<PathBuf>,
}

impl From<&LibraryEntry> for FavoriteEntry {
    fn from(entry: &LibraryEntry) -> Self {
        Self {
            name: entry.name.clone(),
            path: entry.path.clone(),
            icon: entry.icon.clone(),
        }
    }
}

/// File stem of an executable, falling back to the full file name.
pub fn display_name(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// `icon` is persisted as a string; the empty string means "no icon".
mod icon_field {
    use std::path::PathBuf;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(icon: &Option<PathBuf>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match icon {
            Some(path) => match path.to_str() {
                Some(s) => serializer.serialize_str(s),
                None => Err(serde::ser::Error::custom("icon path is not valid UTF-8")),
            },
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<PathBuf>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.filter(|s| !s.is_empty()).map(PathBuf::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_icon_string_reads_as_none() {
        let json = r#"{"name":"Doom","path":"C:/Games/doom.exe","icon":""}"#;
        let entry: LibraryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.icon, None);
    }

    #[test]
    fn missing_icon_reads_as_none() {
        let json = r#"{"name":"Doom","path":"C:/Games/doom.exe"}"#;
        let entry: LibraryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.icon, None);
    }

    #[test]
    fn none_icon_writes_empty_string() {
        let entry = LibraryEntry::new("Doom", "C:/Games/doom.exe", None);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["icon"], "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{"name":"Doom","path":"/g/doom","icon":"/i/doom.ico","playtime":12}"#;
        let entry: LibraryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.icon, Some(PathBuf::from("/i/doom.ico")));
    }

    #[test]
    fn display_name_strips_extension() {
        assert_eq!(display_name(Path::new("/games/Half-Life/hl.exe")), "hl");
        assert_eq!(display_name(Path::new("/games/quake")), "quake");
    }

    #[test]
    fn favorite_copies_library_fields() {
        let entry = LibraryEntry::new("Doom", "/g/doom.exe", Some("/i/doom.ico".into()));
        let fav = FavoriteEntry::from(&entry);
        assert_eq!(fav.name, entry.name);
        assert_eq!(fav.path, entry.path);
        assert_eq!(fav.icon, entry.icon);
    }
}
