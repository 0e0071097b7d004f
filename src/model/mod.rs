//! Application domain model.
//!
//! This module contains pure data definitions (no FFI dependencies):
//! library and favorite records, launcher settings, screen geometry and
//! configuration constants.
//!
//! Persistence lives in `storage`.

pub mod app_state;
pub mod constants;
pub mod entry;
pub mod geometry;

pub use app_state::LauncherSettings;
pub use constants::*;
pub use entry::{display_name, FavoriteEntry, LibraryEntry};
pub use geometry::{Point, Rect, Size};
