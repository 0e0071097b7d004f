//! Configuration constants and default values.
//!
//! This module contains all application constants including window
//! interaction metrics, animation timing, file names and validation limits.

// === Window Interaction ===

/// Width of the invisible resize zone along every window edge, in pixels.
pub const BORDER_WIDTH: i32 = 6;

/// Height of the strip at the top of the window that starts a drag.
pub const DRAG_STRIP_HEIGHT: i32 = 50;

// === Window Defaults ===

/// Default window width in pixels.
pub const DEFAULT_WINDOW_WIDTH: i32 = 1280;

/// Default window height in pixels.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 720;

/// Default minimum window width while resizing.
pub const DEFAULT_MIN_WIDTH: i32 = 640;

/// Default minimum window height while resizing.
pub const DEFAULT_MIN_HEIGHT: i32 = 360;

/// Window title.
pub const WINDOW_TITLE: &str = "ENLAUT";

// === Animation ===

/// Background rotation tick period in milliseconds (fixed interval).
pub const ANIMATION_TICK_MS: u32 = 30;

/// Degrees subtracted from the background angle on every tick.
pub const ANGLE_STEP: u16 = 1;

/// Full turn in degrees.
pub const FULL_TURN: u16 = 360;

/// Default background image, relative to the working directory.
pub const DEFAULT_BACKGROUND_IMAGE: &str = "assets/1.png";

/// Fallback background color (R, G, B) used when no image is available.
pub const FALLBACK_BACKGROUND: (u8, u8, u8) = (0, 0, 0);

// === Persistence ===

/// File name of the game library document.
pub const LIBRARY_FILE: &str = "games.json";

/// File name of the favorites document.
pub const FAVORITES_FILE: &str = "favorites.json";

/// File name of the settings document.
pub const CONFIG_FILE: &str = "config.json";

/// Directory name under `%APPDATA%` holding all documents.
pub const APP_DIR_NAME: &str = "Enlaut";

// === Icons ===

/// Sub-directory of the process temp directory for extracted icons.
pub const ICON_NAMESPACE: &str = "enlaut_icons";

/// Extension of extracted icon files.
pub const ICON_EXTENSION: &str = "ico";

/// Icon size in list rows and favorite buttons.
pub const ICON_SIZE: i32 = 32;

// === Validation Limits ===

/// Smallest accepted window width in the config file.
pub const MIN_WINDOW_WIDTH: i32 = 320;

/// Largest accepted window width in the config file.
pub const MAX_WINDOW_WIDTH: i32 = 7680;

/// Smallest accepted window height in the config file.
pub const MIN_WINDOW_HEIGHT: i32 = 240;

/// Largest accepted window height in the config file.
pub const MAX_WINDOW_HEIGHT: i32 = 4320;

// === Languages ===

/// Language code for English.
pub const LANG_EN: i32 = 0;

/// Language code for Russian.
pub const LANG_RU: i32 = 1;
