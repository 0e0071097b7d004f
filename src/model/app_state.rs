//! Launcher settings (pure Rust, no FFI).
//!
//! This module defines the settings structure that is serialized to
//! `config.json` by `storage::config`.

use std::path::PathBuf;

use super::constants::*;
use super::geometry::Size;
use crate::clamp_i32;

/// User-facing settings, validated after every load.
#[derive(Debug, Clone, PartialEq)]
pub struct LauncherSettings {
    /// Image rotated behind the panels.
    pub background_image: PathBuf,
    /// Initial window width in pixels.
    pub window_width: i32,
    /// Initial window height in pixels.
    pub window_height: i32,
    /// Smallest width reachable by edge resizing.
    pub min_width: i32,
    /// Smallest height reachable by edge resizing.
    pub min_height: i32,
    /// Language: 0 = EN, 1 = RU.
    pub lang: i32,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            background_image: PathBuf::from(DEFAULT_BACKGROUND_IMAGE),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            lang: LANG_EN,
        }
    }
}

impl LauncherSettings {
    /// Validates and clamps all values to valid ranges.
    pub fn validate(&mut self) {
        self.min_width = clamp_i32(self.min_width, MIN_WINDOW_WIDTH, MAX_WINDOW_WIDTH);
        self.min_height = clamp_i32(self.min_height, MIN_WINDOW_HEIGHT, MAX_WINDOW_HEIGHT);
        self.window_width = clamp_i32(self.window_width, self.min_width, MAX_WINDOW_WIDTH);
        self.window_height = clamp_i32(self.window_height, self.min_height, MAX_WINDOW_HEIGHT);
        if self.lang != LANG_RU {
            self.lang = LANG_EN;
        }
    }

    pub fn window_size(&self) -> Size {
        Size::new(self.window_width, self.window_height)
    }

    pub fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    /// Returns true if current language is Russian.
    pub fn is_russian(&self) -> bool {
        self.lang == LANG_RU
    }
}
