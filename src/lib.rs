//! Enlaut: a borderless game launcher.
//!
//! Everything outside `platform` is free of Win32 FFI so tests run as normal
//! integration tests on any OS.

pub mod animation;
pub mod app;
pub mod error;
pub mod events;
pub mod handlers;
pub mod interaction;
pub mod model;
pub mod services;
pub mod storage;

#[cfg(target_os = "windows")]
pub mod platform;

use std::borrow::Cow;

pub use app::{GameDetails, LauncherApp, Notice, NoticeKind};
pub use error::{LaunchError, LauncherError, LauncherResult, StorageError};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use handlers::{dispatch, dispatch_events, Effect};
pub use model::{FavoriteEntry, LauncherSettings, LibraryEntry};

/// Clamp a value to [lo, hi]. `lo` wins if the bounds are crossed.
pub fn clamp_i32(v: i32, lo: i32, hi: i32) -> i32 {
    if v < lo {
        lo
    } else if v > hi {
        hi.max(lo)
    } else {
        v
    }
}

/// Very small localisation helper for UI strings (English / Russian).
pub fn tr_key(key: &str, ru: bool) -> Cow<'static, str> {
    match (key, ru) {
        // Panels
        ("My games", true) => Cow::Borrowed("Мои игры"),
        ("My games", false) => Cow::Borrowed("My games"),

        ("Game details", true) => Cow::Borrowed("Детали игры"),
        ("Game details", false) => Cow::Borrowed("Game details"),

        ("Game banner", true) => Cow::Borrowed("Баннер игры"),
        ("Game banner", false) => Cow::Borrowed("Game banner"),

        ("Select a game", true) => Cow::Borrowed("Выберите игру"),
        ("Select a game", false) => Cow::Borrowed("Select a game"),

        // Buttons
        ("Add game", true) => Cow::Borrowed("Добавить игру"),
        ("Add game", false) => Cow::Borrowed("Add game"),

        ("Play", true) => Cow::Borrowed("Играть"),
        ("Play", false) => Cow::Borrowed("Play"),

        ("Settings", true) => Cow::Borrowed("Настройки"),
        ("Settings", false) => Cow::Borrowed("Settings"),

        // Menus and dialogs
        ("Add to favorites", true) => Cow::Borrowed("Добавить в избранное"),
        ("Add to favorites", false) => Cow::Borrowed("Add to favorites"),

        ("Remove game", true) => Cow::Borrowed("Удалить игру"),
        ("Remove game", false) => Cow::Borrowed("Remove game"),

        ("Favorites", true) => Cow::Borrowed("Избранное"),
        ("Favorites", false) => Cow::Borrowed("Favorites"),

        ("Choose a game executable", true) => Cow::Borrowed("Выбери .exe игру"),
        ("Choose a game executable", false) => Cow::Borrowed("Choose a game executable"),

        ("Settings will be added in a future update.", true) => {
            Cow::Borrowed("Раздел настроек будет добавлен в будущих обновлениях.")
        }
        ("Settings will be added in a future update.", false) => {
            Cow::Borrowed("Settings will be added in a future update.")
        }

        // Errors
        ("Error", true) => Cow::Borrowed("Ошибка"),
        ("Error", false) => Cow::Borrowed("Error"),

        ("Launch error", true) => Cow::Borrowed("Ошибка запуска"),
        ("Launch error", false) => Cow::Borrowed("Launch error"),

        ("File not found", true) => Cow::Borrowed("Файл не найден"),
        ("File not found", false) => Cow::Borrowed("File not found"),

        ("Could not save changes", true) => Cow::Borrowed("Не удалось сохранить изменения"),
        ("Could not save changes", false) => Cow::Borrowed("Could not save changes"),

        ("Already in the library", true) => Cow::Borrowed("Игра уже в библиотеке"),
        ("Already in the library", false) => Cow::Borrowed("Already in the library"),

        ("Not in the library", true) => Cow::Borrowed("Игры нет в библиотеке"),
        ("Not in the library", false) => Cow::Borrowed("Not in the library"),

        _ => Cow::Owned(key.to_string()),
    }
}
