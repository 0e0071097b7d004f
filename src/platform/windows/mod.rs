//! Windows host using Win32 controls and Direct2D.
//!
//! This module contains all Windows-specific code:
//! - Runtime state shared by the window procedure
//! - Services (shell icon extraction)
//! - UI components (background renderer, child controls, dialogs)

pub mod app;
pub mod services;
pub mod ui;

/// Null-terminated UTF-16 copy of `s`.
pub fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Null-terminated UTF-16 copy of a path.
pub fn wide_path(path: &std::path::Path) -> Vec<u16> {
    use std::os::windows::ffi::OsStrExt;
    path.as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect()
}
