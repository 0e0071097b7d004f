//! Owned icon handles.

use std::path::Path;

use windows::core::PCWSTR;
use windows::Win32::UI::WindowsAndMessaging::{
    DestroyIcon, LoadImageW, HICON, IMAGE_ICON, LR_LOADFROMFILE,
};

use crate::platform::windows::wide_path;

/// An `HICON` destroyed on drop.
#[derive(Debug)]
pub struct IconHandle(HICON);

impl IconHandle {
    /// Take ownership of `icon`. Returns `None` for a null handle.
    pub fn from_raw(icon: HICON) -> Option<Self> {
        if icon.is_invalid() {
            None
        } else {
            Some(Self(icon))
        }
    }

    /// Load an `.ico` file scaled to `size`.
    pub fn load_file(path: &Path, size: i32) -> Option<Self> {
        if !path.is_file() {
            return None;
        }
        let wide = wide_path(path);
        let handle = unsafe {
            LoadImageW(
                None,
                PCWSTR(wide.as_ptr()),
                IMAGE_ICON,
                size,
                size,
                LR_LOADFROMFILE,
            )
        };
        match handle {
            Ok(h) => Self::from_raw(HICON(h.0)),
            Err(e) => {
                log::debug!("Failed to load icon {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn raw(&self) -> HICON {
        self.0
    }
}

impl Drop for IconHandle {
    fn drop(&mut self) {
        unsafe {
            let _ = DestroyIcon(self.0);
        }
    }
}
