//! Executable icon extraction through the shell.
//!
//! `ExtractIconExW` yields an `HICON`; its colour bitmap is read back as
//! 32-bit BGRA and saved to the icon cache as an `.ico` file.

use std::ffi::c_void;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;
use windows::core::PCWSTR;
use windows::Win32::Graphics::Gdi::{
    DeleteObject, GetDC, GetDIBits, GetObjectW, ReleaseDC, BITMAP, BITMAPINFO, BITMAPINFOHEADER,
    BI_RGB, DIB_RGB_COLORS, HBITMAP,
};
use windows::Win32::UI::Shell::ExtractIconExW;
use windows::Win32::UI::WindowsAndMessaging::{GetIconInfo, HICON, ICONINFO};

use crate::platform::windows::ui::icon::IconHandle;
use crate::platform::windows::wide_path;
use crate::services::{icon_image, save_icon, IconCache, IconService};

#[derive(Debug, Error)]
enum ExtractError {
    #[error("executable has no icon")]
    NoIcon,

    #[error("icon bitmap could not be read")]
    Bitmap,

    #[error("unsupported icon size {0}x{1}")]
    Size(u32, u32),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Extracts the first large icon of an executable into an [`IconCache`].
#[derive(Debug, Clone, Default)]
pub struct ShellIconExtractor {
    cache: IconCache,
}

impl IconService for ShellIconExtractor {
    fn extract_icon(&self, exe: &Path) -> Option<PathBuf> {
        let target = self.cache.icon_path(exe);
        match extract_to_file(exe, &target) {
            Ok(()) => {
                debug!("Extracted icon to {}", target.display());
                Some(target)
            }
            Err(e) => {
                warn!("Icon extraction failed for {}: {}", exe.display(), e);
                None
            }
        }
    }
}

fn extract_to_file(exe: &Path, target: &Path) -> Result<(), ExtractError> {
    let file = wide_path(exe);
    let mut large = HICON::default();
    let count = unsafe {
        ExtractIconExW(
            PCWSTR(file.as_ptr()),
            0,
            Some(&mut large as *mut HICON),
            None,
            1,
        )
    };
    if count == 0 {
        return Err(ExtractError::NoIcon);
    }
    let icon = IconHandle::from_raw(large).ok_or(ExtractError::NoIcon)?;

    let (width, height, pixels) = unsafe { icon_pixels(icon.raw()) }.ok_or(ExtractError::Bitmap)?;
    let image = icon_image(width, height, &pixels).ok_or(ExtractError::Size(width, height))?;
    save_icon(&image, target)?;
    Ok(())
}

/// A GDI bitmap deleted on drop.
struct BitmapHandle(HBITMAP);

impl Drop for BitmapHandle {
    fn drop(&mut self) {
        if !self.0.is_invalid() {
            unsafe {
                let _ = DeleteObject(self.0.into());
            }
        }
    }
}

/// Read the colour bitmap of `icon` as top-down BGRA.
unsafe fn icon_pixels(icon: HICON) -> Option<(u32, u32, Vec<u8>)> {
    let mut info = ICONINFO::default();
    GetIconInfo(icon, &mut info).ok()?;
    let _mask = BitmapHandle(info.hbmMask);
    let color = BitmapHandle(info.hbmColor);

    // Monochrome icons have no colour bitmap
    if color.0.is_invalid() {
        return None;
    }

    let mut bitmap = BITMAP::default();
    let written = GetObjectW(
        color.0.into(),
        std::mem::size_of::<BITMAP>() as i32,
        Some(&mut bitmap as *mut BITMAP as *mut c_void),
    );
    if written == 0 || bitmap.bmWidth <= 0 || bitmap.bmHeight <= 0 {
        return None;
    }
    let (width, height) = (bitmap.bmWidth, bitmap.bmHeight);

    let mut bmi = BITMAPINFO {
        bmiHeader: BITMAPINFOHEADER {
            biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
            biWidth: width,
            biHeight: -height, // Top-down
            biPlanes: 1,
            biBitCount: 32,
            biCompression: BI_RGB.0,
            ..Default::default()
        },
        ..Default::default()
    };

    let mut pixels = vec![0u8; width as usize * height as usize * 4];
    let dc = GetDC(None);
    let lines = GetDIBits(
        dc,
        color.0,
        0,
        height as u32,
        Some(pixels.as_mut_ptr() as *mut c_void),
        &mut bmi,
        DIB_RGB_COLORS,
    );
    ReleaseDC(None, dc);

    if lines == 0 {
        return None;
    }
    Some((width as u32, height as u32, pixels))
}
