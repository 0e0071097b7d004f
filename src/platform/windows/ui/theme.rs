//! Colours shared by the renderer and the GDI-drawn controls.

use std::cell::RefCell;

use windows::Win32::Foundation::COLORREF;
use windows::Win32::Graphics::Direct2D::Common::D2D1_COLOR_F;
use windows::Win32::Graphics::Gdi::{CreateSolidBrush, DeleteObject, HBRUSH};

/// An sRGB colour with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub fn d2d(self) -> D2D1_COLOR_F {
        D2D1_COLOR_F {
            r: f32::from(self.0) / 255.0,
            g: f32::from(self.1) / 255.0,
            b: f32::from(self.2) / 255.0,
            a: f32::from(self.3) / 255.0,
        }
    }

    /// GDI colour; alpha is dropped.
    pub fn colorref(self) -> COLORREF {
        COLORREF(u32::from(self.0) | (u32::from(self.1) << 8) | (u32::from(self.2) << 16))
    }
}

pub const WINDOW_TINT: Rgba = Rgba(18, 18, 18, 150);
pub const PANEL: Rgba = Rgba(26, 26, 26, 200);
pub const BANNER: Rgba = Rgba(18, 18, 18, 220);
pub const SPLITTER: Rgba = Rgba(42, 42, 42, 200);
pub const TITLE_TEXT: Rgba = Rgba(255, 255, 255, 255);
pub const HEADER_TEXT: Rgba = Rgba(176, 176, 176, 255);
pub const BANNER_TEXT: Rgba = Rgba(112, 112, 112, 255);
pub const PATH_TEXT: Rgba = Rgba(160, 160, 160, 255);

pub const LIST_BACKGROUND: Rgba = Rgba(26, 26, 26, 255);
pub const LIST_SELECTED: Rgba = Rgba(42, 42, 42, 255);
pub const LIST_SEPARATOR: Rgba = Rgba(42, 42, 42, 255);
pub const LIST_TEXT: Rgba = Rgba(224, 224, 224, 255);
pub const LIST_SELECTED_TEXT: Rgba = Rgba(255, 255, 255, 255);

/// Lazily created solid GDI brushes, deleted by [`release_brushes`].
struct Brushes {
    list: HBRUSH,
    selected: HBRUSH,
    separator: HBRUSH,
}

thread_local! {
    static BRUSHES: RefCell<Option<Brushes>> = const { RefCell::new(None) };
}

fn with_brushes<T>(f: impl FnOnce(&Brushes) -> T) -> T {
    BRUSHES.with(|b| {
        let mut slot = b.borrow_mut();
        let brushes = slot.get_or_insert_with(|| unsafe {
            Brushes {
                list: CreateSolidBrush(LIST_BACKGROUND.colorref()),
                selected: CreateSolidBrush(LIST_SELECTED.colorref()),
                separator: CreateSolidBrush(LIST_SEPARATOR.colorref()),
            }
        });
        f(brushes)
    })
}

pub fn list_brush() -> HBRUSH {
    with_brushes(|b| b.list)
}

pub fn selected_brush() -> HBRUSH {
    with_brushes(|b| b.selected)
}

pub fn separator_brush() -> HBRUSH {
    with_brushes(|b| b.separator)
}

pub fn release_brushes() {
    if let Some(brushes) = BRUSHES.with(|b| b.borrow_mut().take()) {
        unsafe {
            let _ = DeleteObject(brushes.list.into());
            let _ = DeleteObject(brushes.selected.into());
            let _ = DeleteObject(brushes.separator.into());
        }
    }
}
