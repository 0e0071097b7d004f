//! Favorite buttons in the title bar.
//!
//! One icon button per favorite, rebuilt whenever the favorites change, and
//! the fixed "+" button placed after them.

use std::cell::RefCell;
use std::path::PathBuf;

use log::debug;
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    DestroyWindow, GetWindowLongW, SendMessageW, SetWindowLongW, GWL_STYLE, IMAGE_ICON,
};

use super::controls::{self, BM_SETIMAGE, BS_ICON, ID_FAV_BASE};
use super::icon::IconHandle;
use crate::app::WindowLayout;
use crate::model::constants::ICON_SIZE;
use crate::model::FavoriteEntry;

struct FavoriteButton {
    hwnd: HWND,
    path: PathBuf,
    name: String,
    // Kept alive while the button shows it
    _icon: Option<IconHandle>,
}

thread_local! {
    static BUTTONS: RefCell<Vec<FavoriteButton>> = const { RefCell::new(Vec::new()) };
}

/// Destroy the current favorite buttons and create one per favorite.
pub fn rebuild(parent: HWND, add_button: HWND, favorites: &[FavoriteEntry], layout: &WindowLayout) {
    destroy_all();

    let hinstance: HINSTANCE = unsafe { GetModuleHandleW(None).unwrap_or_default().into() };
    let buttons: Vec<FavoriteButton> = favorites
        .iter()
        .enumerate()
        .map(|(slot, fav)| {
            let icon = fav
                .icon
                .as_deref()
                .and_then(|path| IconHandle::load_file(path, ICON_SIZE));
            let label = match icon {
                Some(_) => String::new(),
                None => fav.name.chars().next().map(String::from).unwrap_or_default(),
            };
            let hwnd = controls::create_button(parent, hinstance, &label, ID_FAV_BASE + slot as i32);
            if let Some(icon) = icon.as_ref() {
                unsafe {
                    let style = GetWindowLongW(hwnd, GWL_STYLE);
                    SetWindowLongW(hwnd, GWL_STYLE, style | BS_ICON as i32);
                    SendMessageW(
                        hwnd,
                        BM_SETIMAGE,
                        Some(WPARAM(IMAGE_ICON.0 as usize)),
                        Some(LPARAM(icon.raw().0 as isize)),
                    );
                }
            } else {
                controls::set_default_font(hwnd);
            }
            FavoriteButton {
                hwnd,
                path: fav.path.clone(),
                name: fav.name.clone(),
                _icon: icon,
            }
        })
        .collect();

    debug!("Favorites bar rebuilt with {} button(s)", buttons.len());
    BUTTONS.with(|b| *b.borrow_mut() = buttons);
    reposition(add_button, layout);
}

/// Place the favorite buttons and the "+" button in the favorites bar.
pub fn reposition(add_button: HWND, layout: &WindowLayout) {
    BUTTONS.with(|b| {
        let buttons = b.borrow();
        let (slots, add) = layout.favorite_slots(buttons.len());
        for (button, slot) in buttons.iter().zip(slots) {
            controls::move_to(button.hwnd, slot);
        }
        controls::move_to(add_button, add);
    });
}

/// Favorite behind a button control ID.
pub fn path_for_id(id: i32) -> Option<PathBuf> {
    let slot = usize::try_from(id - ID_FAV_BASE).ok()?;
    BUTTONS.with(|b| b.borrow().get(slot).map(|button| button.path.clone()))
}

/// Favorite `(name, path)` behind a button window.
pub fn favorite_for_hwnd(hwnd: HWND) -> Option<(String, PathBuf)> {
    BUTTONS.with(|b| {
        b.borrow()
            .iter()
            .find(|button| button.hwnd == hwnd)
            .map(|button| (button.name.clone(), button.path.clone()))
    })
}

/// Destroy every favorite button.
pub fn destroy_all() {
    let old = BUTTONS.with(|b| std::mem::take(&mut *b.borrow_mut()));
    for button in old {
        unsafe {
            let _ = DestroyWindow(button.hwnd);
        }
    }
}
