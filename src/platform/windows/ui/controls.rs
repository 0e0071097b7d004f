//! Child controls of the main window.

use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, WPARAM};
use windows::Win32::Graphics::Gdi::{GetStockObject, DEFAULT_GUI_FONT};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Input::KeyboardAndMouse::EnableWindow;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, MoveWindow, SendMessageW, HMENU, WINDOW_EX_STYLE, WINDOW_STYLE, WM_SETFONT,
    WS_CHILD, WS_TABSTOP, WS_VISIBLE, WS_VSCROLL,
};

use crate::app::WindowLayout;
use crate::model::Rect;
use crate::platform::windows::wide;
use crate::tr_key;

// Control IDs
pub const ID_LIST: i32 = 200;
pub const ID_ADD_GAME: i32 = 201;
pub const ID_PLAY: i32 = 202;
pub const ID_SETTINGS: i32 = 203;
pub const ID_MINIMIZE: i32 = 204;
pub const ID_CLOSE: i32 = 205;
pub const ID_FAV_ADD: i32 = 206;
/// First ID handed to favorite buttons; one per slot.
pub const ID_FAV_BASE: i32 = 300;

// Context menu commands
pub const MENU_ADD_FAVORITE: i32 = 1001;
pub const MENU_REMOVE_GAME: i32 = 1002;

// ListBox styles and messages (from winuser.h)
const LBS_NOTIFY: u32 = 0x0001;
const LBS_OWNERDRAWFIXED: u32 = 0x0010;
const LBS_HASSTRINGS: u32 = 0x0040;
const LBS_NOINTEGRALHEIGHT: u32 = 0x0100;
pub const LB_ADDSTRING: u32 = 0x0180;
pub const LB_RESETCONTENT: u32 = 0x0184;
pub const LB_SETCURSEL: u32 = 0x0186;
pub const LB_GETCURSEL: u32 = 0x0188;
pub const LB_ITEMFROMPOINT: u32 = 0x01A9;
pub const LBN_SELCHANGE: u32 = 1;
pub const LBN_DBLCLK: u32 = 2;

// Button styles and messages
pub const BN_CLICKED: u32 = 0;
pub const BS_ICON: u32 = 0x0040;
pub const BM_SETIMAGE: u32 = 0x00F7;

/// Handles of the fixed child controls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Controls {
    pub list: HWND,
    pub add_game: HWND,
    pub play: HWND,
    pub settings: HWND,
    pub minimize: HWND,
    pub close: HWND,
    pub fav_add: HWND,
}

/// Create every fixed control; positions are set later by [`place`].
pub fn create_controls(parent: HWND, ru: bool) -> Controls {
    unsafe {
        let hinstance: HINSTANCE = GetModuleHandleW(None).unwrap_or_default().into();

        let list = CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            w!("LISTBOX"),
            None,
            WS_CHILD
                | WS_VISIBLE
                | WS_VSCROLL
                | WS_TABSTOP
                | WINDOW_STYLE(
                    LBS_NOTIFY | LBS_OWNERDRAWFIXED | LBS_HASSTRINGS | LBS_NOINTEGRALHEIGHT,
                ),
            0,
            0,
            0,
            0,
            Some(parent),
            Some(HMENU(ID_LIST as *mut _)),
            Some(hinstance),
            None,
        )
        .unwrap_or_default();

        let controls = Controls {
            list,
            add_game: create_button(parent, hinstance, &format!("+  {}", tr_key("Add game", ru)), ID_ADD_GAME),
            play: create_button(parent, hinstance, &format!("\u{25B6}  {}", tr_key("Play", ru)), ID_PLAY),
            settings: create_button(parent, hinstance, "\u{2699}", ID_SETTINGS),
            minimize: create_button(parent, hinstance, "\u{2013}", ID_MINIMIZE),
            close: create_button(parent, hinstance, "\u{2715}", ID_CLOSE),
            fav_add: create_button(parent, hinstance, "+", ID_FAV_ADD),
        };

        for hwnd in [
            controls.list,
            controls.add_game,
            controls.play,
            controls.settings,
            controls.minimize,
            controls.close,
            controls.fav_add,
        ] {
            set_default_font(hwnd);
        }
        set_enabled(controls.play, false);
        controls
    }
}

/// Create a push button with `label` and control `id`.
pub fn create_button(parent: HWND, hinstance: HINSTANCE, label: &str, id: i32) -> HWND {
    let text = wide(label);
    unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            w!("BUTTON"),
            PCWSTR(text.as_ptr()),
            WS_CHILD | WS_VISIBLE | WS_TABSTOP,
            0,
            0,
            0,
            0,
            Some(parent),
            Some(HMENU(id as *mut _)),
            Some(hinstance),
            None,
        )
        .unwrap_or_default()
    }
}

pub fn set_default_font(hwnd: HWND) {
    unsafe {
        let font = GetStockObject(DEFAULT_GUI_FONT);
        SendMessageW(
            hwnd,
            WM_SETFONT,
            Some(WPARAM(font.0 as usize)),
            Some(LPARAM(1)),
        );
    }
}

pub fn set_enabled(hwnd: HWND, enabled: bool) {
    unsafe {
        let _ = EnableWindow(hwnd, enabled);
    }
}

/// Move a child window to `rect`.
pub fn move_to(hwnd: HWND, rect: Rect) {
    unsafe {
        let _ = MoveWindow(hwnd, rect.x, rect.y, rect.width, rect.height, true);
    }
}

/// Position the fixed controls. Favorite buttons are placed by
/// [`super::favorites::reposition`].
pub fn place(controls: &Controls, layout: &WindowLayout) {
    move_to(controls.list, layout.list);
    move_to(controls.add_game, layout.add_button);
    move_to(controls.play, layout.play_button);
    move_to(controls.settings, layout.settings_button);
    move_to(controls.minimize, layout.minimize_button);
    move_to(controls.close, layout.close_button);
}
