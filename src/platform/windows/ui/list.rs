//! Owner-drawn library list.
//!
//! Rows are kept here alongside their loaded icons; the listbox only stores
//! the display strings.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use windows::Win32::Foundation::{HWND, LPARAM, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    DrawTextW, FillRect, SetBkMode, SetTextColor, DT_END_ELLIPSIS, DT_LEFT, DT_SINGLELINE,
    DT_VCENTER, TRANSPARENT,
};
use windows::Win32::UI::Controls::{DRAWITEMSTRUCT, MEASUREITEMSTRUCT, ODS_SELECTED};
use windows::Win32::UI::WindowsAndMessaging::{DrawIconEx, SendMessageW, DI_NORMAL};

use super::controls::{LB_ADDSTRING, LB_GETCURSEL, LB_ITEMFROMPOINT, LB_RESETCONTENT, LB_SETCURSEL};
use super::icon::IconHandle;
use super::theme;
use crate::app::layout::LIST_ITEM_HEIGHT;
use crate::model::constants::ICON_SIZE;
use crate::model::{Point, LibraryEntry};
use crate::platform::windows::wide;

const ROW_PADDING: i32 = 10;

struct ListRow {
    name: Vec<u16>,
    path: PathBuf,
    icon: Option<IconHandle>,
}

thread_local! {
    static ROWS: RefCell<Vec<ListRow>> = const { RefCell::new(Vec::new()) };
}

/// Replace the list contents with `entries` and select `selected`.
pub fn populate(list: HWND, entries: &[LibraryEntry], selected: Option<&Path>) {
    let rows: Vec<ListRow> = entries
        .iter()
        .map(|entry| ListRow {
            name: entry.name.encode_utf16().collect(),
            path: entry.path.clone(),
            icon: entry
                .icon
                .as_deref()
                .and_then(|icon| IconHandle::load_file(icon, ICON_SIZE)),
        })
        .collect();
    let selected_index = selected.and_then(|sel| rows.iter().position(|row| row.path == sel));

    ROWS.with(|r| *r.borrow_mut() = rows);

    unsafe {
        SendMessageW(list, LB_RESETCONTENT, None, None);
        for entry in entries {
            let text = wide(&entry.name);
            SendMessageW(
                list,
                LB_ADDSTRING,
                None,
                Some(LPARAM(text.as_ptr() as isize)),
            );
        }
        let index = selected_index.unwrap_or(usize::MAX);
        SendMessageW(list, LB_SETCURSEL, Some(WPARAM(index)), None);
    }
}

/// Drop loaded icons. Called when the window is destroyed.
pub fn clear() {
    ROWS.with(|r| r.borrow_mut().clear());
}

/// Path of the row at `index`.
pub fn path_at(index: usize) -> Option<PathBuf> {
    ROWS.with(|r| r.borrow().get(index).map(|row| row.path.clone()))
}

/// Index of the current selection.
pub fn selected_index(list: HWND) -> Option<usize> {
    let result = unsafe { SendMessageW(list, LB_GETCURSEL, None, None) };
    usize::try_from(result.0).ok()
}

/// Row under a point given in list client coordinates.
pub fn item_from_point(list: HWND, point: Point) -> Option<usize> {
    let packed = ((point.y as u32 & 0xFFFF) << 16) | (point.x as u32 & 0xFFFF);
    let result = unsafe { SendMessageW(list, LB_ITEMFROMPOINT, None, Some(LPARAM(packed as isize))) };
    let outside = (result.0 >> 16) & 0xFFFF != 0;
    if outside {
        None
    } else {
        Some((result.0 & 0xFFFF) as usize)
    }
}

pub fn measure_item(item: &mut MEASUREITEMSTRUCT) {
    item.itemHeight = LIST_ITEM_HEIGHT as u32;
}

pub fn draw_item(item: &DRAWITEMSTRUCT) {
    let hdc = item.hDC;
    let mut rc = item.rcItem;
    let selected = item.itemState.0 & ODS_SELECTED.0 != 0;

    unsafe {
        let brush = if selected {
            theme::selected_brush()
        } else {
            theme::list_brush()
        };
        FillRect(hdc, &rc, brush);

        // 1px separator under every row
        let separator = RECT {
            top: rc.bottom - 1,
            ..rc
        };
        FillRect(hdc, &separator, theme::separator_brush());

        if item.itemID == u32::MAX {
            return;
        }

        ROWS.with(|r| {
            let rows = r.borrow();
            let Some(row) = rows.get(item.itemID as usize) else {
                return;
            };

            let icon_y = rc.top + (rc.bottom - rc.top - ICON_SIZE) / 2;
            if let Some(icon) = row.icon.as_ref() {
                let _ = DrawIconEx(
                    hdc,
                    rc.left + ROW_PADDING,
                    icon_y,
                    icon.raw(),
                    ICON_SIZE,
                    ICON_SIZE,
                    0,
                    None,
                    DI_NORMAL,
                );
            }

            rc.left += ROW_PADDING * 2 + ICON_SIZE;
            rc.right -= ROW_PADDING;
            let color = if selected {
                theme::LIST_SELECTED_TEXT
            } else {
                theme::LIST_TEXT
            };
            SetBkMode(hdc, TRANSPARENT);
            SetTextColor(hdc, color.colorref());
            let mut text = row.name.clone();
            DrawTextW(
                hdc,
                &mut text,
                &mut rc,
                DT_LEFT | DT_SINGLELINE | DT_VCENTER | DT_END_ELLIPSIS,
            );
        });
    }
}
