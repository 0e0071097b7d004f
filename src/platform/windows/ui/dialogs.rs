//! Modal message boxes and the executable picker.

use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;
use std::path::PathBuf;

use windows::core::{PCWSTR, PWSTR};
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Controls::Dialogs::{
    GetOpenFileNameW, OFN_FILEMUSTEXIST, OFN_NOCHANGEDIR, OFN_PATHMUSTEXIST, OPENFILENAMEW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    MessageBoxW, IDYES, MB_ICONERROR, MB_ICONINFORMATION, MB_ICONQUESTION, MB_OK, MB_YESNO,
};

use crate::app::{Notice, NoticeKind};
use crate::platform::windows::wide;

const PATH_BUFFER_LEN: usize = 1024;

pub fn show_notice(owner: HWND, notice: &Notice) {
    let title = wide(&notice.title);
    let text = wide(&notice.message);
    let icon = match notice.kind {
        NoticeKind::Info => MB_ICONINFORMATION,
        NoticeKind::Error => MB_ICONERROR,
    };
    unsafe {
        MessageBoxW(
            Some(owner),
            PCWSTR(text.as_ptr()),
            PCWSTR(title.as_ptr()),
            MB_OK | icon,
        );
    }
}

/// Yes/No question. Returns `true` on Yes.
pub fn confirm(owner: HWND, title: &str, question: &str) -> bool {
    let title = wide(title);
    let text = wide(question);
    let answer = unsafe {
        MessageBoxW(
            Some(owner),
            PCWSTR(text.as_ptr()),
            PCWSTR(title.as_ptr()),
            MB_YESNO | MB_ICONQUESTION,
        )
    };
    answer == IDYES
}

/// Standard open-file dialog filtered to `.exe` files.
pub fn pick_executable(owner: HWND, title: &str) -> Option<PathBuf> {
    let title = wide(title);
    let filter: Vec<u16> = "EXE Files (*.exe)\0*.exe\0\0".encode_utf16().collect();
    let mut buffer = vec![0u16; PATH_BUFFER_LEN];

    let mut ofn = OPENFILENAMEW {
        lStructSize: std::mem::size_of::<OPENFILENAMEW>() as u32,
        hwndOwner: owner,
        lpstrFilter: PCWSTR(filter.as_ptr()),
        lpstrFile: PWSTR(buffer.as_mut_ptr()),
        nMaxFile: PATH_BUFFER_LEN as u32,
        lpstrTitle: PCWSTR(title.as_ptr()),
        Flags: OFN_FILEMUSTEXIST | OFN_PATHMUSTEXIST | OFN_NOCHANGEDIR,
        ..Default::default()
    };

    let picked = unsafe { GetOpenFileNameW(&mut ofn) }.as_bool();
    if !picked {
        return None;
    }
    let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
    if len == 0 {
        return None;
    }
    Some(PathBuf::from(OsString::from_wide(&buffer[..len])))
}
