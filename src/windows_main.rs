//! Windows-specific entry point and window procedure.
//!
//! One borderless top-level window. The background and panels are drawn with
//! Direct2D; the list and buttons are ordinary child controls. User actions
//! are published as events and dispatched after each message, outside any
//! borrow of the host state.

use std::path::Path;

use log::{error, info};
use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, POINT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    BeginPaint, EndPaint, InvalidateRect, ScreenToClient, PAINTSTRUCT,
};
use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Controls::{DRAWITEMSTRUCT, MEASUREITEMSTRUCT};
use windows::Win32::UI::Input::KeyboardAndMouse::{ReleaseCapture, SetCapture};
use windows::Win32::UI::WindowsAndMessaging::{
    AppendMenuW, CreatePopupMenu, CreateWindowExW, DefWindowProcW, DestroyMenu, DestroyWindow,
    DispatchMessageW, GetClientRect, GetCursorPos, GetMessageW, GetSystemMetrics, GetWindowRect,
    IsIconic, KillTimer, LoadCursorW, PostQuitMessage, RegisterClassW, SetCursor, SetTimer,
    SetWindowPos, ShowWindow, TrackPopupMenu, TranslateMessage, CS_HREDRAW, CS_VREDRAW, HCURSOR,
    IDC_ARROW, IDC_SIZENESW, IDC_SIZENS, IDC_SIZENWSE, IDC_SIZEWE, MF_STRING, MSG, SM_CXSCREEN,
    SM_CYSCREEN, SWP_NOACTIVATE, SWP_NOZORDER, SW_MINIMIZE, SW_SHOW, TPM_RETURNCMD,
    TPM_RIGHTBUTTON, WINDOW_EX_STYLE, WM_CAPTURECHANGED, WM_COMMAND, WM_CONTEXTMENU,
    WM_CTLCOLORLISTBOX, WM_DESTROY, WM_DRAWITEM, WM_ERASEBKGND, WM_LBUTTONDOWN, WM_LBUTTONUP,
    WM_MEASUREITEM, WM_MOUSEMOVE, WM_PAINT, WM_SETCURSOR, WM_SIZE, WM_TIMER, WNDCLASSW,
    WS_CLIPCHILDREN, WS_MINIMIZEBOX, WS_POPUP,
};

use enlaut::animation::BackgroundAnimator;
use enlaut::app::{remove_favorite_prompt, WindowLayout};
use enlaut::events::{AppEvent, EventBus};
use enlaut::handlers::{dispatch_events, Effect};
use enlaut::interaction::{
    CursorShape, InteractionConfig, PointerButton, PointerEvent, WindowInteractionController,
};
use enlaut::model::constants::{ANIMATION_TICK_MS, WINDOW_TITLE};
use enlaut::model::{Point, Rect, Size};
use enlaut::platform::windows::app::state::{self, publish, with_state, App, HostState};
use enlaut::platform::windows::services::ShellIconExtractor;
use enlaut::platform::windows::ui::controls::{
    self, BN_CLICKED, ID_ADD_GAME, ID_CLOSE, ID_FAV_ADD, ID_FAV_BASE, ID_LIST, ID_MINIMIZE,
    ID_PLAY, ID_SETTINGS, LBN_DBLCLK, LBN_SELCHANGE, MENU_ADD_FAVORITE, MENU_REMOVE_GAME,
};
use enlaut::platform::windows::ui::{dialogs, favorites, list, renderer, theme};
use enlaut::platform::windows::wide;
use enlaut::services::ProcessLauncher;
use enlaut::storage::{data_dir, ConfigStore, JsonStore, StorageConfig};
use enlaut::tr_key;

const TIMER_ANIMATION: usize = 1;
const HTCLIENT: usize = 1;
const SIZE_MINIMIZED: usize = 1;

/// Main entry point for Windows.
pub fn run() {
    if let Err(e) = run_app() {
        error!("Enlaut error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> windows::core::Result<()> {
    unsafe {
        CoInitializeEx(None, COINIT_APARTMENTTHREADED).ok()?;
        renderer::init_factories()?;

        let dir = data_dir();
        info!("Data directory: {}", dir.display());
        let mut config = ConfigStore::in_dir(&dir);
        let settings = config.load_settings();
        let ru = settings.is_russian();

        let store = JsonStore::new(StorageConfig::in_dir(&dir));
        let app = App::new(store, ShellIconExtractor::default(), ProcessLauncher::system())
            .with_russian(ru);

        let instance = GetModuleHandleW(None)?;
        let class_name = w!("EnlautWindow");

        let wc = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(wndproc),
            hInstance: instance.into(),
            hCursor: LoadCursorW(None, IDC_ARROW)?,
            lpszClassName: class_name,
            ..Default::default()
        };
        RegisterClassW(&wc);

        // Centred on the primary monitor
        let size = settings.window_size();
        let x = (GetSystemMetrics(SM_CXSCREEN) - size.width).max(0) / 2;
        let y = (GetSystemMetrics(SM_CYSCREEN) - size.height).max(0) / 2;

        let title = wide(WINDOW_TITLE);
        let hwnd = CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            class_name,
            PCWSTR(title.as_ptr()),
            WS_POPUP | WS_CLIPCHILDREN | WS_MINIMIZEBOX,
            x,
            y,
            size.width,
            size.height,
            None,
            None,
            Some(instance.into()),
            None,
        )?;

        let controls = controls::create_controls(hwnd, ru);
        let client = client_size(hwnd);
        let layout = WindowLayout::compute(client);
        controls::place(&controls, &layout);

        let animator =
            BackgroundAnimator::new(renderer::image_size(&settings.background_image), client);
        let animated = animator.has_image();

        let controller = WindowInteractionController::new(InteractionConfig {
            min_size: settings.min_size(),
            ..InteractionConfig::default()
        });

        state::install(HostState {
            hwnd,
            app,
            controller,
            animator,
            config,
            settings,
            bus: EventBus::new(),
            controls,
            layout,
        });

        refresh_library();
        refresh_favorites();
        refresh_details();

        if animated {
            SetTimer(Some(hwnd), TIMER_ANIMATION, ANIMATION_TICK_MS, None);
        } else {
            info!("No background image; using a plain background");
        }

        let _ = ShowWindow(hwnd, SW_SHOW);
        info!("Enlaut started ({}x{})", size.width, size.height);

        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        drop(state::take());
        theme::release_brushes();
        renderer::release_factories();
        CoUninitialize();
        info!("Enlaut exited");
    }
    Ok(())
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_LBUTTONDOWN => {
                let event = pointer_event(lparam);
                let consumed = with_state(|s| {
                    s.controller
                        .on_pointer_down(event, PointerButton::Primary)
                        .consumed
                })
                .unwrap_or(false);
                if consumed {
                    SetCapture(hwnd);
                }
                LRESULT(0)
            }

            WM_MOUSEMOVE => {
                let event = pointer_event(lparam);
                let window = window_rect(hwnd);
                if let Some(response) = with_state(|s| s.controller.on_pointer_move(event, window))
                {
                    if let Some(rect) = response.geometry {
                        let _ = SetWindowPos(
                            hwnd,
                            None,
                            rect.x,
                            rect.y,
                            rect.width,
                            rect.height,
                            SWP_NOZORDER | SWP_NOACTIVATE,
                        );
                    }
                    SetCursor(Some(cursor_for(response.cursor)));
                }
                LRESULT(0)
            }

            WM_LBUTTONUP => {
                let was_active = with_state(|s| s.controller.on_pointer_up().consumed)
                    .unwrap_or(false);
                if was_active {
                    let _ = ReleaseCapture();
                }
                LRESULT(0)
            }

            WM_CAPTURECHANGED => {
                with_state(|s| {
                    s.controller.on_pointer_up();
                });
                LRESULT(0)
            }

            WM_SETCURSOR => {
                let over_client = HWND(wparam.0 as *mut _) == hwnd
                    && (lparam.0 as usize & 0xFFFF) == HTCLIENT;
                match with_state(|s| s.controller.cursor()) {
                    Some(cursor) if over_client => {
                        SetCursor(Some(cursor_for(cursor)));
                        LRESULT(1)
                    }
                    _ => DefWindowProcW(hwnd, msg, wparam, lparam),
                }
            }

            WM_SIZE => {
                if wparam.0 != SIZE_MINIMIZED {
                    let size = Size::new(
                        (lparam.0 & 0xFFFF) as i32,
                        ((lparam.0 >> 16) & 0xFFFF) as i32,
                    );
                    on_resize(hwnd, size);
                }
                LRESULT(0)
            }

            WM_TIMER => {
                if wparam.0 == TIMER_ANIMATION
                    && with_state(|s| s.animator.tick()).unwrap_or(false)
                {
                    let _ = InvalidateRect(Some(hwnd), None, false);
                }
                LRESULT(0)
            }

            WM_PAINT => {
                let mut ps = PAINTSTRUCT::default();
                BeginPaint(hwnd, &mut ps);
                with_state(|s| {
                    let details = s.app.details();
                    let scene = renderer::Scene {
                        background: &s.settings.background_image,
                        frame: s.animator.frame(),
                        layout: &s.layout,
                        details: &details,
                        ru: s.app.is_russian(),
                    };
                    renderer::paint(hwnd, &scene);
                });
                let _ = EndPaint(hwnd, &ps);
                LRESULT(0)
            }

            WM_ERASEBKGND => LRESULT(1),

            WM_MEASUREITEM if wparam.0 == ID_LIST as usize => {
                list::measure_item(&mut *(lparam.0 as *mut MEASUREITEMSTRUCT));
                LRESULT(1)
            }

            WM_DRAWITEM if wparam.0 == ID_LIST as usize => {
                list::draw_item(&*(lparam.0 as *const DRAWITEMSTRUCT));
                LRESULT(1)
            }

            WM_CTLCOLORLISTBOX => LRESULT(theme::list_brush().0 as isize),

            WM_COMMAND => {
                let id = (wparam.0 & 0xFFFF) as i32;
                let code = ((wparam.0 >> 16) & 0xFFFF) as u32;
                handle_command(id, code);
                pump_events(hwnd);
                LRESULT(0)
            }

            WM_CONTEXTMENU => {
                let target = HWND(wparam.0 as *mut _);
                let screen = Point::new(
                    (lparam.0 & 0xFFFF) as i16 as i32,
                    ((lparam.0 >> 16) & 0xFFFF) as i16 as i32,
                );
                handle_context_menu(hwnd, target, screen);
                pump_events(hwnd);
                LRESULT(0)
            }

            WM_DESTROY => {
                let _ = KillTimer(Some(hwnd), TIMER_ANIMATION);
                favorites::destroy_all();
                list::clear();
                persist_window_size(hwnd);
                PostQuitMessage(0);
                LRESULT(0)
            }

            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}

/// Pointer position from a mouse message plus the screen position.
unsafe fn pointer_event(lparam: LPARAM) -> PointerEvent {
    let local = Point::new(
        (lparam.0 & 0xFFFF) as i16 as i32,
        ((lparam.0 >> 16) & 0xFFFF) as i16 as i32,
    );
    let mut pt = POINT::default();
    let _ = GetCursorPos(&mut pt);
    PointerEvent::new(local, Point::new(pt.x, pt.y))
}

unsafe fn window_rect(hwnd: HWND) -> Rect {
    let mut rc = RECT::default();
    let _ = GetWindowRect(hwnd, &mut rc);
    Rect::new(rc.left, rc.top, rc.right - rc.left, rc.bottom - rc.top)
}

unsafe fn client_size(hwnd: HWND) -> Size {
    let mut rc = RECT::default();
    let _ = GetClientRect(hwnd, &mut rc);
    Size::new(rc.right - rc.left, rc.bottom - rc.top)
}

unsafe fn cursor_for(shape: CursorShape) -> HCURSOR {
    let id = match shape {
        CursorShape::Arrow => IDC_ARROW,
        CursorShape::ResizeHorizontal => IDC_SIZEWE,
        CursorShape::ResizeVertical => IDC_SIZENS,
        CursorShape::ResizeForwardDiagonal => IDC_SIZENWSE,
        CursorShape::ResizeBackDiagonal => IDC_SIZENESW,
    };
    LoadCursorW(None, id).unwrap_or_default()
}

fn on_resize(hwnd: HWND, size: Size) {
    let placed = with_state(|s| {
        s.animator.resize(size);
        s.layout = WindowLayout::compute(size);
        (s.controls, s.layout)
    });
    if let Some((controls, layout)) = placed {
        controls::place(&controls, &layout);
        favorites::reposition(controls.fav_add, &layout);
        renderer::resize(size);
        unsafe {
            let _ = InvalidateRect(Some(hwnd), None, false);
        }
    }
}

/// Translate a control notification into an event.
fn handle_command(id: i32, code: u32) {
    match id {
        ID_LIST => {
            let Some(list_hwnd) = with_state(|s| s.controls.list) else {
                return;
            };
            let Some(path) = list::selected_index(list_hwnd).and_then(list::path_at) else {
                return;
            };
            match code {
                LBN_SELCHANGE => publish(AppEvent::GameSelected { path }),
                LBN_DBLCLK => publish(AppEvent::LaunchRequested { path }),
                _ => {}
            }
        }
        _ if code != BN_CLICKED => {}
        ID_ADD_GAME => publish(AppEvent::AddGameRequested),
        ID_PLAY => publish(AppEvent::PlaySelected),
        ID_SETTINGS => publish(AppEvent::ShowSettings),
        ID_MINIMIZE => publish(AppEvent::Minimize),
        ID_CLOSE => publish(AppEvent::CloseRequested),
        ID_FAV_ADD => {
            if let Some(path) = with_state(|s| s.app.selected().map(Path::to_path_buf)).flatten() {
                publish(AppEvent::AddFavoriteRequested { path });
            }
        }
        _ if id >= ID_FAV_BASE => {
            if let Some(path) = favorites::path_for_id(id) {
                publish(AppEvent::LaunchRequested { path });
            }
        }
        _ => {}
    }
}

/// Right click on a list row or a favorite button.
fn handle_context_menu(hwnd: HWND, target: HWND, screen: Point) {
    let Some((list_hwnd, ru)) = with_state(|s| (s.controls.list, s.app.is_russian())) else {
        return;
    };

    if target == list_hwnd {
        show_list_menu(hwnd, list_hwnd, screen, ru);
    } else if let Some((name, path)) = favorites::favorite_for_hwnd(target) {
        let title = tr_key("Favorites", ru);
        if dialogs::confirm(hwnd, &title, &remove_favorite_prompt(&name, ru)) {
            publish(AppEvent::RemoveFavoriteRequested { path });
        }
    }
}

fn show_list_menu(hwnd: HWND, list_hwnd: HWND, screen: Point, ru: bool) {
    // (-1, -1) means the menu was opened from the keyboard
    let from_keyboard = screen == Point::new(-1, -1);
    let index = if from_keyboard {
        list::selected_index(list_hwnd)
    } else {
        let mut pt = POINT {
            x: screen.x,
            y: screen.y,
        };
        unsafe {
            let _ = ScreenToClient(list_hwnd, &mut pt);
        }
        list::item_from_point(list_hwnd, Point::new(pt.x, pt.y))
    };
    let Some(path) = index.and_then(list::path_at) else {
        return;
    };

    let mut at = POINT {
        x: screen.x,
        y: screen.y,
    };
    let add_label = wide(&tr_key("Add to favorites", ru));
    let remove_label = wide(&tr_key("Remove game", ru));

    let command = unsafe {
        if from_keyboard {
            let _ = GetCursorPos(&mut at);
        }
        let Ok(menu) = CreatePopupMenu() else {
            return;
        };
        let _ = AppendMenuW(
            menu,
            MF_STRING,
            MENU_ADD_FAVORITE as usize,
            PCWSTR(add_label.as_ptr()),
        );
        let _ = AppendMenuW(
            menu,
            MF_STRING,
            MENU_REMOVE_GAME as usize,
            PCWSTR(remove_label.as_ptr()),
        );
        let chosen = TrackPopupMenu(
            menu,
            TPM_RETURNCMD | TPM_RIGHTBUTTON,
            at.x,
            at.y,
            None,
            hwnd,
            None,
        );
        let _ = DestroyMenu(menu);
        chosen.0
    };

    match command {
        MENU_ADD_FAVORITE => publish(AppEvent::AddFavoriteRequested { path }),
        MENU_REMOVE_GAME => publish(AppEvent::RemoveGameRequested { path }),
        _ => {}
    }
}

/// Dispatch queued events until the bus is empty, applying effects between
/// batches with the state released.
fn pump_events(hwnd: HWND) {
    loop {
        let effects = with_state(|s| {
            let events = s.bus.drain();
            if events.is_empty() {
                None
            } else {
                Some(dispatch_events(&mut s.app, events))
            }
        })
        .flatten();

        let Some(effects) = effects else {
            break;
        };
        for effect in effects {
            apply_effect(hwnd, effect);
        }
    }
}

fn apply_effect(hwnd: HWND, effect: Effect) {
    match effect {
        Effect::RefreshLibrary => refresh_library(),
        Effect::RefreshFavorites => refresh_favorites(),
        Effect::RefreshDetails => refresh_details(),
        Effect::Notify(notice) => dialogs::show_notice(hwnd, &notice),
        Effect::PickExecutable => {
            let ru = with_state(|s| s.app.is_russian()).unwrap_or(false);
            let title = tr_key("Choose a game executable", ru);
            if let Some(path) = dialogs::pick_executable(hwnd, &title) {
                publish(AppEvent::GameChosen { path });
            }
        }
        Effect::Minimize => unsafe {
            let _ = ShowWindow(hwnd, SW_MINIMIZE);
        },
        Effect::Close => unsafe {
            let _ = DestroyWindow(hwnd);
        },
    }
}

fn refresh_library() {
    let Some((list_hwnd, rows, selected)) = with_state(|s| {
        (
            s.controls.list,
            s.app.library_rows().to_vec(),
            s.app.selected().map(Path::to_path_buf),
        )
    }) else {
        return;
    };
    list::populate(list_hwnd, &rows, selected.as_deref());
}

fn refresh_favorites() {
    let Some((hwnd, add_button, favs, layout)) = with_state(|s| {
        (
            s.hwnd,
            s.controls.fav_add,
            s.app.favorites().to_vec(),
            s.layout,
        )
    }) else {
        return;
    };
    favorites::rebuild(hwnd, add_button, &favs, &layout);
}

fn refresh_details() {
    let Some((hwnd, play, enabled)) =
        with_state(|s| (s.hwnd, s.controls.play, s.app.details().play_enabled))
    else {
        return;
    };
    controls::set_enabled(play, enabled);
    unsafe {
        let _ = InvalidateRect(Some(hwnd), None, false);
    }
}

/// Remember the window size for the next start.
fn persist_window_size(hwnd: HWND) {
    let minimized = unsafe { IsIconic(hwnd).as_bool() };
    let rect = unsafe { window_rect(hwnd) };
    with_state(|s| {
        if !minimized {
            s.settings.window_width = rect.width;
            s.settings.window_height = rect.height;
            s.settings.validate();
        }
        s.config.save_settings(&s.settings);
        if let Err(e) = s.config.flush() {
            error!("Failed to save {}: {}", s.config.path().display(), e);
        }
    });
}
