//! Windows runtime state management.
//!
//! Contains the host state struct and thread-local storage. The window
//! procedure re-enters itself through many Win32 calls, so the state is only
//! ever borrowed for short, non-reentrant sections.

use std::cell::RefCell;

use windows::Win32::Foundation::HWND;

use crate::animation::BackgroundAnimator;
use crate::app::{LauncherApp, WindowLayout};
use crate::events::{AppEvent, EventBus, EventPublisher};
use crate::interaction::WindowInteractionController;
use crate::model::LauncherSettings;
use crate::platform::windows::services::ShellIconExtractor;
use crate::platform::windows::ui::Controls;
use crate::services::ProcessLauncher;
use crate::storage::{ConfigStore, JsonStore};

/// The launcher core as wired on Windows.
pub type App = LauncherApp<JsonStore, ShellIconExtractor, ProcessLauncher>;

/// Everything the main window procedure works with.
pub struct HostState {
    pub hwnd: HWND,
    pub app: App,
    pub controller: WindowInteractionController,
    pub animator: BackgroundAnimator,
    pub config: ConfigStore,
    pub settings: LauncherSettings,
    pub bus: EventBus,
    pub controls: Controls,
    pub layout: WindowLayout,
}

thread_local! {
    pub static STATE: RefCell<Option<HostState>> = const { RefCell::new(None) };
    static PUBLISHER: RefCell<Option<EventPublisher>> = const { RefCell::new(None) };
}

/// Install the host state for this thread.
pub fn install(state: HostState) {
    let publisher = state.bus.publisher();
    PUBLISHER.with(|p| *p.borrow_mut() = Some(publisher));
    STATE.with(|s| *s.borrow_mut() = Some(state));
}

/// Remove and return the host state.
pub fn take() -> Option<HostState> {
    PUBLISHER.with(|p| *p.borrow_mut() = None);
    STATE.with(|s| s.borrow_mut().take())
}

/// Run `f` on the host state. Returns `None` when the state is missing or
/// already borrowed further up the stack.
pub fn with_state<T>(f: impl FnOnce(&mut HostState) -> T) -> Option<T> {
    STATE.with(|s| {
        let mut slot = s.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    })
}

/// Queue an event for the next dispatch.
pub fn publish(event: AppEvent) {
    PUBLISHER.with(|p| {
        if let Some(publisher) = p.borrow().as_ref() {
            publisher.publish(event);
        }
    });
}
