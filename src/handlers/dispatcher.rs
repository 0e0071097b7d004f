//! Event dispatcher for the launcher core.
//!
//! The dispatcher receives events drained from the bus, runs the matching
//! [`LauncherApp`] operation, and tells the host what to do next.
//!
//! # Architecture
//!
//! ```text
//! EventBus::drain() → dispatch_events() → LauncherApp → Vec<Effect> → host
//! ```
//!
//! Failures never escape: they become [`Effect::Notify`] with a localized
//! [`Notice`].

use log::debug;

use crate::app::{LauncherApp, Notice};
use crate::error::LauncherResult;
use crate::events::AppEvent;
use crate::services::{GameLauncher, IconService};
use crate::storage::EntryStore;

/// What the host must do after an event was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RefreshLibrary,
    RefreshFavorites,
    RefreshDetails,
    Notify(Notice),
    /// Show the executable picker; its result comes back as `GameChosen`
    PickExecutable,
    Minimize,
    Close,
}

/// Dispatch a batch of events in order, concatenating their effects.
pub fn dispatch_events<S, I, L>(
    app: &mut LauncherApp<S, I, L>,
    events: impl IntoIterator<Item = AppEvent>,
) -> Vec<Effect>
where
    S: EntryStore,
    I: IconService,
    L: GameLauncher,
{
    events
        .into_iter()
        .flat_map(|event| dispatch(app, event))
        .collect()
}

/// Dispatch a single event.
pub fn dispatch<S, I, L>(app: &mut LauncherApp<S, I, L>, event: AppEvent) -> Vec<Effect>
where
    S: EntryStore,
    I: IconService,
    L: GameLauncher,
{
    debug!("Dispatching: {}", event.description());
    let ru = app.is_russian();

    let result: LauncherResult<Vec<Effect>> = match event {
        AppEvent::AddGameRequested => Ok(vec![Effect::PickExecutable]),

        AppEvent::GameChosen { path } => app
            .add_game(&path)
            .map(|_| vec![Effect::RefreshLibrary]),

        AppEvent::GameSelected { path } => app
            .select_game(&path)
            .map(|_| vec![Effect::RefreshDetails]),

        AppEvent::LaunchRequested { path } => app.launch_path(&path).map(|_| Vec::new()),

        AppEvent::PlaySelected => app.play_selected().map(|_| Vec::new()),

        AppEvent::RemoveGameRequested { path } => app
            .remove_game(&path)
            .map(|_| vec![Effect::RefreshLibrary, Effect::RefreshDetails]),

        AppEvent::AddFavoriteRequested { path } => app
            .add_to_favorites(&path)
            .map(refresh_favorites_if),

        AppEvent::RemoveFavoriteRequested { path } => app
            .remove_favorite(&path)
            .map(refresh_favorites_if),

        AppEvent::ShowSettings => Ok(vec![Effect::Notify(Notice::settings_placeholder(ru))]),

        AppEvent::Minimize => Ok(vec![Effect::Minimize]),

        AppEvent::CloseRequested => Ok(vec![Effect::Close]),
    };

    result.unwrap_or_else(|err| vec![Effect::Notify(Notice::from_error(&err, ru))])
}

fn refresh_favorites_if(changed: bool) -> Vec<Effect> {
    if changed {
        vec![Effect::RefreshFavorites]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::NoticeKind;
    use crate::error::LaunchError;
    use crate::services::NoIcons;
    use crate::storage::MemoryStore;
    use std::path::{Path, PathBuf};

    struct OkLauncher;

    impl GameLauncher for OkLauncher {
        fn launch(&self, _path: &Path) -> Result<(), LaunchError> {
            Ok(())
        }
    }

    fn app() -> LauncherApp<MemoryStore, NoIcons, OkLauncher> {
        LauncherApp::new(MemoryStore::new(), NoIcons, OkLauncher)
    }

    fn chosen(path: &str) -> AppEvent {
        AppEvent::GameChosen {
            path: PathBuf::from(path),
        }
    }

    #[test]
    fn test_add_game_requests_picker() {
        let mut app = app();
        assert_eq!(
            dispatch(&mut app, AppEvent::AddGameRequested),
            vec![Effect::PickExecutable]
        );
    }

    #[test]
    fn test_duplicate_game_notifies() {
        let mut app = app();
        assert_eq!(
            dispatch(&mut app, chosen("/g/a.exe")),
            vec![Effect::RefreshLibrary]
        );
        let effects = dispatch(&mut app, chosen("/g/a.exe"));
        assert!(matches!(effects.as_slice(), [Effect::Notify(_)]));
        assert_eq!(app.library_rows().len(), 1);
    }

    #[test]
    fn test_settings_shows_info_notice() {
        let mut app = app();
        match dispatch(&mut app, AppEvent::ShowSettings).as_slice() {
            [Effect::Notify(notice)] => assert_eq!(notice.kind, NoticeKind::Info),
            other => panic!("unexpected effects: {:?}", other),
        }
    }

    #[test]
    fn test_batch_preserves_order() {
        let mut app = app();
        let effects = dispatch_events(
            &mut app,
            vec![
                chosen("/g/a.exe"),
                AppEvent::GameSelected {
                    path: PathBuf::from("/g/a.exe"),
                },
                AppEvent::Minimize,
            ],
        );
        assert_eq!(
            effects,
            vec![
                Effect::RefreshLibrary,
                Effect::RefreshDetails,
                Effect::Minimize
            ]
        );
        assert_eq!(app.selected(), Some(Path::new("/g/a.exe")));
    }

    #[test]
    fn test_repeated_favorite_has_no_effect() {
        let mut app = app();
        dispatch(&mut app, chosen("/g/a.exe"));
        let fav = AppEvent::AddFavoriteRequested {
            path: PathBuf::from("/g/a.exe"),
        };
        assert_eq!(dispatch(&mut app, fav.clone()), vec![Effect::RefreshFavorites]);
        assert!(dispatch(&mut app, fav).is_empty());
    }
}
