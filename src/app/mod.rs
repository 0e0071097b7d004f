//! Application core shared by every host.
//!
//! [`LauncherApp`] owns the persisted collections and the selection; the
//! view types and the layout are what a host needs to draw them.

pub mod launcher_app;
pub mod layout;
pub mod view;

pub use launcher_app::LauncherApp;
pub use layout::WindowLayout;
pub use view::{remove_favorite_prompt, GameDetails, Notice, NoticeKind};
