//! Side-effecting services behind traits: icon extraction and process launch.

pub mod icons;
pub mod launcher;

pub use icons::{icon_image, save_icon, IconCache, IconService, NoIcons, MAX_ICON_EDGE};
pub use launcher::{GameLauncher, ProcessLauncher, SystemSpawner, Spawner};
