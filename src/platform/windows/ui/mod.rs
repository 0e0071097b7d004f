//! UI components for Windows.

pub mod controls;
pub mod dialogs;
pub mod favorites;
pub mod icon;
pub mod list;
pub mod renderer;
pub mod theme;

pub use controls::Controls;
pub use icon::IconHandle;
