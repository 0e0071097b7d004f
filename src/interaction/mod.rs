//! Borderless-window interaction: dragging by the top strip and resizing
//! from the edges.
//!
//! Pure Rust, no FFI. The platform host converts its native mouse messages
//! into [`PointerEvent`]s, applies the returned geometry and shows the
//! returned cursor.

pub mod controller;
pub mod direction;

pub use controller::{
    InteractionConfig, InteractionState, PointerButton, PointerEvent, PointerResponse,
    WindowInteractionController,
};
pub use direction::{CursorShape, ResizeDirection};
