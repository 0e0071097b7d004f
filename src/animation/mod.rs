//! Continuous background animation.
//!
//! Pure Rust, no FFI: the angle state machine and the per-frame transform.
//! Drawing happens in the platform renderer.

pub mod animator;
pub mod transform;

pub use animator::{AnimationState, BackgroundAnimator, BackgroundFrame};
pub use transform::Affine;
