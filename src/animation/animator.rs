//! Rotating background layer.
//!
//! The animator owns the rotation angle and the target rectangle. The host
//! calls [`BackgroundAnimator::tick`] from a fixed-interval timer and asks
//! for a [`BackgroundFrame`] when painting.

use super::transform::Affine;
use crate::model::constants::{ANGLE_STEP, FULL_TURN};
use crate::model::geometry::{Point, Rect, Size};

/// Rotation angle in whole degrees, always in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationState {
    angle: u16,
}

impl AnimationState {
    pub fn angle(&self) -> u16 {
        self.angle
    }

    /// Step the angle down by `ANGLE_STEP`, wrapping 0 to 359.
    fn advance(&mut self) {
        self.angle = (self.angle + FULL_TURN - ANGLE_STEP) % FULL_TURN;
    }
}

/// Everything a host needs to draw one background frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundFrame {
    /// Image-space to viewport-space transform.
    pub transform: Affine,
    /// Region drawing is clipped to.
    pub clip: Rect,
    /// Source image size.
    pub image: Size,
}

/// Rotating background image cropped to the window.
#[derive(Debug, Clone)]
pub struct BackgroundAnimator {
    state: AnimationState,
    image: Option<Size>,
    viewport: Rect,
}

impl BackgroundAnimator {
    /// `image` is `None` when the source failed to load; such an animator
    /// still ticks but never yields a frame.
    pub fn new(image: Option<Size>, viewport: Size) -> Self {
        Self {
            state: AnimationState::default(),
            image,
            viewport: Rect::from_size(viewport),
        }
    }

    pub fn angle(&self) -> u16 {
        self.state.angle()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Advance one timer period. Returns true when a redraw is needed.
    pub fn tick(&mut self) -> bool {
        self.state.advance();
        true
    }

    /// Match the parent's size, anchored at (0, 0).
    pub fn resize(&mut self, parent: Size) {
        self.viewport = Rect::from_size(parent);
    }

    /// Rotation pivot inside the viewport.
    ///
    /// The pivot sits half a viewport to the left of the centre, so only the
    /// right half of the rotating image is visible.
    pub fn pivot(viewport: Size) -> Point {
        let visible_width = viewport.width / 2;
        let x_offset = -(viewport.width - visible_width);
        Point::new(viewport.width / 2 + x_offset, viewport.height / 2)
    }

    /// Transform for the current angle, or `None` without an image.
    pub fn frame(&self) -> Option<BackgroundFrame> {
        let image = self.image?;
        let pivot = Self::pivot(self.viewport.size());

        // Offsets round away from zero for odd sizes
        let to_center = Affine::translation(
            -((image.width + 1) / 2) as f32,
            -((image.height + 1) / 2) as f32,
        );
        let transform = to_center
            .then(&Affine::rotation(f32::from(self.state.angle())))
            .then(&Affine::translation(pivot.x as f32, pivot.y as f32));

        Some(BackgroundFrame {
            transform,
            clip: self.viewport,
            image,
        })
    }
}
