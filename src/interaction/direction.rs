//! Resize-zone detection and cursor affordances.

use crate::model::geometry::{Point, Size};

/// Set of window edges being hovered or dragged.
///
/// Holds at most one horizontal edge (Left or Right) and one vertical edge
/// (Top or Bottom). Two bits set means a corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ResizeDirection(u8);

impl ResizeDirection {
    pub const NONE: ResizeDirection = ResizeDirection(0);
    pub const LEFT: ResizeDirection = ResizeDirection(1 << 0);
    pub const RIGHT: ResizeDirection = ResizeDirection(1 << 1);
    pub const TOP: ResizeDirection = ResizeDirection(1 << 2);
    pub const BOTTOM: ResizeDirection = ResizeDirection(1 << 3);

    /// Edges within `margin` pixels of a local pointer position.
    ///
    /// Left wins over Right and Top over Bottom when the window is narrower
    /// than two margins.
    pub fn from_position(local: Point, window: Size, margin: i32) -> Self {
        let mut dir = Self::NONE;

        if local.x < margin {
            dir = dir | Self::LEFT;
        } else if local.x > window.width - margin {
            dir = dir | Self::RIGHT;
        }

        if local.y < margin {
            dir = dir | Self::TOP;
        } else if local.y > window.height - margin {
            dir = dir | Self::BOTTOM;
        }

        dir
    }

    pub fn contains(self, other: ResizeDirection) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True for corners (one horizontal plus one vertical edge).
    pub fn is_diagonal(self) -> bool {
        self.0.count_ones() == 2
    }

    /// Cursor shown while this direction is hovered or active.
    pub fn cursor(self) -> CursorShape {
        let left = self.contains(Self::LEFT);
        let right = self.contains(Self::RIGHT);
        let top = self.contains(Self::TOP);
        let bottom = self.contains(Self::BOTTOM);

        match (left || right, top || bottom) {
            (true, true) if (left && top) || (right && bottom) => CursorShape::ResizeForwardDiagonal,
            (true, true) => CursorShape::ResizeBackDiagonal,
            (true, false) => CursorShape::ResizeHorizontal,
            (false, true) => CursorShape::ResizeVertical,
            (false, false) => CursorShape::Arrow,
        }
    }
}

impl std::ops::BitOr for ResizeDirection {
    type Output = ResizeDirection;

    fn bitor(self, rhs: ResizeDirection) -> ResizeDirection {
        ResizeDirection(self.0 | rhs.0)
    }
}

/// Pointer affordance requested from the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CursorShape {
    #[default]
    Arrow,
    /// West-east arrows.
    ResizeHorizontal,
    /// North-south arrows.
    ResizeVertical,
    /// North-west to south-east arrows (top-left and bottom-right corners).
    ResizeForwardDiagonal,
    /// North-east to south-west arrows (top-right and bottom-left corners).
    ResizeBackDiagonal,
}
