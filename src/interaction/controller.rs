//! Drag / resize state machine for a borderless window.
//!
//! The host forwards raw pointer events together with the window's current
//! outer rectangle. The controller answers with a [`PointerResponse`]
//! describing whether the event was consumed, the geometry to apply and the
//! cursor to show. It never touches the window itself.

use log::debug;

use super::direction::{CursorShape, ResizeDirection};
use crate::model::constants::{
    BORDER_WIDTH, DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH, DRAG_STRIP_HEIGHT,
};
use crate::model::geometry::{Point, Rect, Size};

/// Mouse button that triggered a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Pointer position in both coordinate spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// Position relative to the window's client area.
    pub local: Point,
    /// Position on the screen.
    pub global: Point,
}

impl PointerEvent {
    pub fn new(local: Point, global: Point) -> Self {
        Self { local, global }
    }
}

/// Current interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging {
        anchor: Point,
    },
    Resizing {
        direction: ResizeDirection,
        anchor: Point,
    },
}

/// Fixed metrics of the interaction model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionConfig {
    /// Width of the resize zone along each edge.
    pub margin: i32,
    /// Presses above this local y start a drag.
    pub drag_strip_height: i32,
    /// Resizing never shrinks the window below this size.
    pub min_size: Size,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            margin: BORDER_WIDTH,
            drag_strip_height: DRAG_STRIP_HEIGHT,
            min_size: Size::new(DEFAULT_MIN_WIDTH, DEFAULT_MIN_HEIGHT),
        }
    }
}

/// What the host should do after a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerResponse {
    /// The controller handled the event; the host should capture the pointer
    /// (on press) and not forward the event to underlying controls.
    pub consumed: bool,
    /// New outer window rectangle, when it changed.
    pub geometry: Option<Rect>,
    /// Cursor to display.
    pub cursor: CursorShape,
}

/// Drag/resize controller for one window.
#[derive(Debug, Clone)]
pub struct WindowInteractionController {
    config: InteractionConfig,
    state: InteractionState,
    latched: ResizeDirection,
}

impl Default for WindowInteractionController {
    fn default() -> Self {
        Self::new(InteractionConfig::default())
    }
}

impl WindowInteractionController {
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            config,
            state: InteractionState::Idle,
            latched: ResizeDirection::NONE,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Direction latched by the last idle move (or held by an active resize).
    pub fn latched_direction(&self) -> ResizeDirection {
        match self.state {
            InteractionState::Resizing { direction, .. } => direction,
            _ => self.latched,
        }
    }

    /// Cursor matching the current state.
    pub fn cursor(&self) -> CursorShape {
        self.latched_direction().cursor()
    }

    /// Handle a button press.
    pub fn on_pointer_down(
        &mut self,
        event: PointerEvent,
        button: PointerButton,
    ) -> PointerResponse {
        if button != PointerButton::Primary || self.state != InteractionState::Idle {
            return self.respond(false, None);
        }

        if !self.latched.is_empty() {
            debug!("resize started: {:?} at {:?}", self.latched, event.global);
            self.state = InteractionState::Resizing {
                direction: self.latched,
                anchor: event.global,
            };
            return self.respond(true, None);
        }

        if event.local.y < self.config.drag_strip_height {
            debug!("drag started at {:?}", event.global);
            self.state = InteractionState::Dragging {
                anchor: event.global,
            };
            return self.respond(true, None);
        }

        self.respond(false, None)
    }

    /// Handle pointer motion. `window` is the current outer rectangle.
    pub fn on_pointer_move(&mut self, event: PointerEvent, window: Rect) -> PointerResponse {
        match self.state {
            InteractionState::Idle => {
                self.latched =
                    ResizeDirection::from_position(event.local, window.size(), self.config.margin);
                self.respond(false, None)
            }
            InteractionState::Dragging { anchor } => {
                let delta = event.global - anchor;
                self.state = InteractionState::Dragging {
                    anchor: event.global,
                };
                self.respond(true, Some(window.translated(delta)))
            }
            InteractionState::Resizing { direction, anchor } => {
                let delta = event.global - anchor;
                let resized = self.resize(window, direction, delta);
                self.state = InteractionState::Resizing {
                    direction,
                    anchor: clamped_anchor(anchor, event.global, window, resized, direction),
                };
                self.respond(true, Some(resized))
            }
        }
    }

    /// Handle button release from any state.
    pub fn on_pointer_up(&mut self) -> PointerResponse {
        let was_active = self.state != InteractionState::Idle;
        if was_active {
            debug!("interaction finished: {:?}", self.state);
        }
        self.state = InteractionState::Idle;
        self.latched = ResizeDirection::NONE;
        self.respond(was_active, None)
    }

    /// Apply a pointer delta to the edges named by `direction`.
    fn resize(&self, window: Rect, direction: ResizeDirection, delta: Point) -> Rect {
        let mut rect = window;

        if direction.contains(ResizeDirection::RIGHT) {
            rect.width += delta.x;
        }
        if direction.contains(ResizeDirection::BOTTOM) {
            rect.height += delta.y;
        }
        if direction.contains(ResizeDirection::LEFT) {
            rect.set_left(rect.x + delta.x);
        }
        if direction.contains(ResizeDirection::TOP) {
            rect.set_top(rect.y + delta.y);
        }

        let min = self.config.min_size;
        if rect.width < min.width {
            if direction.contains(ResizeDirection::LEFT) {
                rect.set_left(rect.right() - min.width);
            } else {
                rect.width = min.width;
            }
        }
        if rect.height < min.height {
            if direction.contains(ResizeDirection::TOP) {
                rect.set_top(rect.bottom() - min.height);
            } else {
                rect.height = min.height;
            }
        }

        rect
    }

    fn respond(&self, consumed: bool, geometry: Option<Rect>) -> PointerResponse {
        PointerResponse {
            consumed,
            geometry,
            cursor: self.cursor(),
        }
    }
}

/// Next resize anchor: the pointer position, except on an axis where the
/// min-size clamp held an edge back. There the anchor only moves by the
/// distance the edge actually travelled, so the edge stays under the pointer.
fn clamped_anchor(
    anchor: Point,
    pointer: Point,
    before: Rect,
    after: Rect,
    direction: ResizeDirection,
) -> Point {
    let moved_x = if direction.contains(ResizeDirection::LEFT) {
        Some(after.x - before.x)
    } else if direction.contains(ResizeDirection::RIGHT) {
        Some(after.right() - before.right())
    } else {
        None
    };
    let moved_y = if direction.contains(ResizeDirection::TOP) {
        Some(after.y - before.y)
    } else if direction.contains(ResizeDirection::BOTTOM) {
        Some(after.bottom() - before.bottom())
    } else {
        None
    };
    Point::new(
        moved_x.map_or(pointer.x, |dx| anchor.x + dx),
        moved_y.map_or(pointer.y, |dy| anchor.y + dy),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(x: i32, y: i32) -> PointerEvent {
        PointerEvent::new(Point::new(x, y), Point::new(x, y))
    }

    #[test]
    fn secondary_button_never_starts_interaction() {
        let mut ctl = WindowInteractionController::default();
        let resp = ctl.on_pointer_down(ev(100, 10), PointerButton::Secondary);
        assert!(!resp.consumed);
        assert_eq!(ctl.state(), InteractionState::Idle);
    }

    #[test]
    fn press_below_strip_passes_through() {
        let mut ctl = WindowInteractionController::default();
        let window = Rect::new(0, 0, 800, 600);
        ctl.on_pointer_move(ev(300, 300), window);
        let resp = ctl.on_pointer_down(ev(300, 300), PointerButton::Primary);
        assert!(!resp.consumed);
        assert_eq!(ctl.state(), InteractionState::Idle);
    }

    #[test]
    fn latched_edge_wins_over_drag_strip() {
        let mut ctl = WindowInteractionController::default();
        let window = Rect::new(0, 0, 800, 600);
        ctl.on_pointer_move(ev(2, 20), window);
        ctl.on_pointer_down(ev(2, 20), PointerButton::Primary);
        assert!(matches!(
            ctl.state(),
            InteractionState::Resizing { direction, .. } if direction == ResizeDirection::LEFT
        ));
    }

    #[test]
    fn resize_clamps_left_edge_against_min_width() {
        let config = InteractionConfig {
            min_size: Size::new(700, 500),
            ..InteractionConfig::default()
        };
        let mut ctl = WindowInteractionController::new(config);
        let window = Rect::new(100, 100, 800, 600);
        ctl.on_pointer_move(ev(2, 300), window);
        ctl.on_pointer_down(
            PointerEvent::new(Point::new(2, 300), Point::new(102, 400)),
            PointerButton::Primary,
        );
        let resp = ctl.on_pointer_move(
            PointerEvent::new(Point::new(300, 300), Point::new(402, 400)),
            window,
        );
        let rect = resp.geometry.unwrap();
        assert_eq!(rect.width, 700);
        assert_eq!(rect.right(), 900);
    }

    #[test]
    fn resize_clamps_bottom_edge_against_min_height() {
        let mut ctl = WindowInteractionController::default();
        let window = Rect::new(0, 0, 800, 400);
        ctl.on_pointer_move(ev(400, 398), window);
        ctl.on_pointer_down(ev(400, 398), PointerButton::Primary);
        let rect = ctl.on_pointer_move(ev(400, 100), window).geometry.unwrap();
        assert_eq!(rect.height, DEFAULT_MIN_HEIGHT);
        assert_eq!(rect.y, 0);
    }
}
