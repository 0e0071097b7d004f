//! Drag / resize state machine behaviour.

use enlaut::interaction::{
    CursorShape, InteractionConfig, InteractionState, PointerButton, PointerEvent,
    ResizeDirection, WindowInteractionController,
};
use enlaut::model::{Point, Rect, Size};

fn ev(local: (i32, i32), global: (i32, i32)) -> PointerEvent {
    PointerEvent::new(Point::new(local.0, local.1), Point::new(global.0, global.1))
}

fn window() -> Rect {
    Rect::new(100, 100, 800, 600)
}

// === Hit testing ===

#[test]
fn corner_zone_is_left_top_forward_diagonal() {
    let size = Size::new(800, 600);
    for x in 0..6 {
        for y in 0..6 {
            let dir = ResizeDirection::from_position(Point::new(x, y), size, 6);
            assert_eq!(dir, ResizeDirection::LEFT | ResizeDirection::TOP);
            assert_eq!(dir.cursor(), CursorShape::ResizeForwardDiagonal);
            assert_ne!(dir.cursor(), CursorShape::ResizeBackDiagonal);
        }
    }
}

#[test]
fn left_edge_is_horizontal() {
    let dir = ResizeDirection::from_position(Point::new(3, 300), Size::new(800, 600), 6);
    assert_eq!(dir, ResizeDirection::LEFT);
    assert_eq!(dir.cursor(), CursorShape::ResizeHorizontal);
}

#[test]
fn top_edge_is_vertical() {
    let dir = ResizeDirection::from_position(Point::new(400, 3), Size::new(800, 600), 6);
    assert_eq!(dir, ResizeDirection::TOP);
    assert_eq!(dir.cursor(), CursorShape::ResizeVertical);
}

#[test]
fn top_right_corner_is_back_diagonal() {
    let dir = ResizeDirection::from_position(Point::new(797, 2), Size::new(800, 600), 6);
    assert_eq!(dir, ResizeDirection::RIGHT | ResizeDirection::TOP);
    assert_eq!(dir.cursor(), CursorShape::ResizeBackDiagonal);
}

#[test]
fn interior_has_no_direction() {
    let dir = ResizeDirection::from_position(Point::new(400, 300), Size::new(800, 600), 6);
    assert!(dir.is_empty());
    assert_eq!(dir.cursor(), CursorShape::Arrow);
}

#[test]
fn idle_move_latches_cursor() {
    let mut ctl = WindowInteractionController::default();
    let resp = ctl.on_pointer_move(ev((3, 300), (103, 400)), window());
    assert!(!resp.consumed);
    assert_eq!(resp.geometry, None);
    assert_eq!(resp.cursor, CursorShape::ResizeHorizontal);
    assert_eq!(ctl.cursor(), CursorShape::ResizeHorizontal);
}

// === Dragging ===

#[test]
fn drag_moves_by_incremental_deltas() {
    let mut ctl = WindowInteractionController::default();
    let mut win = Rect::new(0, 0, 800, 600);

    ctl.on_pointer_move(ev((100, 10), (100, 100)), win);
    let down = ctl.on_pointer_down(ev((100, 10), (100, 100)), PointerButton::Primary);
    assert!(down.consumed);

    let first = ctl.on_pointer_move(ev((150, 30), (150, 120)), win);
    win = first.geometry.expect("drag moves the window");
    assert_eq!(win.origin(), Point::new(50, 20));
    assert_eq!(win.size(), Size::new(800, 600));

    let second = ctl.on_pointer_move(ev((110, 15), (160, 125)), win);
    let win = second.geometry.expect("drag moves the window");
    assert_eq!(win.origin(), Point::new(60, 25));
}

#[test]
fn press_below_drag_strip_is_not_consumed() {
    let mut ctl = WindowInteractionController::default();
    ctl.on_pointer_move(ev((400, 300), (500, 400)), window());
    let resp = ctl.on_pointer_down(ev((400, 300), (500, 400)), PointerButton::Primary);
    assert!(!resp.consumed);
    assert_eq!(ctl.state(), InteractionState::Idle);
}

#[test]
fn secondary_button_does_not_drag() {
    let mut ctl = WindowInteractionController::default();
    let resp = ctl.on_pointer_down(ev((100, 10), (200, 110)), PointerButton::Secondary);
    assert!(!resp.consumed);
    assert_eq!(ctl.state(), InteractionState::Idle);
}

// === Resizing ===

#[test]
fn resize_right_bottom_keeps_origin() {
    let mut ctl = WindowInteractionController::default();
    let win = window();

    ctl.on_pointer_move(ev((798, 598), (898, 698)), win);
    assert!(ctl.on_pointer_down(ev((798, 598), (898, 698)), PointerButton::Primary).consumed);

    let resp = ctl.on_pointer_move(ev((818, 588), (918, 688)), win);
    let resized = resp.geometry.expect("resize changes geometry");
    assert_eq!(resized.origin(), win.origin());
    assert_eq!(resized.width, win.width + 20);
    assert_eq!(resized.height, win.height - 10);
    assert_eq!(resp.cursor, CursorShape::ResizeForwardDiagonal);
}

#[test]
fn resize_left_moves_left_edge_only() {
    let mut ctl = WindowInteractionController::default();
    let win = window();

    ctl.on_pointer_move(ev((3, 300), (103, 400)), win);
    ctl.on_pointer_down(ev((3, 300), (103, 400)), PointerButton::Primary);

    let resized = ctl
        .on_pointer_move(ev((3, 300), (123, 400)), win)
        .geometry
        .expect("resize changes geometry");
    assert_eq!(resized.x, win.x + 20);
    assert_eq!(resized.width, win.width - 20);
    assert_eq!(resized.right(), win.right());
    assert_eq!(resized.y, win.y);
    assert_eq!(resized.height, win.height);
}

#[test]
fn resize_stops_at_min_size() {
    let mut ctl = WindowInteractionController::new(InteractionConfig {
        min_size: Size::new(640, 360),
        ..InteractionConfig::default()
    });
    let win = window();

    ctl.on_pointer_move(ev((3, 300), (103, 400)), win);
    ctl.on_pointer_down(ev((3, 300), (103, 400)), PointerButton::Primary);
    let resized = ctl
        .on_pointer_move(ev((3, 300), (603, 400)), win)
        .geometry
        .expect("resize changes geometry");
    assert_eq!(resized.width, 640);
    assert_eq!(resized.right(), win.right());
}

#[test]
fn clamped_right_edge_stays_under_pointer() {
    let mut ctl = WindowInteractionController::new(InteractionConfig {
        min_size: Size::new(700, 500),
        ..InteractionConfig::default()
    });
    let win = window();

    ctl.on_pointer_move(ev((797, 300), (897, 400)), win);
    ctl.on_pointer_down(ev((797, 300), (897, 400)), PointerButton::Primary);
    let clamped = ctl
        .on_pointer_move(ev((397, 300), (497, 400)), win)
        .geometry
        .unwrap();
    assert_eq!(clamped.width, 700);

    // Pointer comes back but is still left of the clamped edge: no growth
    let still = ctl
        .on_pointer_move(ev((407, 300), (507, 400)), clamped)
        .geometry
        .unwrap();
    assert_eq!(still.width, 700);

    // Passing the edge grows the window by the overshoot only
    let grown = ctl
        .on_pointer_move(ev((707, 300), (807, 400)), still)
        .geometry
        .unwrap();
    assert_eq!(grown.width, 710);
    assert_eq!(grown.x, win.x);
}

#[test]
fn clamped_left_edge_keeps_anchor_on_edge() {
    let mut ctl = WindowInteractionController::new(InteractionConfig {
        min_size: Size::new(640, 360),
        ..InteractionConfig::default()
    });
    let win = window();

    ctl.on_pointer_move(ev((3, 300), (103, 400)), win);
    ctl.on_pointer_down(ev((3, 300), (103, 400)), PointerButton::Primary);
    let clamped = ctl
        .on_pointer_move(ev((3, 300), (603, 400)), win)
        .geometry
        .unwrap();
    assert_eq!(clamped.x, 260);

    let back = ctl
        .on_pointer_move(ev((3, 300), (253, 400)), clamped)
        .geometry
        .unwrap();
    assert_eq!(back.x, 250);
    assert_eq!(back.width, 650);
    assert_eq!(back.right(), win.right());
}

#[test]
fn unclamped_resize_tracks_pointer() {
    let mut ctl = WindowInteractionController::default();
    let win = window();

    ctl.on_pointer_move(ev((797, 597), (897, 697)), win);
    ctl.on_pointer_down(ev((797, 597), (897, 697)), PointerButton::Primary);
    let first = ctl
        .on_pointer_move(ev((817, 587), (917, 687)), win)
        .geometry
        .unwrap();
    let second = ctl
        .on_pointer_move(ev((822, 592), (922, 692)), first)
        .geometry
        .unwrap();
    assert_eq!(second.width, win.width + 25);
    assert_eq!(second.height, win.height - 5);
}

#[test]
fn resize_direction_is_held_during_gesture() {
    let mut ctl = WindowInteractionController::default();
    let win = window();

    ctl.on_pointer_move(ev((3, 300), (103, 400)), win);
    ctl.on_pointer_down(ev((3, 300), (103, 400)), PointerButton::Primary);
    // Pointer wanders into the interior; the gesture keeps resizing the left edge
    let resp = ctl.on_pointer_move(ev((200, 200), (300, 300)), win);
    assert_eq!(resp.cursor, CursorShape::ResizeHorizontal);
    assert_eq!(ctl.latched_direction(), ResizeDirection::LEFT);
}

// === Release ===

#[test]
fn release_always_returns_to_idle() {
    let presses = [(3, 300), (100, 10), (400, 300), (798, 598)];
    for (x, y) in presses {
        let mut ctl = WindowInteractionController::default();
        let win = window();
        ctl.on_pointer_move(ev((x, y), (x + 100, y + 100)), win);
        ctl.on_pointer_down(ev((x, y), (x + 100, y + 100)), PointerButton::Primary);
        ctl.on_pointer_up();
        assert_eq!(ctl.state(), InteractionState::Idle);
        assert!(ctl.latched_direction().is_empty());
        assert_eq!(ctl.cursor(), CursorShape::Arrow);
    }
}

#[test]
fn release_reports_whether_a_gesture_ended() {
    let mut ctl = WindowInteractionController::default();
    assert!(!ctl.on_pointer_up().consumed);

    ctl.on_pointer_down(ev((100, 10), (100, 10)), PointerButton::Primary);
    assert!(ctl.on_pointer_up().consumed);
}
