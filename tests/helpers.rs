use enlaut::{clamp_i32, tr_key};

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp_i32(10, 0, 20), 10);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp_i32(-1, 0, 1), 0);
    assert_eq!(clamp_i32(2, 0, 1), 1);
}

#[test]
fn clamp_prefers_low_bound_when_crossed() {
    assert_eq!(clamp_i32(5, 10, 0), 10);
    assert_eq!(clamp_i32(50, 10, 0), 10);
}

#[test]
fn tr_key_english() {
    assert_eq!(tr_key("My games", false), "My games");
    assert_eq!(tr_key("Play", false), "Play");
}

#[test]
fn tr_key_russian() {
    assert_eq!(tr_key("My games", true), "Мои игры");
    assert_eq!(tr_key("Game details", true), "Детали игры");
    assert_eq!(tr_key("Play", true), "Играть");
}

#[test]
fn tr_key_unknown_returns_key() {
    assert_eq!(tr_key("Unknown key", true), "Unknown key");
    assert_eq!(tr_key("Unknown key", false), "Unknown key");
}
