//! Background rotation behaviour.

use enlaut::animation::{Affine, BackgroundAnimator};
use enlaut::model::{Point, Rect, Size};

fn approx(a: (f32, f32), b: (f32, f32)) -> bool {
    (a.0 - b.0).abs() < 1e-3 && (a.1 - b.1).abs() < 1e-3
}

fn animator() -> BackgroundAnimator {
    BackgroundAnimator::new(Some(Size::new(100, 50)), Size::new(800, 600))
}

#[test]
fn full_turn_returns_to_zero() {
    let mut anim = animator();
    assert_eq!(anim.angle(), 0);
    for _ in 0..360 {
        anim.tick();
    }
    assert_eq!(anim.angle(), 0);
}

#[test]
fn angle_counts_down() {
    let mut anim = animator();
    anim.tick();
    assert_eq!(anim.angle(), 359);
    anim.tick();
    assert_eq!(anim.angle(), 358);
}

#[test]
fn angle_stays_in_range() {
    let mut anim = animator();
    for _ in 0..1000 {
        anim.tick();
        assert!(anim.angle() < 360);
    }
}

#[test]
fn image_centre_maps_to_pivot_at_every_angle() {
    let mut anim = animator();
    let pivot = BackgroundAnimator::pivot(Size::new(800, 600));
    assert_eq!(pivot, Point::new(0, 300));

    for _ in 0..12 {
        let frame = anim.frame().expect("image is loaded");
        let centre = frame.transform.apply(50.0, 25.0);
        assert!(approx(centre, (pivot.x as f32, pivot.y as f32)));
        for _ in 0..30 {
            anim.tick();
        }
    }
}

#[test]
fn rotation_is_counter_clockwise_on_screen() {
    let mut anim = animator();
    for _ in 0..90 {
        anim.tick();
    }
    assert_eq!(anim.angle(), 270);
    let frame = anim.frame().expect("image is loaded");
    // A point right of the centre ends up above the pivot
    let p = frame.transform.apply(60.0, 25.0);
    assert!(approx(p, (0.0, 290.0)));
}

#[test]
fn frame_is_clipped_to_viewport() {
    let mut anim = animator();
    assert_eq!(anim.frame().map(|f| f.clip), Some(Rect::new(0, 0, 800, 600)));

    anim.resize(Size::new(1024, 768));
    let frame = anim.frame().expect("image is loaded");
    assert_eq!(frame.clip, Rect::new(0, 0, 1024, 768));
    assert_eq!(frame.image, Size::new(100, 50));
    let pivot = BackgroundAnimator::pivot(Size::new(1024, 768));
    assert!(approx(
        frame.transform.apply(50.0, 25.0),
        (pivot.x as f32, pivot.y as f32)
    ));
}

#[test]
fn missing_image_still_ticks_without_frames() {
    let mut anim = BackgroundAnimator::new(None, Size::new(800, 600));
    assert!(!anim.has_image());
    assert!(anim.tick());
    assert_eq!(anim.angle(), 359);
    assert!(anim.frame().is_none());
}

#[test]
fn affine_composition_order() {
    let t = Affine::translation(10.0, 0.0).then(&Affine::rotation(90.0));
    // Translate first, then rotate: (0,0) -> (10,0) -> (0,10)
    assert!(approx(t.apply(0.0, 0.0), (0.0, 10.0)));
}
