#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::MIN_RECT_SIZE;

// --- Edges ---

#[test]
fn right_and_bottom() {
    let r = Rect::new(50.0, 50.0, 200.0, 150.0);
    assert_eq!(r.right(), 250.0);
    assert_eq!(r.bottom(), 200.0);
}

// --- sanitize ---

#[test]
fn sanitize_rounds_all_fields() {
    let r = Rect::new(10.4, 10.6, 100.5, 99.4).sanitize(MIN_RECT_SIZE);
    assert_eq!(r, Rect::new(10.0, 11.0, 101.0, 99.0));
}

#[test]
fn sanitize_clamps_negative_position() {
    let r = Rect::new(-3.0, -0.4, 100.0, 100.0).sanitize(MIN_RECT_SIZE);
    assert_eq!(r.x, 0.0);
    assert_eq!(r.y, 0.0);
}

#[test]
fn sanitize_enforces_minimum_size() {
    let r = Rect::new(5.0, 5.0, 2.0, -40.0).sanitize(MIN_RECT_SIZE);
    assert_eq!(r.width, MIN_RECT_SIZE);
    assert_eq!(r.height, MIN_RECT_SIZE);
}

#[test]
fn sanitize_is_idempotent() {
    let inputs = [
        Rect::new(10.4, -3.2, 0.5, 199.9),
        Rect::new(-100.0, 0.0, 10.0, 10.0),
        Rect::new(0.49, 0.51, 10.49, 10.51),
        Rect::new(50.0, 50.0, 200.0, 150.0),
    ];
    for r in inputs {
        let once = r.sanitize(MIN_RECT_SIZE);
        assert_eq!(once.sanitize(MIN_RECT_SIZE), once, "not idempotent for {r:?}");
    }
}

#[test]
fn sanitize_preserves_valid_integers() {
    let r = Rect::new(50.0, 50.0, 200.0, 150.0);
    assert_eq!(r.sanitize(MIN_RECT_SIZE), r);
}

// --- Wire conversions ---

#[test]
fn rect_to_size_location_rounds() {
    let wire = SizeLocation::from(Rect::new(10.4, 10.6, 100.5, 99.4));
    assert_eq!(wire, SizeLocation { x: 10, y: 11, width: 101, height: 99 });
}

#[test]
fn size_location_round_trips_through_rect() {
    let wire = SizeLocation { x: 10, y: 10, width: 300, height: 200 };
    assert_eq!(SizeLocation::from(Rect::from(wire)), wire);
}

// --- JSON shape ---

#[test]
fn size_location_serializes_flat_lowercase() {
    let wire = SizeLocation { x: 1, y: 2, width: 3, height: 4 };
    let json = serde_json::to_value(wire).expect("serialize");
    assert_eq!(json, serde_json::json!({"x": 1, "y": 2, "width": 3, "height": 4}));
}

#[test]
fn size_deserializes_from_wire_json() {
    let limits: Size = serde_json::from_str(r#"{"width":400,"height":400}"#).expect("deserialize");
    assert_eq!(limits, Size { width: 400, height: 400 });
}

#[test]
fn rect_serde_round_trip() {
    let r = Rect::new(50.0, 50.0, 200.0, 150.0);
    let json = serde_json::to_string(&r).expect("serialize");
    let back: Rect = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, r);
}
