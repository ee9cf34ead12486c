#![allow(clippy::float_cmp)]

use super::*;
use crate::input::Gesture;

fn engine() -> DrawerCore {
    let mut core = DrawerCore::new();
    core.set_transform(CanvasTransform::default());
    core
}

// --- Defaults ---

#[test]
fn starts_idle_with_default_rect() {
    let core = DrawerCore::new();
    assert!(core.gesture().is_idle());
    assert_eq!(core.rect(), DEFAULT_RECT);
    assert_eq!(core.min_size(), MIN_RECT_SIZE);
}

// --- Missing transform ---

#[test]
fn pointer_events_are_noops_without_a_transform() {
    let mut core = DrawerCore::new();
    assert_eq!(core.on_pointer_down(Point::new(100.0, 100.0), None), Action::None);
    assert!(core.gesture().is_idle());
    assert_eq!(core.on_pointer_move(Point::new(150.0, 150.0)), Action::None);
    assert_eq!(core.rect(), DEFAULT_RECT);
}

#[test]
fn clear_transform_silences_a_live_canvas() {
    let mut core = engine();
    core.clear_transform();
    assert_eq!(core.on_pointer_down(Point::new(100.0, 100.0), None), Action::None);
    assert!(core.gesture().is_idle());
}

// --- Drag lifecycle ---

#[test]
fn drag_gesture_moves_rect_and_commits_on_up() {
    let mut core = engine();
    // Grab the body 10 units in from the origin.
    assert_eq!(core.on_pointer_down(Point::new(60.0, 60.0), None), Action::None);
    assert_eq!(core.gesture(), Gesture::Dragging { grab: Point::new(10.0, 10.0) });

    assert_eq!(core.on_pointer_move(Point::new(90.0, 40.0)), Action::RectChanged);
    assert_eq!(core.rect().x, 80.0);
    assert_eq!(core.rect().y, 30.0);
    assert_eq!(core.rect().width, 200.0);

    let committed = core.rect();
    assert_eq!(core.on_pointer_up(), Action::CommitRequested(committed));
    assert!(core.gesture().is_idle());
}

#[test]
fn drag_clamps_at_canvas_origin() {
    let mut core = engine();
    core.on_pointer_down(Point::new(60.0, 60.0), None);
    core.on_pointer_move(Point::new(90.0, 0.0));
    assert_eq!(core.rect().x, 80.0);
    assert_eq!(core.rect().y, 0.0);
}

// --- Resize lifecycle ---

#[test]
fn resize_gesture_tracks_handle_and_commits_on_up() {
    let mut core = engine();
    assert_eq!(core.on_pointer_down(Point::new(250.0, 200.0), Some(Handle::Se)), Action::None);
    assert_eq!(core.gesture(), Gesture::Resizing { handle: Handle::Se });

    assert_eq!(core.on_pointer_move(Point::new(300.0, 260.0)), Action::RectChanged);
    assert_eq!(core.rect().width, 250.0);
    assert_eq!(core.rect().height, 210.0);

    let committed = core.rect();
    assert_eq!(core.on_pointer_up(), Action::CommitRequested(committed));
    assert!(core.gesture().is_idle());
}

#[test]
fn pointer_leave_commits_like_pointer_up() {
    let mut core = engine();
    core.on_pointer_down(Point::new(250.0, 200.0), Some(Handle::E));
    core.on_pointer_move(Point::new(280.0, 200.0));
    let committed = core.rect();
    assert_eq!(core.on_pointer_leave(), Action::CommitRequested(committed));
    assert!(core.gesture().is_idle());
    assert_eq!(core.rect(), committed);
}

// --- Illegal transitions ---

#[test]
fn move_while_idle_is_a_noop() {
    let mut core = engine();
    assert_eq!(core.on_pointer_move(Point::new(300.0, 300.0)), Action::None);
    assert_eq!(core.rect(), DEFAULT_RECT);
}

#[test]
fn up_while_idle_commits_nothing() {
    let mut core = engine();
    assert_eq!(core.on_pointer_up(), Action::None);
    assert_eq!(core.on_pointer_leave(), Action::None);
}

#[test]
fn down_during_active_gesture_is_ignored() {
    let mut core = engine();
    core.on_pointer_down(Point::new(60.0, 60.0), None);
    let before = core.gesture();
    assert_eq!(core.on_pointer_down(Point::new(250.0, 200.0), Some(Handle::Se)), Action::None);
    assert_eq!(core.gesture(), before);
}

// --- Scaled canvas ---

#[test]
fn pointer_positions_are_mapped_through_the_transform() {
    let mut core = DrawerCore::new();
    // Canvas shown at half size: screen deltas count double in canvas units.
    core.set_transform(CanvasTransform::fit(400.0, 300.0, 800.0, 600.0));
    core.on_pointer_down(Point::new(30.0, 30.0), None);
    assert_eq!(core.gesture(), Gesture::Dragging { grab: Point::new(10.0, 10.0) });

    core.on_pointer_move(Point::new(50.0, 30.0));
    assert_eq!(core.rect().x, 90.0);
    assert_eq!(core.rect().y, 50.0);
}

// --- Direct mutation ---

#[test]
fn set_rect_replaces_the_working_rect() {
    let mut core = engine();
    let next = Rect::new(10.0, 10.0, 300.0, 200.0);
    core.set_rect(next);
    assert_eq!(core.rect(), next);
}
