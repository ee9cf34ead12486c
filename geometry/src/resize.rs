//! Pure resize/drag algebra with boundary clamping.
//!
//! All functions are deterministic given their inputs and share no state.
//! Two invariants hold for every output rectangle: neither dimension drops
//! below `min_size` (the minimum always wins over the pointer-implied
//! size), and the position never goes negative on either axis.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use crate::camera::Point;
use crate::handle::{Handle, XEdge, YEdge};
use crate::rect::Rect;

/// Resize `rect` by moving the edge(s) owned by `handle` to the pointer.
///
/// East/south edges grow from the fixed origin edge. West/north edges move
/// the near edge toward the pointer while the far edge stays fixed; the
/// near edge is clamped so it can neither cross the far edge (minus
/// `min_size`) nor leave the canvas at 0.
#[must_use]
pub fn resize(rect: Rect, handle: Handle, pointer: Point, min_size: f64) -> Rect {
    let mut out = rect;
    match handle.x_edge() {
        Some(XEdge::East) => {
            out.width = (pointer.x - rect.x).max(min_size);
        }
        Some(XEdge::West) => {
            let far = rect.right();
            out.x = pointer.x.min(far - min_size).max(0.0);
            out.width = (far - pointer.x).max(min_size);
        }
        None => {}
    }
    match handle.y_edge() {
        Some(YEdge::South) => {
            out.height = (pointer.y - rect.y).max(min_size);
        }
        Some(YEdge::North) => {
            let far = rect.bottom();
            out.y = pointer.y.min(far - min_size).max(0.0);
            out.height = (far - pointer.y).max(min_size);
        }
        None => {}
    }
    out
}

/// Move `rect` so its origin tracks the pointer minus the grab offset
/// recorded at pointer-down. Size is unchanged; each axis is independently
/// clamped to stay non-negative.
#[must_use]
pub fn drag(rect: Rect, pointer: Point, grab: Point) -> Rect {
    Rect {
        x: (pointer.x - grab.x).max(0.0),
        y: (pointer.y - grab.y).max(0.0),
        ..rect
    }
}
