//! Rectangle geometry and the integer wire representation.
//!
//! [`Rect`] is the local working copy mutated by gestures; its fields stay
//! fractional while a gesture is in progress. [`SizeLocation`] and [`Size`]
//! are the JSON payloads of the rectangle API — all fields integers — shared
//! by the server, the sync client, and the cli.

#[cfg(test)]
#[path = "rect_test.rs"]
mod rect_test;

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// X coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Normalize to the invariant form: every field rounded to an integer,
    /// position non-negative, dimensions at least `min_size`.
    ///
    /// Idempotent — sanitizing an already-sanitized rectangle is a no-op.
    #[must_use]
    pub fn sanitize(&self, min_size: f64) -> Self {
        Self {
            x: self.x.round().max(0.0),
            y: self.y.round().max(0.0),
            width: self.width.round().max(min_size),
            height: self.height.round().max(min_size),
        }
    }
}

impl From<SizeLocation> for Rect {
    #[allow(clippy::cast_precision_loss)]
    fn from(wire: SizeLocation) -> Self {
        Self {
            x: wire.x as f64,
            y: wire.y as f64,
            width: wire.width as f64,
            height: wire.height as f64,
        }
    }
}

/// Wire form of a rectangle: the body of `GET`/`POST
/// /api/rectangle/size-location`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeLocation {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl From<Rect> for SizeLocation {
    /// Rounds each field to the nearest integer. Callers sanitize first so
    /// the invariants (non-negative position, minimum size) already hold.
    #[allow(clippy::cast_possible_truncation)]
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x.round() as i64,
            y: rect.y.round() as i64,
            width: rect.width.round() as i64,
            height: rect.height.round() as i64,
        }
    }
}

/// Wire form of the server-side size limits: the body of `POST
/// /api/rectangle/limits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i64,
    pub height: i64,
}
