//! Shared numeric constants for the geometry crate.

use crate::rect::Rect;

// ── Geometry invariants ─────────────────────────────────────────

/// Smallest width/height a rectangle may reach, in canvas units.
pub const MIN_RECT_SIZE: f64 = 10.0;

// ── Defaults ────────────────────────────────────────────────────

/// Rectangle shown before (or instead of) the remote copy: used on first
/// render and kept when the initial load fails.
pub const DEFAULT_RECT: Rect = Rect { x: 50.0, y: 50.0, width: 200.0, height: 150.0 };
