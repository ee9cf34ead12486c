//! Top-level gesture engine: pointer events in, actions out.
//!
//! `DrawerCore` owns the working rectangle, the canvas transform, and the
//! gesture state, and contains no I/O — the host decides what to do with
//! the returned [`Action`]s. Pointer handlers never block: a move is pure
//! arithmetic, and committing is only *requested* here, never performed.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::camera::{CanvasTransform, Point};
use crate::consts::{DEFAULT_RECT, MIN_RECT_SIZE};
use crate::handle::Handle;
use crate::input::Gesture;
use crate::rect::Rect;
use crate::resize;

/// What the host should do after feeding an event to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Nothing changed.
    None,
    /// The rectangle changed; re-render.
    RectChanged,
    /// A gesture finished; persist the enclosed rectangle.
    CommitRequested(Rect),
}

/// Core engine state for one rectangle drawer.
#[derive(Debug, Clone)]
pub struct DrawerCore {
    rect: Rect,
    transform: Option<CanvasTransform>,
    gesture: Gesture,
    min_size: f64,
}

impl Default for DrawerCore {
    fn default() -> Self {
        Self {
            rect: DEFAULT_RECT,
            transform: None,
            gesture: Gesture::Idle,
            min_size: MIN_RECT_SIZE,
        }
    }
}

impl DrawerCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    /// The current working rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The current gesture state.
    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// The minimum rectangle dimension this engine enforces.
    #[must_use]
    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    // --- Data inputs ---

    /// Replace the working rectangle, e.g. when adopting the remote copy
    /// or applying a numeric edit. Does not touch an in-progress gesture.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Record the canvas's current screen transform. Called whenever the
    /// canvas mounts, resizes, or re-fits its viewport.
    pub fn set_transform(&mut self, transform: CanvasTransform) {
        self.transform = Some(transform);
    }

    /// Forget the canvas transform (canvas unmounted). Pointer events
    /// become silent no-ops until a new transform is set.
    pub fn clear_transform(&mut self) {
        self.transform = None;
    }

    // --- Pointer events ---

    /// Begin a gesture: a resize when `handle` is given, a body drag
    /// otherwise. A no-op while another gesture is active or when the
    /// canvas transform is unknown.
    pub fn on_pointer_down(&mut self, screen: Point, handle: Option<Handle>) -> Action {
        if !self.gesture.is_idle() {
            return Action::None;
        }
        let Some(local) = self.to_local(screen) else {
            return Action::None;
        };
        self.gesture = match handle {
            Some(handle) => Gesture::Resizing { handle },
            None => Gesture::Dragging {
                grab: Point::new(local.x - self.rect.x, local.y - self.rect.y),
            },
        };
        Action::None
    }

    /// Advance the active gesture to the pointer's new position. A no-op
    /// when idle. May fire at pointer-move frequency; pure arithmetic only.
    pub fn on_pointer_move(&mut self, screen: Point) -> Action {
        let Some(local) = self.to_local(screen) else {
            return Action::None;
        };
        match self.gesture {
            Gesture::Idle => Action::None,
            Gesture::Dragging { grab } => {
                self.rect = resize::drag(self.rect, local, grab);
                Action::RectChanged
            }
            Gesture::Resizing { handle } => {
                self.rect = resize::resize(self.rect, handle, local, self.min_size);
                Action::RectChanged
            }
        }
    }

    /// End the active gesture and request a commit of its result.
    pub fn on_pointer_up(&mut self) -> Action {
        if self.gesture.is_idle() {
            return Action::None;
        }
        self.gesture = Gesture::Idle;
        Action::CommitRequested(self.rect)
    }

    /// The pointer left the canvas: commits exactly like a pointer-up.
    /// The in-progress rectangle is kept, not rolled back.
    pub fn on_pointer_leave(&mut self) -> Action {
        self.on_pointer_up()
    }

    fn to_local(&self, screen: Point) -> Option<Point> {
        self.transform.map(|t| t.screen_to_canvas(screen))
    }
}
