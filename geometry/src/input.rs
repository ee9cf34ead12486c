//! The gesture state machine.
//!
//! A gesture is created on pointer-down, consumed by every pointer-move,
//! and destroyed on pointer-up or pointer-leave. The only legal
//! transitions are `Idle → Dragging → Idle` and `Idle → Resizing → Idle`;
//! leaving the canvas mid-gesture ends the gesture exactly like a
//! pointer-up (the in-progress rectangle is kept, not rolled back).

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::handle::Handle;

/// The active gesture being tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// The rectangle body is being moved.
    Dragging {
        /// Canvas-local offset from the rectangle origin to the pointer at
        /// pointer-down, kept so the rectangle doesn't jump to the cursor.
        grab: Point,
    },
    /// One of the eight handles is being dragged.
    Resizing {
        /// The handle that initiated the resize; fixed for the whole gesture.
        handle: Handle,
    },
}

impl Default for Gesture {
    fn default() -> Self {
        Self::Idle
    }
}

impl Gesture {
    /// Whether no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
