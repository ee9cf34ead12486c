#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

/// A point in either screen or canvas-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The canvas element's screen transform: per-axis scale plus offset.
///
/// `offset_x` / `offset_y` are in screen pixels; the scale factors map
/// canvas units to screen pixels (1.0 = unscaled). Rotation is not
/// supported — the canvas is only ever translated and scaled to fit its
/// viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, scale_x: 1.0, scale_y: 1.0 }
    }
}

impl CanvasTransform {
    /// Transform that letterboxes a `canvas_w` x `canvas_h` drawing area
    /// into a `view_w` x `view_h` viewport: uniform scale, centred.
    ///
    /// Degenerate dimensions (zero or negative) fall back to the identity
    /// transform rather than producing NaN scales.
    #[must_use]
    pub fn fit(view_w: f64, view_h: f64, canvas_w: f64, canvas_h: f64) -> Self {
        if view_w <= 0.0 || view_h <= 0.0 || canvas_w <= 0.0 || canvas_h <= 0.0 {
            return Self::default();
        }
        let scale = (view_w / canvas_w).min(view_h / canvas_h);
        Self {
            offset_x: (view_w - canvas_w * scale) * 0.5,
            offset_y: (view_h - canvas_h * scale) * 0.5,
            scale_x: scale,
            scale_y: scale,
        }
    }

    /// Convert a screen-space point to canvas-local coordinates.
    #[must_use]
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.offset_x) / self.scale_x,
            y: (screen.y - self.offset_y) / self.scale_y,
        }
    }

    /// Convert a canvas-local point to screen coordinates.
    #[must_use]
    pub fn canvas_to_screen(&self, local: Point) -> Point {
        Point {
            x: local.x * self.scale_x + self.offset_x,
            y: local.y * self.scale_y + self.offset_y,
        }
    }
}
