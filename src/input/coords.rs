//! Coordinate conversion utilities for canvas interactions.
//!
//! Pointer and drop events arrive in window coordinates; item layout lives
//! in canvas-local coordinates. The canvas starts to the right of the
//! sidebar and its divider, so the conversion depends on the current sidebar
//! width.

use crate::constants::DIVIDER_WIDTH;
use crate::geometry::Point;

/// Context needed for coordinate conversions.
pub struct CoordinateContext {
    /// Window position of the canvas's top-left corner
    pub canvas_origin: Point,
}

impl CoordinateContext {
    /// Build the context from the current sidebar width.
    #[inline]
    pub fn new(sidebar_width: f32) -> Self {
        Self {
            canvas_origin: Point::new(sidebar_width + DIVIDER_WIDTH, 0.0),
        }
    }

    /// Convert a window position to a canvas-local position.
    #[inline]
    pub fn window_to_canvas(&self, window_pos: Point) -> Point {
        Point::new(
            window_pos.x - self.canvas_origin.x,
            window_pos.y - self.canvas_origin.y,
        )
    }

    /// Convert a canvas-local position to a window position.
    #[inline]
    pub fn canvas_to_window(&self, canvas_pos: Point) -> Point {
        Point::new(
            canvas_pos.x + self.canvas_origin.x,
            canvas_pos.y + self.canvas_origin.y,
        )
    }
}
