//! Connector routing geometry.
//!
//! Pure functions deriving connector endpoints and paths from item layout.
//! Invoked on every repaint; nothing here holds state.

use serde::{Deserialize, Serialize};

use crate::types::CanvasItem;

/// A point in canvas or window coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Which boundary anchor of an item a connector attaches to.
///
/// Connectors leave an item from its right edge midpoint and arrive at the
/// target's left edge midpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorSide {
    Left,
    Right,
}

/// The fixed point on an item's boundary used as a connection endpoint.
///
/// Total over finite items: any finite position/size yields a finite point.
pub fn connector_anchor(item: &CanvasItem, side: AnchorSide) -> Point {
    let (x, y) = item.position;
    let (width, height) = item.size;
    match side {
        AnchorSide::Right => Point::new(x + width, y + height / 2.0),
        AnchorSide::Left => Point::new(x, y + height / 2.0),
    }
}

/// Route a single-bend orthogonal polyline between two anchors.
///
/// The path is always the 4-point polyline
/// `p1 -> (mid_x, p1.y) -> (mid_x, p2.y) -> p2` with `mid_x` halfway between
/// the endpoints. Known limitation: this is a fixed single elbow, not full
/// orthogonal routing - it does not avoid obstacles and degenerates to
/// overlapping segments when the endpoints share an x or y coordinate.
pub fn elbow_path(p1: Point, p2: Point) -> [Point; 4] {
    let mid_x = (p1.x + p2.x) / 2.0;
    [
        p1,
        Point::new(mid_x, p1.y),
        Point::new(mid_x, p2.y),
        p2,
    ]
}
