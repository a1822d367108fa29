//! Unit tests for the geometry module.

use flowboard::geometry::{connector_anchor, elbow_path, AnchorSide, Point};
use flowboard::types::{CanvasItem, ShapeKind};

fn item(position: (f32, f32), size: (f32, f32)) -> CanvasItem {
    CanvasItem {
        id: 7,
        kind: ShapeKind::Diamond,
        position,
        size,
    }
}

#[test]
fn test_anchors_sit_on_edge_midpoints() {
    let it = item((10.0, 20.0), (40.0, 30.0));
    assert_eq!(connector_anchor(&it, AnchorSide::Right), Point::new(50.0, 35.0));
    assert_eq!(connector_anchor(&it, AnchorSide::Left), Point::new(10.0, 35.0));
}

#[test]
fn test_anchor_is_total_over_odd_items() {
    // Negative positions and floor-sized items still produce finite points.
    let it = item((-500.0, -300.0), (20.0, 20.0));
    let p = connector_anchor(&it, AnchorSide::Right);
    assert!(p.x.is_finite() && p.y.is_finite());
    assert_eq!(p, Point::new(-480.0, -290.0));
}

#[test]
fn test_elbow_path_shape() {
    let path = elbow_path(Point::new(180.0, 105.0), Point::new(300.0, 225.0));
    assert_eq!(path.len(), 4);
    assert_eq!(path[0], Point::new(180.0, 105.0));
    assert_eq!(path[1], Point::new(240.0, 105.0));
    assert_eq!(path[2], Point::new(240.0, 225.0));
    assert_eq!(path[3], Point::new(300.0, 225.0));
}

#[test]
fn test_elbow_segments_are_axis_aligned() {
    let path = elbow_path(Point::new(-20.0, 44.0), Point::new(133.0, -7.5));
    // horizontal, vertical, horizontal
    assert_eq!(path[0].y, path[1].y);
    assert_eq!(path[1].x, path[2].x);
    assert_eq!(path[2].y, path[3].y);
}

#[test]
fn test_elbow_bend_is_halfway() {
    let path = elbow_path(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    assert_eq!(path[1].x, 5.0);
    // Right-to-left connections bend halfway too.
    let back = elbow_path(Point::new(10.0, 10.0), Point::new(0.0, 0.0));
    assert_eq!(back[1].x, 5.0);
}
