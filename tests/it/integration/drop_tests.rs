//! Palette drop tests.

use flowboard::types::ShapeKind;

use crate::helpers::*;

#[test]
fn test_drop_creates_item_at_canvas_coordinates() {
    let mut editor = TestEditorBuilder::new().build();

    // Canvas (100, 80) expressed in the window coordinates drops carry.
    let pos = window_point(&editor, 100.0, 80.0);
    editor.handle_drop(&shape_drop(pos.x, pos.y, ShapeKind::Rectangle));

    assert_eq!(editor.board.items.len(), 1);
    let item = &editor.board.items[0];
    assert_eq!(item.kind, ShapeKind::Rectangle);
    assert_eq!(item.position, (100.0, 80.0));
    assert_eq!(item.size, (80.0, 50.0));
}

#[test]
fn test_drop_respects_the_current_sidebar_width() {
    let mut editor = TestEditorBuilder::new().with_sidebar_width(400.0).build();

    let pos = window_point(&editor, 30.0, 40.0);
    editor.handle_drop(&shape_drop(pos.x, pos.y, ShapeKind::Ellipse));

    assert_eq!(editor.board.items[0].position, (30.0, 40.0));
}

#[test]
fn test_malformed_payload_is_discarded() {
    let mut editor = TestEditorBuilder::new().build();

    editor.handle_drop(&drop_event(300.0, 300.0, "not json at all"));
    editor.handle_drop(&drop_event(300.0, 300.0, r#"{"kind":"Hexagon"}"#));
    editor.handle_drop(&drop_event(300.0, 300.0, r#"{"wrong":"shape"}"#));

    assert!(editor.board.items.is_empty());
}

#[test]
fn test_drops_append_with_distinct_ids() {
    let mut editor = TestEditorBuilder::new().build();

    let pos = window_point(&editor, 0.0, 0.0);
    editor.handle_drop(&shape_drop(pos.x, pos.y, ShapeKind::Cloud));
    editor.handle_drop(&shape_drop(pos.x, pos.y, ShapeKind::Cloud));

    assert_eq!(editor.board.items.len(), 2);
    assert_ne!(editor.board.items[0].id, editor.board.items[1].id);
}
