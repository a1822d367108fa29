//! Two-click connector protocol tests.

use flowboard::events::Key;
use flowboard::types::{Connection, ShapeKind};

use crate::helpers::*;

#[test]
fn test_two_clicks_create_a_directed_connection() {
    let mut editor = TestEditorBuilder::new()
        .with_item(ShapeKind::Rectangle, (0.0, 0.0))
        .with_item(ShapeKind::Ellipse, (300.0, 100.0))
        .build();
    let a = item_id(&editor, 0);
    let b = item_id(&editor, 1);

    click_connector(&mut editor, a);
    assert_eq!(editor.connecting_from(), Some(a));
    assert!(editor.board.connections.is_empty());

    click_connector(&mut editor, b);
    assert_eq!(editor.board.connections, vec![Connection { from: a, to: b }]);
    assert_eq!(editor.connecting_from(), None);
}

#[test]
fn test_self_click_is_ignored_and_latch_persists() {
    let mut editor = TestEditorBuilder::new()
        .with_item(ShapeKind::Decision, (0.0, 0.0))
        .with_item(ShapeKind::Document, (200.0, 0.0))
        .build();
    let a = item_id(&editor, 0);
    let b = item_id(&editor, 1);

    click_connector(&mut editor, a);
    click_connector(&mut editor, a);

    assert!(editor.board.connections.is_empty());
    assert_eq!(editor.connecting_from(), Some(a));

    // The latch is still live: a different target completes it.
    click_connector(&mut editor, b);
    assert_eq!(editor.board.connections, vec![Connection { from: a, to: b }]);
}

#[test]
fn test_escape_does_not_cancel_the_latch() {
    let mut editor = TestEditorBuilder::new()
        .with_item(ShapeKind::Cloud, (0.0, 0.0))
        .build();
    let a = item_id(&editor, 0);

    click_connector(&mut editor, a);
    editor.handle_key_down(Key::Escape);
    assert_eq!(editor.connecting_from(), Some(a));
}

#[test]
fn test_latch_survives_an_interleaved_drag() {
    let mut editor = TestEditorBuilder::new()
        .with_item(ShapeKind::Rectangle, (0.0, 0.0))
        .with_item(ShapeKind::Ellipse, (300.0, 0.0))
        .build();
    let a = item_id(&editor, 0);
    let b = item_id(&editor, 1);

    // Latched mode is orthogonal to pointer gestures: dragging the target
    // around before the second click neither clears nor completes it.
    click_connector(&mut editor, a);
    drag_item(&mut editor, b, (10.0, 10.0), &[(400.0, 150.0)]);
    assert_eq!(editor.connecting_from(), Some(a));

    click_connector(&mut editor, b);
    assert_eq!(editor.board.connections, vec![Connection { from: a, to: b }]);
}

#[test]
fn test_opposite_directions_are_distinct_connections() {
    let mut editor = TestEditorBuilder::new()
        .with_item(ShapeKind::Database, (0.0, 0.0))
        .with_item(ShapeKind::InputOutput, (250.0, 50.0))
        .build();
    let a = item_id(&editor, 0);
    let b = item_id(&editor, 1);

    click_connector(&mut editor, a);
    click_connector(&mut editor, b);
    click_connector(&mut editor, b);
    click_connector(&mut editor, a);

    assert_eq!(
        editor.board.connections,
        vec![Connection { from: a, to: b }, Connection { from: b, to: a }]
    );
}
