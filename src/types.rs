//! Core types for the Flowboard canvas system.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: canvas items, connections between them, and the payload a palette
//! drag carries across the drop boundary.

use serde::{Deserialize, Serialize};

/// Shape templates available in the palette.
///
/// The palette itself (layout, styling, drag affordances) belongs to the
/// render collaborator; the engine only cares which template a drop carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Diamond,
    Parallelogram,
    Arrow,
    Cylinder,
    Cloud,
    Stickman,
    Document,
    Database,
    Decision,
    InputOutput,
}

impl ShapeKind {
    /// All palette templates, in palette order.
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Rectangle,
            ShapeKind::Ellipse,
            ShapeKind::Diamond,
            ShapeKind::Parallelogram,
            ShapeKind::Arrow,
            ShapeKind::Cylinder,
            ShapeKind::Cloud,
            ShapeKind::Stickman,
            ShapeKind::Document,
            ShapeKind::Database,
            ShapeKind::Decision,
            ShapeKind::InputOutput,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Diamond => "Diamond",
            ShapeKind::Parallelogram => "Parallelogram",
            ShapeKind::Arrow => "Arrow",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Cloud => "Cloud",
            ShapeKind::Stickman => "Stickman",
            ShapeKind::Document => "Document",
            ShapeKind::Database => "Database",
            ShapeKind::Decision => "Decision",
            ShapeKind::InputOutput => "InputOutput",
        }
    }
}

/// An item placed on the canvas.
///
/// Position and size are in canvas-local coordinates (top-left origin).
/// Position is mutated in place during a drag gesture, size during a resize
/// gesture. Neither is clamped to the visible canvas; items may live outside
/// it. Size never goes below [`crate::constants::MIN_ITEM_SIZE`] on either
/// axis.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CanvasItem {
    /// Unique identifier for this item
    pub id: u64,
    /// Which palette template this item was created from
    pub kind: ShapeKind,
    /// Position on the canvas in canvas coordinates (x, y)
    pub position: (f32, f32),
    /// Size of the item in canvas units (width, height)
    pub size: (f32, f32),
}

/// A directed link between two canvas items.
///
/// Only distinctness of the endpoints is enforced at creation time;
/// duplicates between the same ordered pair are allowed. Connections can
/// never dangle because item deletion cascades through the connection set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Id of the source item (connector drawn from its right anchor)
    pub from: u64,
    /// Id of the target item (connector lands on its left anchor)
    pub to: u64,
}

impl Connection {
    /// Whether this connection references the given item on either end.
    pub fn touches(&self, id: u64) -> bool {
        self.from == id || self.to == id
    }
}

/// The serialized payload a palette drag carries.
///
/// The render collaborator serializes this to a string at drag-start and
/// hands the raw string back with the drop event; the drop handler parses it
/// and discards the drop if the string is malformed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    /// Which shape template is being dragged out of the palette
    pub kind: ShapeKind,
}

impl DragPayload {
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind }
    }

    /// Serialize for the drag channel (infallible for this type).
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
