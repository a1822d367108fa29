//! The canvas data model: item and connection collections.
//!
//! The board is the single writable source of truth for diagram layout.
//! Everything reads it; only the gesture handlers and the keyboard handler
//! (via [`crate::Editor`]) write it. All mutations are synchronous and
//! atomic under the single-threaded event model - no partial-update state is
//! observable between gestures.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_ITEM_SIZE, MIN_ITEM_SIZE};
use crate::geometry::{self, AnchorSide, Point};
use crate::types::{CanvasItem, Connection, ShapeKind};

/// Item and connection collections plus the id counter.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    /// Items in insertion order (also paint order)
    pub items: Vec<CanvasItem>,
    /// Directed connections between items
    pub connections: Vec<Connection>,
    /// Monotonic id source for new items
    next_item_id: u64,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a freshly dropped shape at the given canvas position.
    ///
    /// The new item gets the fixed palette drop size and the next monotonic
    /// id. Returns the id so callers can select or connect it.
    pub fn add_item(&mut self, kind: ShapeKind, position: (f32, f32)) -> u64 {
        let id = self.next_item_id;
        self.next_item_id += 1;
        self.items.push(CanvasItem {
            id,
            kind,
            position,
            size: DEFAULT_ITEM_SIZE,
        });
        debug!(id, kind = kind.label(), "item added");
        id
    }

    pub fn get_item(&self, id: u64) -> Option<&CanvasItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_item_mut(&mut self, id: u64) -> Option<&mut CanvasItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Remove an item and every connection that references it.
    ///
    /// This is the sole delete path, which is what keeps the connection set
    /// free of dangling endpoints.
    pub fn remove_item(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
        self.remove_connections_for(id);
        debug!(id, "item removed");
    }

    /// Move an item to an absolute canvas position. No bounds clamp.
    pub fn move_item(&mut self, id: u64, x: f32, y: f32) {
        if let Some(item) = self.get_item_mut(id) {
            item.position = (x, y);
        }
    }

    /// Resize an item to an absolute size, clamped to the 20x20 floor.
    pub fn resize_item(&mut self, id: u64, width: f32, height: f32) {
        if let Some(item) = self.get_item_mut(id) {
            item.size = (width.max(MIN_ITEM_SIZE), height.max(MIN_ITEM_SIZE));
        }
    }

    /// Append a directed connection. Self-loops are silently ignored;
    /// duplicates between the same ordered pair are allowed.
    pub fn add_connection(&mut self, from: u64, to: u64) {
        if from == to {
            return;
        }
        self.connections.push(Connection { from, to });
        debug!(from, to, "connection added");
    }

    /// Drop every connection referencing the given item on either end.
    pub fn remove_connections_for(&mut self, id: u64) {
        self.connections.retain(|conn| !conn.touches(id));
    }

    /// Resolve every connection to an elbow polyline for painting.
    ///
    /// Each connection leaves the source's right anchor and lands on the
    /// target's left anchor. Connections whose endpoints are not both
    /// present are skipped rather than routed.
    pub fn connection_paths(&self) -> Vec<[Point; 4]> {
        self.connections
            .iter()
            .filter_map(|conn| {
                let from = self.get_item(conn.from)?;
                let to = self.get_item(conn.to)?;
                let p1 = geometry::connector_anchor(from, AnchorSide::Right);
                let p2 = geometry::connector_anchor(to, AnchorSide::Left);
                Some(geometry::elbow_path(p1, p2))
            })
            .collect()
    }
}
