//! Gesture state machine - unified state management for pointer gestures.
//!
//! A single explicit state machine instead of scattered option flags, so the
//! active gesture is always unambiguous.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> ResizingSidebar   (press on the sidebar divider)
//! Idle -> DraggingItem      (press on an item body; captures grab offset)
//! Idle -> ResizingItem      (press on an item's resize handle)
//!
//! Any  -> Idle              (pointer release - unconditional)
//! ```
//!
//! Connector linking never appears here: it is a latched two-click mode kept
//! on the editor (`connecting_from`), independent of pointer motion.

use crate::geometry::Point;

/// The active pointer gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InputState {
    /// No active pointer gesture
    #[default]
    Idle,

    /// Dragging the sidebar divider; each move sets the sidebar width from
    /// the pointer's x coordinate
    ResizingSidebar,

    /// Dragging an item across the canvas
    DraggingItem {
        /// Item being dragged
        item_id: u64,
        /// Offset from the item's screen origin to the pointer, captured
        /// once at press time; each move recomputes position from this,
        /// so drag never accumulates error
        grab_offset: Point,
    },

    /// Resizing an item from its bottom-right handle
    ResizingItem {
        /// Item being resized
        item_id: u64,
        /// Pointer position recorded on the previous move (or the press).
        /// Deltas accumulate incrementally against this, which makes resize
        /// drift-sensitive to dropped move events - unlike drag, which
        /// recomputes from the fixed grab offset
        last_pos: Point,
    },
}

impl InputState {
    /// Returns true if no gesture is active
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if the sidebar divider is being dragged
    pub fn is_resizing_sidebar(&self) -> bool {
        matches!(self, Self::ResizingSidebar)
    }

    /// Get the item id being dragged, if any
    pub fn dragging_item(&self) -> Option<u64> {
        match self {
            Self::DraggingItem { item_id, .. } => Some(*item_id),
            _ => None,
        }
    }

    /// Get the item id being resized, if any
    pub fn resizing_item(&self) -> Option<u64> {
        match self {
            Self::ResizingItem { item_id, .. } => Some(*item_id),
            _ => None,
        }
    }

    /// Reset to Idle
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Start a sidebar divider drag
    pub fn start_sidebar_resize(&mut self) {
        *self = Self::ResizingSidebar;
    }

    /// Start dragging an item
    pub fn start_dragging(&mut self, item_id: u64, grab_offset: Point) {
        *self = Self::DraggingItem { item_id, grab_offset };
    }

    /// Start resizing an item
    pub fn start_resizing(&mut self, item_id: u64, press_pos: Point) {
        *self = Self::ResizingItem {
            item_id,
            last_pos: press_pos,
        };
    }

    /// Advance the recorded pointer position of an active resize
    pub fn record_resize_pos(&mut self, pos: Point) {
        if let Self::ResizingItem { last_pos, .. } = self {
            *last_pos = pos;
        }
    }
}
