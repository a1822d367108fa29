//! Pointer and keyboard input handling for the canvas.
//!
//! This module implements all interaction logic for the Flowboard editor:
//! sidebar divider dragging, item dragging and resizing, two-click connector
//! linking, palette drops, and delete handling.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine ([`InputState`]) to track
//! the current pointer gesture, making impossible states unrepresentable.
//! Connector linking is intentionally *not* part of that machine: it is a
//! latched two-click protocol driven by discrete connector-handle clicks,
//! orthogonal to continuous pointer motion.
//!
//! Exactly one pointer gesture can be active at a time; each is gated on its
//! own originating [`HitRegion`](crate::events::HitRegion), so overlapping
//! presses cannot interleave. Handlers run to completion inside the event
//! loop - the engine assumes in-order move delivery (resize accumulates
//! incremental deltas, see `drag`).
//!
//! ## Modules
//!
//! - `state` - Gesture state machine enum and helper methods
//! - `pointer_down` - Press handling (gesture start, selection, latching)
//! - `drag` - Move handling (sidebar, drag and resize arithmetic)
//! - `pointer_up` - Release handling (unconditional gesture teardown)
//! - `drop` - Palette drop handling (payload parse, item creation)
//! - `keyboard` - Delete key handling (cascade removal)
//! - `coords` - Window-to-canvas coordinate conversion

pub mod coords;
mod drag;
mod drop;
mod keyboard;
mod pointer_down;
mod pointer_up;
mod state;

pub use state::InputState;
