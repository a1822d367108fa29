//! Flowboard - the interaction core of a diagram editor.
//!
//! This crate is headless: it owns the canvas data model (items and
//! connections), the pointer-driven gesture state machine (sidebar resize,
//! item drag, item resize, two-click connector linking), and the connector
//! routing geometry. Rendering is an external collaborator that paints from
//! the [`Editor`] and feeds raw pointer/keyboard events back in, tagged with
//! the UI region they originated from.
//!
//! ## Architecture
//!
//! - `types` - Core model types (items, connections, drag payloads)
//! - `constants` - Layout and interaction constants
//! - `geometry` - Connector anchors and elbow path routing (pure functions)
//! - `board` - The canvas data model and its mutators
//! - `events` - The event surface consumed from the render collaborator
//! - `editor` - The `Editor` controller owning model + gesture state
//! - `input` - Gesture state machine and per-phase event handlers
//!
//! All event handlers are synchronous state transitions on `&mut Editor`;
//! the crate assumes the single-threaded, run-to-completion event model of
//! a UI event loop.

pub mod board;
pub mod constants;
pub mod editor;
pub mod events;
pub mod geometry;
pub mod input;
pub mod types;

pub use board::Board;
pub use editor::Editor;
pub use events::{DropEvent, HitRegion, Key, PointerDownEvent, PointerMoveEvent, PointerUpEvent};
pub use geometry::{AnchorSide, Point, connector_anchor, elbow_path};
pub use input::InputState;
pub use types::{CanvasItem, Connection, DragPayload, ShapeKind};
