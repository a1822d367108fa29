//! The event surface consumed from the render collaborator.
//!
//! The engine is headless, so it defines its own event types instead of
//! consuming a windowing toolkit's. Pointer-down events arrive pre-tagged
//! with the UI region they originated from: hit testing is the render
//! collaborator's job (it knows where it painted things), disambiguating
//! the gesture is ours.

use crate::geometry::Point;

/// Which painted region a pointer-down landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitRegion {
    /// The draggable divider between the sidebar and the canvas
    SidebarDivider,
    /// The body of a placed item (starts a drag, sets selection)
    ItemBody(u64),
    /// An item's bottom-right resize handle
    ResizeHandle(u64),
    /// An item's connector handle (two-click linking protocol)
    ConnectorHandle(u64),
    /// Empty canvas
    CanvasBackground,
}

/// Pointer press, tagged with the region it originated from.
///
/// Positions are window coordinates; handlers convert to canvas-local
/// coordinates where the gesture needs them.
#[derive(Clone, Copy, Debug)]
pub struct PointerDownEvent {
    pub position: Point,
    pub region: HitRegion,
}

/// Pointer motion while tracking is active.
#[derive(Clone, Copy, Debug)]
pub struct PointerMoveEvent {
    pub position: Point,
}

/// Pointer release. May arrive with the pointer outside the canvas;
/// gestures end regardless.
#[derive(Clone, Copy, Debug)]
pub struct PointerUpEvent {
    pub position: Point,
}

/// A palette drop on the canvas, carrying the serialized
/// [`crate::types::DragPayload`] string from drag-start.
#[derive(Clone, Debug)]
pub struct DropEvent {
    pub position: Point,
    pub payload: String,
}

/// Keyboard keys the engine reacts to (or deliberately ignores).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Deletes the selected item and its connections
    Delete,
    /// No effect: there is no cancel gesture, a latched connector source
    /// stays latched until a valid second click completes it
    Escape,
}
