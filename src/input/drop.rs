//! Palette drop handling - payload parse and item creation.

use tracing::warn;

use crate::editor::Editor;
use crate::events::DropEvent;
use crate::input::coords::CoordinateContext;
use crate::types::DragPayload;

impl Editor {
    /// Materialize a palette drop as a new canvas item.
    ///
    /// The drop carries the serialized payload string from drag-start. A
    /// malformed payload is logged and discarded - canvas state unchanged -
    /// rather than surfaced as an error; this is the only fallible input the
    /// engine consumes.
    ///
    /// Drops are an overlapping gesture sourced from the palette; they do
    /// not interact with the pointer state machine.
    pub fn handle_drop(&mut self, event: &DropEvent) {
        let payload: DragPayload = match serde_json::from_str(&event.payload) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "invalid drag payload, drop discarded");
                return;
            }
        };

        let ctx = CoordinateContext::new(self.sidebar_width);
        let canvas_pos = ctx.window_to_canvas(event.position);
        self.board
            .add_item(payload.kind, (canvas_pos.x, canvas_pos.y));
    }
}
