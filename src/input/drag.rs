//! Move handling - sidebar, drag and resize arithmetic.
//!
//! Pointer moves arrive frequently during a gesture; each handler does the
//! minimal state update for the active gesture and returns early otherwise.
//!
//! Moves are assumed delivered in order. Drag tolerates dropped events (the
//! next move recomputes position from the fixed grab offset); resize does
//! not (deltas accumulate against the previously recorded pointer position),
//! an asymmetry the engine preserves deliberately.

use crate::constants::{MAX_SIDEBAR_WIDTH, MIN_SIDEBAR_WIDTH};
use crate::editor::Editor;
use crate::events::PointerMoveEvent;
use crate::input::coords::CoordinateContext;
use crate::input::state::InputState;

impl Editor {
    pub fn handle_pointer_move(&mut self, event: &PointerMoveEvent) {
        match self.input_state {
            InputState::ResizingSidebar => {
                self.sidebar_width = event
                    .position
                    .x
                    .clamp(MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH);
            }

            InputState::DraggingItem { item_id, grab_offset } => {
                // Position is always pointer minus the press-time offset,
                // converted to canvas coordinates. No bounds clamp: items
                // may be dragged outside the visible canvas.
                let ctx = CoordinateContext::new(self.sidebar_width);
                let canvas_pos = ctx.window_to_canvas(event.position);
                self.board.move_item(
                    item_id,
                    canvas_pos.x - grab_offset.x,
                    canvas_pos.y - grab_offset.y,
                );
            }

            InputState::ResizingItem { item_id, last_pos } => {
                let dx = event.position.x - last_pos.x;
                let dy = event.position.y - last_pos.y;

                if let Some(item) = self.board.get_item(item_id) {
                    let (width, height) = item.size;
                    // Floor clamp happens in the model; the recorded pointer
                    // position still advances, so pushing past the floor and
                    // pulling back grows the item again immediately.
                    self.board.resize_item(item_id, width + dx, height + dy);
                }
                self.input_state.record_resize_pos(event.position);
            }

            InputState::Idle => {}
        }
    }
}
