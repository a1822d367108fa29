//! Press handling - gesture start, selection, connector latching.

use tracing::debug;

use crate::editor::Editor;
use crate::events::{HitRegion, PointerDownEvent};
use crate::geometry::Point;
use crate::input::coords::CoordinateContext;

impl Editor {
    /// Interpret a pointer press against the region it landed on.
    ///
    /// Each gesture is gated on its own originating region, so at most one
    /// pointer gesture starts per press. After a press that starts a
    /// gesture, [`Editor::wants_pointer_tracking`] turns true and the render
    /// collaborator must route global move/release events here until it
    /// turns false again.
    pub fn handle_pointer_down(&mut self, event: &PointerDownEvent) {
        match event.region {
            HitRegion::SidebarDivider => {
                self.input_state.start_sidebar_resize();
            }
            HitRegion::ItemBody(item_id) => {
                self.selected_item = Some(item_id);

                let Some(item) = self.board.get_item(item_id) else {
                    return;
                };
                let ctx = CoordinateContext::new(self.sidebar_width);
                let item_origin = ctx.canvas_to_window(Point::new(item.position.0, item.position.1));

                // Captured once; every move recomputes position from it.
                let grab_offset = Point::new(
                    event.position.x - item_origin.x,
                    event.position.y - item_origin.y,
                );
                self.input_state.start_dragging(item_id, grab_offset);
            }
            HitRegion::ResizeHandle(item_id) => {
                // Resize does not select the item.
                self.input_state.start_resizing(item_id, event.position);
            }
            HitRegion::ConnectorHandle(item_id) => {
                self.handle_connector_click(item_id);
            }
            HitRegion::CanvasBackground => {
                // Inert: no gesture starts and selection is left alone.
            }
        }
    }

    /// The two-click connector protocol, driven by discrete handle clicks.
    ///
    /// First click latches the source; a later click on a *different* item's
    /// handle completes the connection and clears the latch. Clicking the
    /// source's own handle again is silently ignored (the latch persists) -
    /// self-loops can never be created. There is no cancel path.
    fn handle_connector_click(&mut self, item_id: u64) {
        match self.connecting_from {
            Some(source_id) if source_id != item_id => {
                self.board.add_connection(source_id, item_id);
                self.connecting_from = None;
            }
            Some(_) => {
                // Same item: stay latched.
            }
            None => {
                debug!(source = item_id, "connector latched");
                self.connecting_from = Some(item_id);
            }
        }
    }
}
