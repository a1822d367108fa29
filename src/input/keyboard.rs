//! Delete key handling - cascade removal of the selected item.

use crate::editor::Editor;
use crate::events::Key;

impl Editor {
    /// React to a key press.
    ///
    /// Delete removes the selected item together with every connection that
    /// references it on either end, then clears the selection; this cascade
    /// is what keeps the connection set free of dangling endpoints. With no
    /// selection it is a no-op. Every other key - Escape included - is
    /// ignored: there is no cancel gesture.
    pub fn handle_key_down(&mut self, key: Key) {
        match key {
            Key::Delete => {
                if let Some(id) = self.selected_item.take() {
                    self.board.remove_item(id);
                }
            }
            _ => {}
        }
    }
}
