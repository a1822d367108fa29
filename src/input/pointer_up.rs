//! Release handling - unconditional gesture teardown.

use crate::editor::Editor;
use crate::events::PointerUpEvent;

impl Editor {
    /// End the active gesture, whatever it is and wherever the pointer is.
    ///
    /// The reset is unconditional: a release outside the canvas (or with no
    /// gesture active) still lands here and still leaves the machine Idle,
    /// which is what lets the render collaborator detach its global
    /// move/release listeners on every exit path. A leaked listener would
    /// feed stale moves into the next gesture.
    ///
    /// The connector latch is untouched: it is not a pointer gesture and
    /// only a completing connector-handle click clears it.
    pub fn handle_pointer_up(&mut self, _event: &PointerUpEvent) {
        self.input_state.reset();
    }
}
