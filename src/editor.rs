//! Editor state - the controller that owns the board and gesture state.

use crate::board::Board;
use crate::constants::DEFAULT_SIDEBAR_WIDTH;
use crate::input::InputState;

/// The diagram editor controller.
///
/// State lives in two tiers:
///
/// - the observable model the render collaborator paints from: the [`Board`]
///   and the sidebar width;
/// - controller-private gesture state that never triggers a repaint by
///   itself: the input state machine, the selection reference, and the
///   latched connector source.
///
/// The split is deliberate. Selection and the connector latch change on
/// presses that already repaint for other reasons, and the gesture state is
/// an implementation detail of event interpretation; keeping them out of the
/// model avoids spurious repaint triggers.
pub struct Editor {
    /// The canvas data model (single writable source of truth)
    pub board: Board,
    /// Current sidebar width in pixels, clamped while divider-dragging
    pub sidebar_width: f32,
    /// Gesture state machine (controller-private)
    pub(crate) input_state: InputState,
    /// At most one selected item, set on item-body press (controller-private)
    pub(crate) selected_item: Option<u64>,
    /// Source of a connector being drawn two-click style; `None` when no
    /// linking is latched (controller-private)
    pub(crate) connecting_from: Option<u64>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            input_state: InputState::Idle,
            selected_item: None,
            connecting_from: None,
        }
    }

    /// Whether the given item should paint as selected.
    pub fn is_selected(&self, id: u64) -> bool {
        self.selected_item == Some(id)
    }

    /// The source item of an in-progress two-click connection, if any.
    pub fn connecting_from(&self) -> Option<u64> {
        self.connecting_from
    }

    /// Current gesture state (read-only; mutated by the input handlers).
    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    /// Whether the render collaborator should route global pointer
    /// move/release events to this editor.
    ///
    /// This is the scoped-listener contract: attach window-level tracking
    /// when a press starts a gesture, detach as soon as the gesture ends.
    /// [`Editor::handle_pointer_up`] resets the gesture unconditionally, so
    /// this goes false on every exit path, including releases outside the
    /// canvas.
    pub fn wants_pointer_tracking(&self) -> bool {
        !self.input_state.is_idle()
    }
}
