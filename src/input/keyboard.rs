//! Keyboard, double click and inline text editing.
//!
//! Text edits are live: every keystroke streams the full text through
//! `set_node_text`, so leaving the editor has nothing left to commit.

use crate::app::{Layerboard, Selection};
use crate::input::Key;
use crate::types::Point;
use tracing::debug;

impl Layerboard {
    pub(crate) fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Escape => {
                self.canvas.input_state.reset();
                self.canvas.selection = Selection::None;
                self.canvas.pending_link = None;
                true
            }
            // While editing, these are keystrokes in the text box
            Key::Delete | Key::Backspace if self.canvas.input_state.is_editing_text() => false,
            Key::Delete | Key::Backspace => self.delete_selection(),
            Key::Other => false,
        }
    }

    /// Enter inline editing for the node under the pointer
    pub(crate) fn handle_double_click(&mut self, position: Point) -> bool {
        let Some(node_id) = self.hit_tester().node_at(position) else {
            return false;
        };
        if self.canvas.input_state.editing_node_id() == Some(&node_id) {
            return false;
        }
        self.canvas.selection = Selection::Node(node_id.clone());
        debug!(node = %node_id, "Editing text");
        self.canvas.input_state.start_editing(node_id);
        true
    }

    pub(crate) fn handle_text_input(&mut self, text: String) -> bool {
        let Some(node_id) = self.canvas.input_state.editing_node_id() else {
            return false;
        };
        self.diagram.set_node_text(node_id, text).is_ok()
    }

    pub(crate) fn handle_blur(&mut self) -> bool {
        self.finish_text_editing()
    }

    /// Leave inline editing, if active
    pub(crate) fn finish_text_editing(&mut self) -> bool {
        if !self.canvas.input_state.is_editing_text() {
            return false;
        }
        self.canvas.input_state.reset();
        true
    }
}
