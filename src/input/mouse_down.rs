//! Pointer down handling - hit resolution and mode entry.
//!
//! Resolution priority (see `hit_testing`):
//! handle -> loose end -> node body -> connection line -> background.
//!
//! In click-to-link mode handles act as their node's body, and node and
//! background presses also feed the pending link source.

use crate::app::{Layerboard, Selection, absorb};
use crate::hit_testing::HitTarget;
use crate::profile_scope;
use crate::settings::ConnectionInitiation;
use crate::types::{NodeId, Point};
use tracing::debug;

impl Layerboard {
    pub(crate) fn handle_pointer_down(&mut self, position: Point) -> bool {
        profile_scope!("handle_pointer_down");

        // A press inside the node being edited only moves the caret; any
        // other press blurs the editor first.
        if let Some(editing) = self.canvas.input_state.editing_node_id().cloned() {
            if self.hit_tester().node_at(position).as_ref() == Some(&editing) {
                return false;
            }
            self.finish_text_editing();
        } else if !self.canvas.input_state.is_idle() {
            // The previous release never arrived (e.g. outside the window)
            debug!(state = ?self.canvas.input_state, "Dropping stale interaction");
            self.canvas.input_state.reset();
        }

        let linking = self.settings.connection_initiation == ConnectionInitiation::ClickToLink;
        let target = self.hit_tester().hit_test(position);
        match target {
            HitTarget::Handle { node_id, .. } if linking => {
                self.press_node(node_id, position);
            }
            HitTarget::Handle { node_id, direction } => {
                self.canvas
                    .input_state
                    .start_drawing(node_id, Some(direction), position, None);
            }
            HitTarget::LooseEnd(connection_id) => {
                let Some(connection) = self.diagram.connection(&connection_id) else {
                    return false;
                };
                let origin = connection.from_node_id.clone();
                let handle = connection.from_handle;
                self.canvas.selection = Selection::Connection(connection_id.clone());
                self.canvas
                    .input_state
                    .start_drawing(origin, handle, position, Some(connection_id));
            }
            HitTarget::Node(node_id) => {
                self.press_node(node_id, position);
            }
            HitTarget::Connection(connection_id) => {
                self.canvas.selection = Selection::Connection(connection_id);
            }
            HitTarget::Background => {
                if linking && self.drop_pending_link(position) {
                    return true;
                }
                self.canvas.pending_link = None;
                self.canvas.selection = Selection::None;
                self.canvas.input_state.start_panning(position);
            }
        }
        true
    }

    fn press_node(&mut self, node_id: NodeId, position: Point) {
        if self.settings.connection_initiation == ConnectionInitiation::ClickToLink {
            self.link_to(&node_id);
        }
        self.canvas.selection = Selection::Node(node_id.clone());
        self.canvas.input_state.start_dragging(node_id, position);
    }

    /// Connect the pending source to `target`, then make `target` the source
    fn link_to(&mut self, target: &NodeId) {
        if let Some(from) = self.canvas.pending_link.take() {
            if &from != target {
                if let Some(connection) = absorb(self.diagram.connect(&from, target)) {
                    debug!(connection = %connection.id, from = %from, to = %target, "Linked");
                }
            }
        }
        self.canvas.pending_link = Some(target.clone());
    }

    /// Drop a loose end from the pending source. Returns false when there is
    /// no source or loose ends are disabled.
    fn drop_pending_link(&mut self, position: Point) -> bool {
        if !self.settings.loose_endpoints_allowed {
            return false;
        }
        let Some(from) = self.canvas.pending_link.clone() else {
            return false;
        };
        let logical = self.canvas.viewport.to_logical(position);
        match absorb(self.diagram.start_loose_connection(&from, logical, None)) {
            Some(connection) => {
                debug!(connection = %connection.id, from = %from, "Loose link dropped");
                true
            }
            None => {
                self.canvas.pending_link = None;
                false
            }
        }
    }
}
