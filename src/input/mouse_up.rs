//! Pointer up handling - finalize connection drawing, leave drag modes.

use crate::app::{Layerboard, Selection, absorb};
use crate::diagram::LooseOutcome;
use crate::input::InteractionState;
use crate::types::{ConnectionId, HandleDirection, NodeId, Point};
use tracing::debug;

impl Layerboard {
    pub(crate) fn handle_pointer_up(&mut self, position: Point) -> bool {
        match std::mem::take(&mut self.canvas.input_state) {
            InteractionState::Idle => false,
            // Releasing the button does not end inline editing
            editing @ InteractionState::EditingText { .. } => {
                self.canvas.input_state = editing;
                false
            }
            InteractionState::Panning { .. } | InteractionState::DraggingNode { .. } => true,
            InteractionState::DrawingConnection {
                origin,
                handle,
                loose_connection,
                ..
            } => {
                self.finish_connection(origin, handle, loose_connection, position);
                true
            }
        }
    }

    fn finish_connection(
        &mut self,
        origin: NodeId,
        handle: Option<HandleDirection>,
        loose_connection: Option<ConnectionId>,
        position: Point,
    ) {
        let target = self.hit_tester().node_at(position);
        let logical = self.canvas.viewport.to_logical(position);

        match (loose_connection, target) {
            // Re-dragged loose end dropped on a node
            (Some(id), Some(target)) => match absorb(self.diagram.finalize_loose(&id, &target)) {
                Some(LooseOutcome::Attached(id)) => {
                    debug!(connection = %id, to = %target, "Loose connection attached");
                }
                Some(LooseOutcome::Discarded(reason)) => {
                    debug!(connection = %id, reason = %reason, "Loose connection discarded");
                    if self.canvas.selection.connection_id() == Some(&id) {
                        self.canvas.selection = Selection::None;
                    }
                }
                None => {}
            },
            // Re-dragged loose end dropped on empty canvas: it stays loose there
            (Some(id), None) => {
                absorb(self.diagram.update_loose_end(&id, logical));
            }
            (None, Some(target)) => {
                if let Some(connection) =
                    absorb(self.diagram.connect_with_handles(&origin, &target, handle, None))
                {
                    debug!(connection = %connection.id, from = %origin, to = %target, "Connected");
                }
            }
            (None, None) if self.settings.loose_endpoints_allowed => {
                if let Some(connection) =
                    absorb(self.diagram.start_loose_connection(&origin, logical, handle))
                {
                    debug!(connection = %connection.id, from = %origin, "Loose connection dropped");
                }
            }
            (None, None) => {
                debug!(from = %origin, "Connection attempt discarded");
            }
        }
    }
}
