//! Pointer move handling - node dragging, panning, connection preview.
//!
//! Pointer move fires on every mouse movement, so non-drag states exit
//! early and each drag re-anchors incrementally to the latest position.

use crate::app::Layerboard;
use crate::input::InteractionState;
use crate::profile_scope;
use crate::types::Point;
use tracing::debug;

impl Layerboard {
    pub(crate) fn handle_pointer_move(&mut self, position: Point) -> bool {
        profile_scope!("handle_pointer_move");

        let viewport = self.canvas.viewport;
        match &mut self.canvas.input_state {
            InteractionState::Idle | InteractionState::EditingText { .. } => false,

            InteractionState::DraggingNode { node_id, last_pos } => {
                // Screen delta divided by scale; offset plays no part in a delta
                let delta = viewport.delta_to_logical(position.delta_from(*last_pos));
                let Some(node) = self.diagram.node(node_id) else {
                    debug!(node = %node_id, "Dragged node vanished, resetting");
                    self.canvas.input_state.reset();
                    return true;
                };
                let (x, y) = (node.x + delta.x, node.y + delta.y);
                if self.diagram.move_node(node_id, x, y).is_err() {
                    return false;
                }
                *last_pos = position;
                true
            }

            InteractionState::Panning { last_pos } => {
                // Offset is already in screen space: no scale division
                self.canvas.viewport = viewport.panned_by(position.delta_from(*last_pos));
                *last_pos = position;
                true
            }

            InteractionState::DrawingConnection {
                cursor,
                loose_connection,
                ..
            } => {
                *cursor = position;
                if let Some(id) = loose_connection {
                    if let Err(e) = self.diagram.update_loose_end(id, viewport.to_logical(position)) {
                        debug!(reason = %e, "Loose end update rejected");
                    }
                }
                true
            }
        }
    }
}
