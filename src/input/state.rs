//! Interaction state machine - one explicit mode for all pointer interactions.
//!
//! Exactly one mode is active at a time, so impossible combinations (panning
//! while dragging a node, two nodes in edit mode) cannot be represented.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DrawingConnection   (pointer down on a node handle or loose end)
//! Idle -> DraggingNode        (pointer down on a node body)
//! Idle -> Panning             (pointer down on empty canvas)
//! Idle -> EditingText         (double click on a node body)
//!
//! Panning/DraggingNode/DrawingConnection -> Idle   (pointer up, Escape)
//! EditingText -> Idle                              (blur, Escape, press elsewhere)
//! ```

use crate::types::{ConnectionId, HandleDirection, NodeId, Point};

/// Active canvas interaction mode. Positions are screen coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    /// No active interaction
    #[default]
    Idle,

    /// Dragging the background to pan the viewport
    Panning {
        /// Last pointer position for delta calculation
        last_pos: Point,
    },

    /// Dragging a node body
    DraggingNode {
        node_id: NodeId,
        /// Pointer position at the previous move (incremental anchor)
        last_pos: Point,
    },

    /// Dragging out a new connection, or re-dragging a loose endpoint
    DrawingConnection {
        /// Node the connection starts from
        origin: NodeId,
        /// Handle side the drag started on, if any
        handle: Option<HandleDirection>,
        /// Current pointer position for the preview line
        cursor: Point,
        /// Existing loose connection being re-dragged
        loose_connection: Option<ConnectionId>,
    },

    /// Inline text editing of one node
    EditingText { node_id: NodeId },
}

impl InteractionState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a pointer drag (pan, node drag, connection draw) is active
    pub fn is_dragging(&self) -> bool {
        matches!(
            self,
            Self::Panning { .. } | Self::DraggingNode { .. } | Self::DrawingConnection { .. }
        )
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    pub fn is_dragging_node(&self) -> bool {
        matches!(self, Self::DraggingNode { .. })
    }

    pub fn is_drawing_connection(&self) -> bool {
        matches!(self, Self::DrawingConnection { .. })
    }

    pub fn is_editing_text(&self) -> bool {
        matches!(self, Self::EditingText { .. })
    }

    /// Get the node being dragged, if any
    pub fn dragged_node_id(&self) -> Option<&NodeId> {
        match self {
            Self::DraggingNode { node_id, .. } => Some(node_id),
            _ => None,
        }
    }

    /// Get the node being edited, if any
    pub fn editing_node_id(&self) -> Option<&NodeId> {
        match self {
            Self::EditingText { node_id } => Some(node_id),
            _ => None,
        }
    }

    /// Get the preview cursor, if drawing a connection
    pub fn drawing_cursor(&self) -> Option<Point> {
        match self {
            Self::DrawingConnection { cursor, .. } => Some(*cursor),
            _ => None,
        }
    }

    /// Get the loose connection being re-dragged, if any
    pub fn loose_connection_id(&self) -> Option<&ConnectionId> {
        match self {
            Self::DrawingConnection {
                loose_connection, ..
            } => loose_connection.as_ref(),
            _ => None,
        }
    }

    /// Returns true if this state holds a reference to the node
    pub fn references_node(&self, id: &NodeId) -> bool {
        match self {
            Self::DraggingNode { node_id, .. } | Self::EditingText { node_id } => node_id == id,
            Self::DrawingConnection { origin, .. } => origin == id,
            Self::Idle | Self::Panning { .. } => false,
        }
    }

    /// Reset to Idle state, dropping all drag/draw bookkeeping
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn start_panning(&mut self, pos: Point) {
        *self = Self::Panning { last_pos: pos };
    }

    pub fn start_dragging(&mut self, node_id: NodeId, pos: Point) {
        *self = Self::DraggingNode {
            node_id,
            last_pos: pos,
        };
    }

    pub fn start_drawing(
        &mut self,
        origin: NodeId,
        handle: Option<HandleDirection>,
        cursor: Point,
        loose_connection: Option<ConnectionId>,
    ) {
        *self = Self::DrawingConnection {
            origin,
            handle,
            cursor,
            loose_connection,
        };
    }

    pub fn start_editing(&mut self, node_id: NodeId) {
        *self = Self::EditingText { node_id };
    }
}
