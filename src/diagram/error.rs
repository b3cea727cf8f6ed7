//! Error types for diagram mutations
//!
//! Every variant is an invalid operation: the mutation is rejected and the
//! model is left exactly as it was.

use crate::types::{ConnectionId, LayerId, NodeId};
use thiserror::Error;

/// Reasons a diagram mutation was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    /// The only remaining layer cannot be deleted
    #[error("cannot delete the last remaining layer")]
    LastLayer,

    /// A connection may not start and end on the same node
    #[error("self-loop on node {0}")]
    SelfLoop(NodeId),

    /// A bound connection with this ordered endpoint pair already exists
    #[error("connection {from} -> {to} already exists")]
    DuplicateConnection { from: NodeId, to: NodeId },

    #[error("unknown layer: {0}")]
    UnknownLayer(LayerId),

    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("unknown connection: {0}")]
    UnknownConnection(ConnectionId),

    /// The connection is already bound to a target node
    #[error("connection {0} is not loose")]
    NotLoose(ConnectionId),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}

/// Result type alias for diagram operations
pub type DiagramResult<T> = Result<T, DiagramError>;
