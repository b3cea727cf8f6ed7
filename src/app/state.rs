//! Application state - the Layerboard struct definition and sub-structs.

use crate::diagram::Diagram;
use crate::input::InteractionState;
use crate::settings::EditorSettings;
use crate::types::{ConnectionId, LayerId, NodeId};
use crate::viewport::Viewport;

/// What is currently selected on the canvas. Selecting one kind clears the other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Node(NodeId),
    Connection(ConnectionId),
}

impl Selection {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn node_id(&self) -> Option<&NodeId> {
        match self {
            Self::Node(id) => Some(id),
            _ => None,
        }
    }

    pub fn connection_id(&self) -> Option<&ConnectionId> {
        match self {
            Self::Connection(id) => Some(id),
            _ => None,
        }
    }
}

/// Canvas interaction state - viewport, selection, active mode.
#[derive(Debug, Clone)]
pub struct CanvasState {
    /// Pan/zoom transform
    pub viewport: Viewport,
    /// Selected node or connection
    pub selection: Selection,
    /// Input state machine - the only writer of drag/draw bookkeeping
    pub input_state: InteractionState,
    /// Layer that receives new nodes
    pub selected_layer: LayerId,
    /// Canvas container size in screen pixels
    pub container_size: (f64, f64),
    /// Source node of the next click-to-link connection
    pub pending_link: Option<NodeId>,
}

/// The editor core: diagram model plus all UI state that drives it.
///
/// Event handlers (`input`) and collaborator intents (`layer_management`,
/// `snapshot_io`) are the only writers; renderers read through the
/// accessors and [`crate::scene::Scene`].
#[derive(Debug, Clone)]
pub struct Layerboard {
    pub(crate) diagram: Diagram,
    pub(crate) canvas: CanvasState,
    pub(crate) settings: EditorSettings,
}
