//! Application lifecycle - construction, read-only views, selection upkeep.

use super::state::{CanvasState, Layerboard, Selection};
use crate::diagram::{Diagram, Removed};
use crate::hit_testing::HitTester;
use crate::input::InteractionState;
use crate::settings::{ConnectionInitiation, EditorSettings};
use crate::types::{Connection, ConnectionId, LayerId, Node, NodeId};
use crate::viewport::Viewport;
use tracing::debug;

impl Default for Layerboard {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl Layerboard {
    /// A fresh editor with the default layer set and an identity viewport
    pub fn new(settings: EditorSettings) -> Self {
        Self::with_diagram(Diagram::new(), Viewport::reset(), settings)
    }

    pub fn with_diagram(diagram: Diagram, viewport: Viewport, settings: EditorSettings) -> Self {
        let selected_layer = first_layer_id(&diagram);
        Self {
            canvas: CanvasState {
                viewport,
                selection: Selection::None,
                input_state: InteractionState::Idle,
                selected_layer,
                container_size: settings.container_size(),
                pending_link: None,
            },
            diagram,
            settings,
        }
    }

    // ==================== Read-only Views ====================

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    pub fn viewport(&self) -> Viewport {
        self.canvas.viewport
    }

    pub fn selection(&self) -> &Selection {
        &self.canvas.selection
    }

    pub fn selected_layer_id(&self) -> &LayerId {
        &self.canvas.selected_layer
    }

    pub fn input_state(&self) -> &InteractionState {
        &self.canvas.input_state
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn container_size(&self) -> (f64, f64) {
        self.canvas.container_size
    }

    /// Node the next click-to-link connection starts from
    pub fn pending_link(&self) -> Option<&NodeId> {
        self.canvas.pending_link.as_ref()
    }

    pub fn visible_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.diagram.visible_nodes()
    }

    pub fn visible_connections(&self) -> impl Iterator<Item = &Connection> + '_ {
        self.diagram.visible_connections()
    }

    // ==================== Host Configuration ====================

    /// Report the canvas container size in screen pixels
    pub fn set_container_size(&mut self, width: f64, height: f64) {
        self.canvas.container_size = (width, height);
    }

    pub fn set_loose_endpoints_allowed(&mut self, allowed: bool) {
        self.settings.loose_endpoints_allowed = allowed;
    }

    /// Toolbar connect-mode toggle. Switching drops any pending link source
    /// and a selected connection.
    pub fn set_connection_initiation(&mut self, initiation: ConnectionInitiation) {
        self.settings.connection_initiation = initiation;
        self.canvas.pending_link = None;
        if self.canvas.selection.connection_id().is_some() {
            self.canvas.selection = Selection::None;
        }
    }

    // ==================== Selection ====================

    pub fn select_node(&mut self, id: &NodeId) -> bool {
        if self.diagram.node(id).is_none() {
            return false;
        }
        self.canvas.selection = Selection::Node(id.clone());
        true
    }

    pub fn select_connection(&mut self, id: &ConnectionId) -> bool {
        if self.diagram.connection(id).is_none() {
            return false;
        }
        self.canvas.selection = Selection::Connection(id.clone());
        true
    }

    pub fn clear_selection(&mut self) {
        self.canvas.selection = Selection::None;
    }

    // ==================== Internals ====================

    pub(crate) fn hit_tester(&self) -> HitTester<'_> {
        HitTester::new(
            &self.diagram,
            self.canvas.viewport,
            self.settings.hit_tolerances(),
        )
    }

    /// Drop selection and input bookkeeping that refers to removed entities.
    pub(crate) fn forget_removed(&mut self, removed: &Removed) {
        let stale_selection = match &self.canvas.selection {
            Selection::Node(id) => removed.nodes.contains(id),
            Selection::Connection(id) => removed.connections.contains(id),
            Selection::None => false,
        };
        if stale_selection {
            self.canvas.selection = Selection::None;
        }
        if self
            .canvas
            .pending_link
            .as_ref()
            .is_some_and(|id| removed.nodes.contains(id))
        {
            self.canvas.pending_link = None;
        }

        let state = &self.canvas.input_state;
        let stale_state = removed.nodes.iter().any(|id| state.references_node(id))
            || state
                .loose_connection_id()
                .is_some_and(|id| removed.connections.contains(id));
        if stale_state {
            debug!(state = ?self.canvas.input_state, "Interaction target removed, resetting");
            self.canvas.input_state.reset();
        }
    }

    /// Point the selected layer at the first layer
    pub(crate) fn reset_selected_layer(&mut self) {
        self.canvas.selected_layer = first_layer_id(&self.diagram);
    }
}

fn first_layer_id(diagram: &Diagram) -> LayerId {
    diagram
        .first_layer()
        .map(|l| l.id.clone())
        .unwrap_or_else(|| LayerId::from("default"))
}
