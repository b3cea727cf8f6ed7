//! Sidebar and toolbar intents - layer CRUD, node creation, presets, zoom.
//!
//! Rejected operations are logged at debug level and reported as `false` or
//! `None`; the model is left untouched.

use super::absorb;
use super::state::{Layerboard, Selection};
use crate::diagram::{DiagramError, ReorderDirection, Removed};
use crate::presets;
use crate::types::{LayerId, NodeId, Point};
use crate::viewport::Viewport;
use tracing::{debug, info};

impl Layerboard {
    // ==================== Layers ====================

    /// Append a layer and make it the selected layer
    pub fn add_layer(&mut self, name: Option<String>, color: Option<String>) -> LayerId {
        let id = self.diagram.add_layer(name, color).id.clone();
        self.canvas.selected_layer = id.clone();
        debug!(layer = %id, "Layer added");
        id
    }

    pub fn rename_layer(&mut self, id: &LayerId, name: impl Into<String>) -> bool {
        absorb(self.diagram.rename_layer(id, name)).is_some()
    }

    pub fn toggle_visibility(&mut self, id: &LayerId) -> bool {
        absorb(self.diagram.toggle_visibility(id)).is_some()
    }

    /// Move a layer one step. Returns `false` at the boundaries too.
    pub fn reorder_layer(&mut self, id: &LayerId, direction: ReorderDirection) -> bool {
        absorb(self.diagram.reorder_layer(id, direction)).unwrap_or(false)
    }

    /// Delete a layer with its nodes and their connections.
    ///
    /// The selected layer falls back to the (new) first layer.
    pub fn delete_layer(&mut self, id: &LayerId) -> bool {
        let Some(removed) = absorb(self.diagram.delete_layer(id)) else {
            return false;
        };
        debug!(
            layer = %id,
            nodes = removed.nodes.len(),
            connections = removed.connections.len(),
            "Layer deleted"
        );
        self.forget_removed(&removed);
        self.reset_selected_layer();
        true
    }

    /// Choose the layer that receives new nodes
    pub fn select_layer(&mut self, id: &LayerId) -> bool {
        if self.diagram.layer(id).is_none() {
            debug!(layer = %id, "Ignoring selection of unknown layer");
            return false;
        }
        self.canvas.selected_layer = id.clone();
        true
    }

    // ==================== Nodes ====================

    /// Add a node at the center of the visible canvas on the selected layer,
    /// and select it.
    pub fn add_node(&mut self) -> Option<NodeId> {
        let (width, height) = self.canvas.container_size;
        let center = Point::new(width / 2.0, height / 2.0);
        let at = self.canvas.viewport.to_logical(center);
        self.add_node_at(at)
    }

    /// Add a node at a logical position on the selected layer, and select it.
    pub fn add_node_at(&mut self, at: Point) -> Option<NodeId> {
        let layer_id = match self.diagram.layer(&self.canvas.selected_layer) {
            Some(layer) => layer.id.clone(),
            None => self.diagram.first_layer()?.id.clone(),
        };
        let id = absorb(self.diagram.add_node(&layer_id, at, None))?.id.clone();
        self.canvas.selection = Selection::Node(id.clone());
        Some(id)
    }

    /// Delete whatever is selected: a node (with its connections) or a connection
    pub fn delete_selection(&mut self) -> bool {
        let removed = match self.canvas.selection.clone() {
            Selection::Node(id) => absorb(self.diagram.delete_node(&id)),
            Selection::Connection(id) => {
                absorb(self.diagram.delete_connection(&id)).map(|()| Removed {
                    nodes: Vec::new(),
                    connections: vec![id],
                })
            }
            Selection::None => None,
        };
        let Some(removed) = removed else {
            return false;
        };
        self.forget_removed(&removed);
        self.canvas.selection = Selection::None;
        true
    }

    // ==================== Presets ====================

    /// Replace all layers with a built-in preset, clearing nodes and connections
    pub fn apply_preset(&mut self, key: &str) -> bool {
        let Some(preset) = presets::find(key) else {
            absorb::<()>(Err(DiagramError::UnknownPreset(key.to_string())));
            return false;
        };
        self.diagram.replace_layers(preset.layers());
        self.canvas.selection = Selection::None;
        self.canvas.pending_link = None;
        self.canvas.input_state.reset();
        self.reset_selected_layer();
        info!(preset = preset.key, "Preset applied");
        true
    }

    // ==================== Viewport ====================

    /// Toolbar zoom: change scale in place, keeping the offset
    pub fn zoom_by(&mut self, delta: f64) {
        self.canvas.viewport = self.canvas.viewport.zoom_at(delta, None);
    }

    pub fn reset_viewport(&mut self) {
        self.canvas.viewport = Viewport::reset();
    }
}
