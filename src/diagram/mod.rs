//! Diagram model - layers, nodes and connections.
//!
//! `Diagram` owns the three entity collections and enforces the referential
//! invariants on every mutation:
//!
//! - at least one layer always exists
//! - every node lives on an existing layer; deleting a layer deletes its nodes
//! - deleting a node purges every connection touching it
//! - no self-loops and no duplicate `(from, to)` bound pairs
//!
//! Connections whose endpoints do not resolve (only possible through an
//! imported document) are kept but filtered out of [`Diagram::visible_connections`].
//!
//! Visibility is never cached: the `visible_*` queries filter on demand.

mod error;

pub use error::{DiagramError, DiagramResult};

use crate::constants::{DEFAULT_NODE_TEXT, LAYER_COLOR_PALETTE};
use crate::presets;
use crate::types::{
    Connection, ConnectionEnd, ConnectionId, HandleDirection, Layer, LayerId, Node, NodeId, Point,
};
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Direction for [`Diagram::reorder_layer`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReorderDirection {
    /// Swap with the predecessor
    Up,
    /// Swap with the successor
    Down,
}

/// Entities removed by a cascading delete
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Removed {
    pub nodes: Vec<NodeId>,
    pub connections: Vec<ConnectionId>,
}

/// Result of dropping a loose endpoint onto a node
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LooseOutcome {
    /// The connection is now bound to the target node
    Attached(ConnectionId),
    /// The attempt was a self-loop or a duplicate; the loose connection was removed
    Discarded(DiagramError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Diagram {
    layers: Vec<Layer>,
    nodes: Vec<Node>,
    connections: Vec<Connection>,
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagram {
    /// A diagram holding the built-in default layer set and nothing else
    pub fn new() -> Self {
        Self::with_layers(presets::default_layers())
    }

    /// A diagram with the given layers and no nodes.
    ///
    /// An empty list is replaced by the built-in default layers.
    pub fn with_layers(layers: Vec<Layer>) -> Self {
        let layers = if layers.is_empty() {
            presets::default_layers()
        } else {
            layers
        };
        Self {
            layers,
            nodes: Vec::new(),
            connections: Vec::new(),
        }
    }

    /// Assemble a diagram from already-validated parts
    pub(crate) fn from_parts(
        layers: Vec<Layer>,
        nodes: Vec<Node>,
        connections: Vec<Connection>,
    ) -> Self {
        let mut diagram = Self::with_layers(layers);
        diagram.nodes = nodes;
        diagram.connections = connections;
        diagram
    }

    // ==================== Queries ====================

    /// Layers in display order
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Raw connection collection, including loose and dangling ones
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn layer(&self, id: &LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| &l.id == id)
    }

    /// Position of a layer in the display order
    pub fn layer_order(&self, id: &LayerId) -> Option<usize> {
        self.layers.iter().position(|l| &l.id == id)
    }

    pub fn first_layer(&self) -> Option<&Layer> {
        self.layers.first()
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn connection(&self, id: &ConnectionId) -> Option<&Connection> {
        self.connections.iter().find(|c| &c.id == id)
    }

    /// Returns true if the node exists and its layer is visible
    pub fn is_node_visible(&self, id: &NodeId) -> bool {
        self.node(id)
            .and_then(|n| self.layer(&n.layer_id))
            .is_some_and(|l| l.visible)
    }

    /// Nodes whose layer is visible, in insertion (z) order
    pub fn visible_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        let visible: HashSet<&LayerId> = self
            .layers
            .iter()
            .filter(|l| l.visible)
            .map(|l| &l.id)
            .collect();
        self.nodes
            .iter()
            .filter(move |n| visible.contains(&n.layer_id))
    }

    /// Connections whose every node endpoint resolves to a visible node.
    /// A loose connection only needs its origin to be visible.
    pub fn visible_connections(&self) -> impl Iterator<Item = &Connection> + '_ {
        self.connections.iter().filter(move |c| {
            self.is_node_visible(&c.from_node_id)
                && c.to_node_id().is_none_or(|to| self.is_node_visible(to))
        })
    }

    // ==================== Layers ====================

    /// Append a new layer at the end of the order.
    ///
    /// Defaults: name `Layer {n}` and a random palette color.
    pub fn add_layer(&mut self, name: Option<String>, color: Option<String>) -> &Layer {
        let name = name.unwrap_or_else(|| format!("Layer {}", self.layers.len() + 1));
        let color = color.unwrap_or_else(random_layer_color);
        let idx = self.layers.len();
        self.layers.push(Layer::new(LayerId::generate(), name, color));
        &self.layers[idx]
    }

    pub fn rename_layer(&mut self, id: &LayerId, name: impl Into<String>) -> DiagramResult<()> {
        let layer = self.layer_mut(id)?;
        layer.name = name.into();
        Ok(())
    }

    pub fn set_layer_color(&mut self, id: &LayerId, color: impl Into<String>) -> DiagramResult<()> {
        let layer = self.layer_mut(id)?;
        layer.color = color.into();
        Ok(())
    }

    /// Flip a layer's visibility, returning the new value
    pub fn toggle_visibility(&mut self, id: &LayerId) -> DiagramResult<bool> {
        let layer = self.layer_mut(id)?;
        layer.visible = !layer.visible;
        Ok(layer.visible)
    }

    /// Swap a layer with its neighbour. Returns `false` at the boundaries.
    pub fn reorder_layer(&mut self, id: &LayerId, direction: ReorderDirection) -> DiagramResult<bool> {
        let idx = self
            .layer_order(id)
            .ok_or_else(|| DiagramError::UnknownLayer(id.clone()))?;
        let target = match direction {
            ReorderDirection::Up if idx > 0 => idx - 1,
            ReorderDirection::Down if idx + 1 < self.layers.len() => idx + 1,
            _ => return Ok(false),
        };
        self.layers.swap(idx, target);
        Ok(true)
    }

    /// Delete a layer, its nodes, and every connection touching those nodes.
    pub fn delete_layer(&mut self, id: &LayerId) -> DiagramResult<Removed> {
        let idx = self
            .layer_order(id)
            .ok_or_else(|| DiagramError::UnknownLayer(id.clone()))?;
        if self.layers.len() <= 1 {
            return Err(DiagramError::LastLayer);
        }
        self.layers.remove(idx);

        let nodes: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|n| &n.layer_id == id)
            .map(|n| n.id.clone())
            .collect();
        let doomed: HashSet<NodeId> = nodes.iter().cloned().collect();
        self.nodes.retain(|n| !doomed.contains(&n.id));
        let connections = self.purge_connections(|c| {
            doomed.contains(&c.from_node_id)
                || c.to_node_id().is_some_and(|to| doomed.contains(to))
        });
        Ok(Removed { nodes, connections })
    }

    /// Replace all layers, clearing every node and connection
    pub fn replace_layers(&mut self, layers: Vec<Layer>) {
        *self = Self::with_layers(layers);
    }

    // ==================== Nodes ====================

    pub fn add_node(
        &mut self,
        layer_id: &LayerId,
        at: Point,
        text: Option<String>,
    ) -> DiagramResult<&Node> {
        if self.layer(layer_id).is_none() {
            return Err(DiagramError::UnknownLayer(layer_id.clone()));
        }
        let idx = self.nodes.len();
        self.nodes.push(Node {
            id: NodeId::generate(),
            layer_id: layer_id.clone(),
            x: at.x,
            y: at.y,
            text: text.unwrap_or_else(|| DEFAULT_NODE_TEXT.to_string()),
        });
        Ok(&self.nodes[idx])
    }

    pub fn move_node(&mut self, id: &NodeId, x: f64, y: f64) -> DiagramResult<()> {
        let node = self.node_mut(id)?;
        node.x = x;
        node.y = y;
        Ok(())
    }

    pub fn set_node_text(&mut self, id: &NodeId, text: impl Into<String>) -> DiagramResult<()> {
        let node = self.node_mut(id)?;
        node.text = text.into();
        Ok(())
    }

    /// Remove a node and every connection touching it.
    pub fn delete_node(&mut self, id: &NodeId) -> DiagramResult<Removed> {
        let idx = self
            .nodes
            .iter()
            .position(|n| &n.id == id)
            .ok_or_else(|| DiagramError::UnknownNode(id.clone()))?;
        self.nodes.remove(idx);
        let connections = self.purge_connections(|c| c.touches(id));
        Ok(Removed {
            nodes: vec![id.clone()],
            connections,
        })
    }

    // ==================== Connections ====================

    /// Create a bound connection with geometric anchors.
    pub fn connect(&mut self, from: &NodeId, to: &NodeId) -> DiagramResult<&Connection> {
        self.connect_with_handles(from, to, None, None)
    }

    /// Create a bound connection, optionally recording explicit anchor sides.
    pub fn connect_with_handles(
        &mut self,
        from: &NodeId,
        to: &NodeId,
        from_handle: Option<HandleDirection>,
        to_handle: Option<HandleDirection>,
    ) -> DiagramResult<&Connection> {
        self.check_bindable(from, to)?;
        let mut connection = Connection::bound(from.clone(), to.clone());
        connection.from_handle = from_handle;
        connection.to_handle = to_handle;
        let idx = self.connections.len();
        self.connections.push(connection);
        Ok(&self.connections[idx])
    }

    /// Start a connection whose end floats at a logical point.
    pub fn start_loose_connection(
        &mut self,
        from: &NodeId,
        point: Point,
        from_handle: Option<HandleDirection>,
    ) -> DiagramResult<&Connection> {
        if self.node(from).is_none() {
            return Err(DiagramError::UnknownNode(from.clone()));
        }
        let idx = self.connections.len();
        self.connections.push(Connection {
            id: ConnectionId::generate(),
            from_node_id: from.clone(),
            to: ConnectionEnd::Loose(point),
            from_handle,
            to_handle: None,
            label: None,
        });
        Ok(&self.connections[idx])
    }

    pub fn update_loose_end(&mut self, id: &ConnectionId, point: Point) -> DiagramResult<()> {
        let connection = self.connection_mut(id)?;
        match &mut connection.to {
            ConnectionEnd::Loose(end) => {
                *end = point;
                Ok(())
            }
            ConnectionEnd::Node(_) => Err(DiagramError::NotLoose(id.clone())),
        }
    }

    /// Bind a loose connection to `target`.
    ///
    /// A self-loop or a duplicate of an existing bound pair removes the
    /// loose connection instead; the existing connection always wins.
    pub fn finalize_loose(
        &mut self,
        id: &ConnectionId,
        target: &NodeId,
    ) -> DiagramResult<LooseOutcome> {
        let connection = self
            .connection(id)
            .ok_or_else(|| DiagramError::UnknownConnection(id.clone()))?;
        if !connection.is_loose() {
            return Err(DiagramError::NotLoose(id.clone()));
        }
        if self.node(target).is_none() {
            return Err(DiagramError::UnknownNode(target.clone()));
        }
        let from = connection.from_node_id.clone();
        if let Err(reason) = self.check_bindable(&from, target) {
            self.connections.retain(|c| &c.id != id);
            return Ok(LooseOutcome::Discarded(reason));
        }
        let connection = self.connection_mut(id)?;
        connection.to = ConnectionEnd::Node(target.clone());
        Ok(LooseOutcome::Attached(id.clone()))
    }

    pub fn set_connection_label(
        &mut self,
        id: &ConnectionId,
        label: Option<String>,
    ) -> DiagramResult<()> {
        let connection = self.connection_mut(id)?;
        connection.label = label;
        Ok(())
    }

    pub fn delete_connection(&mut self, id: &ConnectionId) -> DiagramResult<()> {
        let before = self.connections.len();
        self.connections.retain(|c| &c.id != id);
        if self.connections.len() == before {
            return Err(DiagramError::UnknownConnection(id.clone()));
        }
        Ok(())
    }

    // ==================== Internals ====================

    fn check_bindable(&self, from: &NodeId, to: &NodeId) -> DiagramResult<()> {
        if from == to {
            return Err(DiagramError::SelfLoop(from.clone()));
        }
        for id in [from, to] {
            if self.node(id).is_none() {
                return Err(DiagramError::UnknownNode(id.clone()));
            }
        }
        let duplicate = self
            .connections
            .iter()
            .any(|c| &c.from_node_id == from && c.to_node_id() == Some(to));
        if duplicate {
            return Err(DiagramError::DuplicateConnection {
                from: from.clone(),
                to: to.clone(),
            });
        }
        Ok(())
    }

    fn purge_connections(&mut self, doomed: impl Fn(&Connection) -> bool) -> Vec<ConnectionId> {
        let mut purged = Vec::new();
        self.connections.retain(|c| {
            if doomed(c) {
                purged.push(c.id.clone());
                false
            } else {
                true
            }
        });
        purged
    }

    fn layer_mut(&mut self, id: &LayerId) -> DiagramResult<&mut Layer> {
        self.layers
            .iter_mut()
            .find(|l| &l.id == id)
            .ok_or_else(|| DiagramError::UnknownLayer(id.clone()))
    }

    fn node_mut(&mut self, id: &NodeId) -> DiagramResult<&mut Node> {
        self.nodes
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(|| DiagramError::UnknownNode(id.clone()))
    }

    fn connection_mut(&mut self, id: &ConnectionId) -> DiagramResult<&mut Connection> {
        self.connections
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| DiagramError::UnknownConnection(id.clone()))
    }
}

fn random_layer_color() -> String {
    LAYER_COLOR_PALETTE
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(LAYER_COLOR_PALETTE[0])
        .to_string()
}
