//! Persisted JSON snapshot of a diagram and its viewport.
//!
//! ```text
//! {
//!   "layers":      [{id, name, color, visible}],
//!   "nodes":       [{id, layerId, x, y, text}],
//!   "connections": [{id, fromNodeId, toNodeId | looseEnd, fromHandle?, toHandle?, label?}],
//!   "viewport":    {scale, offsetX, offsetY}
//! }
//! ```
//!
//! Parsing validates the document before anything is replaced, so a failed
//! import never leaves a half-applied model behind.

use crate::diagram::Diagram;
use crate::presets;
use crate::types::{Connection, Layer, LayerId, Node};
use crate::viewport::{Viewport, clamp_scale};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading or writing snapshots
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or does not have the snapshot shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but violates a model invariant
    #[error("Invalid snapshot: {0}")]
    InvalidShape(String),
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramSnapshot {
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub viewport: Viewport,
}

impl DiagramSnapshot {
    /// Capture the model and viewport verbatim
    pub fn capture(diagram: &Diagram, viewport: Viewport) -> Self {
        Self {
            layers: diagram.layers().to_vec(),
            nodes: diagram.nodes().to_vec(),
            connections: diagram.connections().to_vec(),
            viewport,
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> SnapshotResult<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_json_pretty(&self) -> SnapshotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the invariants the model relies on.
    ///
    /// Connections with unresolved endpoints are accepted; they stay hidden.
    pub fn validate(&self) -> SnapshotResult<()> {
        let vp = &self.viewport;
        if !(vp.scale.is_finite() && vp.scale > 0.0 && vp.offset_x.is_finite() && vp.offset_y.is_finite()) {
            return Err(SnapshotError::InvalidShape(format!(
                "viewport is not a valid transform: {:?}",
                vp
            )));
        }

        ensure_unique("layer", self.layers.iter().map(|l| &l.id))?;
        ensure_unique("node", self.nodes.iter().map(|n| &n.id))?;
        ensure_unique("connection", self.connections.iter().map(|c| &c.id))?;

        let mut pairs = HashSet::new();
        for connection in &self.connections {
            let Some(to) = connection.to_node_id() else {
                continue;
            };
            if &connection.from_node_id == to {
                return Err(SnapshotError::InvalidShape(format!(
                    "connection {} is a self-loop on {}",
                    connection.id, to
                )));
            }
            if !pairs.insert((&connection.from_node_id, to)) {
                return Err(SnapshotError::InvalidShape(format!(
                    "connection {} duplicates {} -> {}",
                    connection.id, connection.from_node_id, to
                )));
            }
        }

        let layer_ids: HashSet<LayerId> = if self.layers.is_empty() {
            presets::default_layers().into_iter().map(|l| l.id).collect()
        } else {
            self.layers.iter().map(|l| l.id.clone()).collect()
        };
        if let Some(orphan) = self.nodes.iter().find(|n| !layer_ids.contains(&n.layer_id)) {
            return Err(SnapshotError::InvalidShape(format!(
                "node {} references unknown layer {}",
                orphan.id, orphan.layer_id
            )));
        }
        Ok(())
    }

    /// Turn a validated snapshot into a model plus viewport.
    /// An empty layer list becomes the built-in default layers, and an
    /// out-of-range scale is clamped to the supported zoom range.
    pub fn into_parts(self) -> (Diagram, Viewport) {
        let diagram = Diagram::from_parts(self.layers, self.nodes, self.connections);
        let viewport = Viewport {
            scale: clamp_scale(self.viewport.scale),
            ..self.viewport
        };
        (diagram, viewport)
    }

    pub fn read_from(path: &Path) -> SnapshotResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write atomically: the target is either the old or the new document
    pub fn write_to(&self, path: &Path) -> SnapshotResult<()> {
        let json = self.to_json_pretty()?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(json.as_bytes())?;
        file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

fn ensure_unique<'a, T>(kind: &str, ids: impl Iterator<Item = &'a T>) -> SnapshotResult<()>
where
    T: Eq + Hash + std::fmt::Display + 'a,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SnapshotError::InvalidShape(format!("duplicate {} id {}", kind, id)));
        }
    }
    Ok(())
}
