//! Export/import of whole-document snapshots.

use super::state::{Layerboard, Selection};
use crate::snapshot::{DiagramSnapshot, SnapshotResult};
use std::path::Path;
use tracing::{info, warn};

impl Layerboard {
    /// Serialize the current model and viewport verbatim
    pub fn export_snapshot(&self) -> DiagramSnapshot {
        DiagramSnapshot::capture(&self.diagram, self.canvas.viewport)
    }

    pub fn export_json(&self) -> SnapshotResult<String> {
        self.export_snapshot().to_json_pretty()
    }

    pub fn export_to_path(&self, path: &Path) -> SnapshotResult<()> {
        self.export_snapshot().write_to(path)?;
        info!(path = %path.display(), "Snapshot exported");
        Ok(())
    }

    /// Replace model and viewport wholesale.
    ///
    /// On failure the current state is kept and the error is returned as a
    /// non-fatal notice for the host to display.
    pub fn import_snapshot(&mut self, snapshot: DiagramSnapshot) -> SnapshotResult<()> {
        if let Err(e) = snapshot.validate() {
            warn!("Snapshot import rejected: {}", e);
            return Err(e);
        }
        let (diagram, viewport) = snapshot.into_parts();
        self.diagram = diagram;
        self.canvas.viewport = viewport;
        self.canvas.selection = Selection::None;
        self.canvas.pending_link = None;
        self.canvas.input_state.reset();
        self.reset_selected_layer();
        info!(
            layers = self.diagram.layers().len(),
            nodes = self.diagram.nodes().len(),
            connections = self.diagram.connections().len(),
            "Snapshot imported"
        );
        Ok(())
    }

    pub fn import_json(&mut self, json: &str) -> SnapshotResult<()> {
        let snapshot = DiagramSnapshot::from_json(json).inspect_err(|e| {
            warn!("Snapshot import failed: {}", e);
        })?;
        self.import_snapshot(snapshot)
    }

    pub fn import_from_path(&mut self, path: &Path) -> SnapshotResult<()> {
        let snapshot = DiagramSnapshot::read_from(path).inspect_err(|e| {
            warn!(path = %path.display(), "Snapshot import failed: {}", e);
        })?;
        self.import_snapshot(snapshot)
    }
}
