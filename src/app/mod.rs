//! Application module - the Layerboard editor state and collaborator intents.
//!
//! This module is organized into several submodules:
//! - `state` - The Layerboard struct definition and sub-structs
//! - `lifecycle` - Construction, read-only views and selection upkeep
//! - `layer_management` - Layer CRUD, node creation, presets, viewport intents
//! - `snapshot_io` - JSON export/import
//!
//! Pointer and keyboard handling lives in [`crate::input`].

mod layer_management;
mod lifecycle;
mod snapshot_io;
mod state;

pub use state::{CanvasState, Layerboard, Selection};

use crate::diagram::DiagramError;
use tracing::debug;

/// Log and swallow an invalid operation.
pub(crate) fn absorb<T>(result: Result<T, DiagramError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(reason = %e, "Operation rejected");
            None
        }
    }
}
