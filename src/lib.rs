//! Layerboard - canvas interaction engine for layered diagrams.
//!
//! The crate is headless: a host feeds raw [`InputEvent`]s into a
//! [`Layerboard`], reads back a [`scene::Scene`] to draw, and calls the
//! collaborator intents (layers, presets, zoom, import/export) directly.

pub mod app;
pub mod constants;
pub mod diagram;
pub mod handles;
pub mod hit_testing;
pub mod input;
pub mod perf;
pub mod presets;
pub mod scene;
pub mod settings;
pub mod snapshot;
pub mod spatial_index;
pub mod types;
pub mod viewport;

pub use app::{Layerboard, Selection};
pub use diagram::{Diagram, DiagramError, LooseOutcome, ReorderDirection, Removed};
pub use input::{InputEvent, InteractionState, Key, Modifiers};
pub use settings::{ConnectionInitiation, EditorSettings};
pub use snapshot::{DiagramSnapshot, SnapshotError};
pub use types::{
    Connection, ConnectionEnd, ConnectionId, HandleDirection, Layer, LayerId, Node, NodeId, Point,
};
pub use viewport::Viewport;
