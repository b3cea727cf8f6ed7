//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestDiagramBuilder` - Builder for editors with fixed-id nodes
//! - Pointer gesture helpers (`click`, `drag`, `ctrl_wheel`)
//! - Common assertions

use layerboard::types::{Layer, Node};
use layerboard::{
    ConnectionInitiation, Diagram, EditorSettings, InputEvent, Layerboard, Modifiers, NodeId,
    Point, Viewport,
};

// ============================================================================
// TestDiagramBuilder - Builder pattern for creating test editors
// ============================================================================

/// Builder for editors with deterministic ids.
///
/// # Example
/// ```ignore
/// let app = TestDiagramBuilder::new()
///     .with_node("a", "customer", (0.0, 0.0))
///     .with_node("b", "customer", (300.0, 0.0))
///     .with_scale(2.0)
///     .build();
/// ```
pub struct TestDiagramBuilder {
    layers: Vec<Layer>,
    nodes: Vec<Node>,
    viewport: Viewport,
    settings: EditorSettings,
}

impl Default for TestDiagramBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDiagramBuilder {
    /// Start from the default blueprint layers and an identity viewport.
    pub fn new() -> Self {
        Self {
            layers: Diagram::new().layers().to_vec(),
            nodes: Vec::new(),
            viewport: Viewport::reset(),
            settings: EditorSettings::default(),
        }
    }

    pub fn with_layers(mut self, layers: Vec<Layer>) -> Self {
        self.layers = layers;
        self
    }

    /// Add a node with a fixed id at a logical position.
    pub fn with_node(mut self, id: &str, layer: &str, pos: (f64, f64)) -> Self {
        self.nodes.push(Node {
            id: NodeId::from(id),
            layer_id: layer.into(),
            x: pos.0,
            y: pos.1,
            text: id.to_uppercase(),
        });
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.viewport.scale = scale;
        self
    }

    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.viewport.offset_x = x;
        self.viewport.offset_y = y;
        self
    }

    pub fn with_loose_endpoints(mut self, allowed: bool) -> Self {
        self.settings.loose_endpoints_allowed = allowed;
        self
    }

    pub fn with_click_to_link(mut self) -> Self {
        self.settings.connection_initiation = ConnectionInitiation::ClickToLink;
        self
    }

    /// Build the editor through the snapshot path, as a host would.
    pub fn build(self) -> Layerboard {
        let snapshot = layerboard::DiagramSnapshot {
            layers: self.layers,
            nodes: self.nodes,
            connections: Vec::new(),
            viewport: self.viewport,
        };
        let mut app = Layerboard::new(self.settings);
        app.import_snapshot(snapshot)
            .expect("builder produced an invalid snapshot");
        app
    }
}

// ============================================================================
// Gestures
// ============================================================================

pub fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

pub fn press(app: &mut Layerboard, x: f64, y: f64) -> bool {
    app.handle_event(InputEvent::PointerDown { position: pt(x, y) })
}

pub fn move_to(app: &mut Layerboard, x: f64, y: f64) -> bool {
    app.handle_event(InputEvent::PointerMove { position: pt(x, y) })
}

pub fn release(app: &mut Layerboard, x: f64, y: f64) -> bool {
    app.handle_event(InputEvent::PointerUp { position: pt(x, y) })
}

/// Press at `from`, move to `to`, release at `to`.
pub fn drag(app: &mut Layerboard, from: (f64, f64), to: (f64, f64)) {
    press(app, from.0, from.1);
    move_to(app, to.0, to.1);
    release(app, to.0, to.1);
}

pub fn click(app: &mut Layerboard, x: f64, y: f64) {
    press(app, x, y);
    release(app, x, y);
}

pub fn double_click(app: &mut Layerboard, x: f64, y: f64) -> bool {
    app.handle_event(InputEvent::DoubleClick { position: pt(x, y) })
}

pub fn ctrl_wheel(app: &mut Layerboard, x: f64, y: f64, delta_y: f64) -> bool {
    app.handle_event(InputEvent::Wheel {
        position: pt(x, y),
        delta_y,
        modifiers: Modifiers::CONTROL,
    })
}

// ============================================================================
// Assertions
// ============================================================================

pub fn node_position(app: &Layerboard, id: &str) -> (f64, f64) {
    let node = app
        .diagram()
        .node(&NodeId::from(id))
        .unwrap_or_else(|| panic!("node {id} missing"));
    (node.x, node.y)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
