//! Render view - everything an external renderer needs for one frame.
//!
//! A [`Scene`] is rebuilt from scratch after every handled event. All
//! geometry is in screen space, already transformed through the viewport,
//! and only visible layers contribute.

use crate::app::Layerboard;
use crate::constants::{FALLBACK_LAYER_COLOR, NODE_HEIGHT, NODE_WIDTH};
use crate::handles::{anchor_point, center, connection_endpoints, pick_direction_towards};
use crate::input::InteractionState;
use crate::types::{ConnectionId, NodeId, Point};
use crate::viewport::Viewport;

/// A node box in screen space
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    pub id: NodeId,
    pub top_left: Point,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub text: String,
    pub selected: bool,
    pub editing: bool,
    /// Source of the next click-to-link connection
    pub link_source: bool,
}

/// A connection segment in screen space
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConnection {
    pub id: ConnectionId,
    pub start: Point,
    pub end: Point,
    pub selected: bool,
    /// The end is free-floating and draws a drag handle
    pub loose: bool,
    pub label: Option<String>,
}

/// The dashed segment shown while a new connection is being drawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewLine {
    pub start: Point,
    pub end: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub viewport: Viewport,
    /// Bottom to top
    pub nodes: Vec<SceneNode>,
    pub connections: Vec<SceneConnection>,
    pub preview: Option<PreviewLine>,
}

impl Scene {
    pub fn build(app: &Layerboard) -> Self {
        let diagram = app.diagram();
        let viewport = app.viewport();
        let selection = app.selection();
        let state = app.input_state();

        let nodes = diagram
            .visible_nodes()
            .map(|node| SceneNode {
                id: node.id.clone(),
                top_left: viewport.to_screen(node.position()),
                width: NODE_WIDTH * viewport.scale,
                height: NODE_HEIGHT * viewport.scale,
                color: diagram
                    .layer(&node.layer_id)
                    .map(|l| l.color.clone())
                    .unwrap_or_else(|| FALLBACK_LAYER_COLOR.to_string()),
                text: node.text.clone(),
                selected: selection.node_id() == Some(&node.id),
                editing: state.editing_node_id() == Some(&node.id),
                link_source: app.pending_link() == Some(&node.id),
            })
            .collect();

        let connections = diagram
            .visible_connections()
            .filter_map(|connection| {
                let from = diagram.node(&connection.from_node_id)?;
                let to = connection.to_node_id().and_then(|id| diagram.node(id));
                let (start, end) = connection_endpoints(connection, from, to)?;
                Some(SceneConnection {
                    id: connection.id.clone(),
                    start: viewport.to_screen(start),
                    end: viewport.to_screen(end),
                    selected: selection.connection_id() == Some(&connection.id),
                    loose: connection.is_loose(),
                    label: connection.label.clone(),
                })
            })
            .collect();

        Self {
            viewport,
            nodes,
            connections,
            preview: preview_line(app),
        }
    }
}

/// Preview for a fresh drag. A re-dragged loose end is drawn by its own
/// connection, so it gets none.
fn preview_line(app: &Layerboard) -> Option<PreviewLine> {
    let InteractionState::DrawingConnection {
        origin,
        handle,
        cursor,
        loose_connection: None,
    } = app.input_state()
    else {
        return None;
    };
    let node = app.diagram().node(origin)?;
    let viewport = app.viewport();
    let direction = handle.unwrap_or_else(|| {
        pick_direction_towards(center(node), viewport.to_logical(*cursor))
    });
    Some(PreviewLine {
        start: viewport.to_screen(anchor_point(node, direction)),
        end: *cursor,
    })
}
