//! Hit testing - resolve a screen point to the canvas element under it.
//!
//! Resolution order, first match wins:
//! 1. a connection handle on a visible node (topmost node first)
//! 2. the free-end handle of a visible loose connection
//! 3. a visible node body (R-tree query, topmost first)
//! 4. a visible connection line
//! 5. the background
//!
//! Handle and line tolerances are in screen pixels so they feel the same at
//! every zoom level; node bodies are tested in logical space.

use crate::constants::{CONNECTION_HIT_TOLERANCE, HANDLE_HIT_RADIUS};
use crate::diagram::Diagram;
use crate::handles::{anchor_point, connection_endpoints};
use crate::profile_scope;
use crate::spatial_index::SpatialIndex;
use crate::types::{ConnectionId, HandleDirection, NodeId, Point};
use crate::viewport::Viewport;

/// What a pointer is over
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// A "drag out a connection" affordance on a node side
    Handle {
        node_id: NodeId,
        direction: HandleDirection,
    },
    /// The free end of a loose connection
    LooseEnd(ConnectionId),
    /// A node body
    Node(NodeId),
    /// A connection line
    Connection(ConnectionId),
    /// Empty canvas
    Background,
}

/// Screen-pixel tolerances used by [`HitTester`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitTolerances {
    pub handle_radius: f64,
    pub connection: f64,
}

impl Default for HitTolerances {
    fn default() -> Self {
        Self {
            handle_radius: HANDLE_HIT_RADIUS,
            connection: CONNECTION_HIT_TOLERANCE,
        }
    }
}

/// Hit tester over the visible part of a diagram at a given viewport.
pub struct HitTester<'a> {
    diagram: &'a Diagram,
    viewport: Viewport,
    tolerances: HitTolerances,
    index: SpatialIndex,
}

impl<'a> HitTester<'a> {
    pub fn new(diagram: &'a Diagram, viewport: Viewport, tolerances: HitTolerances) -> Self {
        profile_scope!("build_hit_index");
        Self {
            diagram,
            viewport,
            tolerances,
            index: SpatialIndex::from_nodes(diagram.visible_nodes()),
        }
    }

    /// Resolve the element under a screen point
    pub fn hit_test(&self, screen: Point) -> HitTarget {
        profile_scope!("hit_test");

        if let Some((node_id, direction)) = self.handle_at(screen) {
            return HitTarget::Handle { node_id, direction };
        }
        if let Some(id) = self.loose_end_at(screen) {
            return HitTarget::LooseEnd(id);
        }
        if let Some(id) = self.node_at(screen) {
            return HitTarget::Node(id);
        }
        if let Some(id) = self.connection_at(screen) {
            return HitTarget::Connection(id);
        }
        HitTarget::Background
    }

    /// Topmost visible node whose body contains the screen point
    pub fn node_at(&self, screen: Point) -> Option<NodeId> {
        let logical = self.viewport.to_logical(screen);
        self.index.topmost_at(logical.x, logical.y)
    }

    /// A handle only counts when no other node's body covers the point.
    fn handle_at(&self, screen: Point) -> Option<(NodeId, HandleDirection)> {
        let logical = self.viewport.to_logical(screen);
        let covering = self.index.topmost_at(logical.x, logical.y);
        let visible: Vec<_> = self.diagram.visible_nodes().collect();
        visible
            .into_iter()
            .rev()
            .filter(|node| covering.as_ref().is_none_or(|top| top == &node.id))
            .find_map(|node| {
                HandleDirection::ALL.into_iter().find_map(|direction| {
                    let anchor = self.viewport.to_screen(anchor_point(node, direction));
                    (anchor.distance_to(screen) <= self.tolerances.handle_radius)
                        .then(|| (node.id.clone(), direction))
                })
            })
    }

    fn loose_end_at(&self, screen: Point) -> Option<ConnectionId> {
        let visible: Vec<_> = self.diagram.visible_connections().collect();
        visible.into_iter().rev().find_map(|connection| {
            let end = self.viewport.to_screen(connection.loose_end()?);
            (end.distance_to(screen) <= self.tolerances.handle_radius)
                .then(|| connection.id.clone())
        })
    }

    fn connection_at(&self, screen: Point) -> Option<ConnectionId> {
        let visible: Vec<_> = self.diagram.visible_connections().collect();
        visible.into_iter().rev().find_map(|connection| {
            let from = self.diagram.node(&connection.from_node_id)?;
            let to = connection.to_node_id().and_then(|id| self.diagram.node(id));
            let (a, b) = connection_endpoints(connection, from, to)?;
            let a = self.viewport.to_screen(a);
            let b = self.viewport.to_screen(b);
            (distance_to_segment(screen, a, b) <= self.tolerances.connection)
                .then(|| connection.id.clone())
        })
    }
}

/// Shortest distance from `p` to the segment `a..b`
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b.delta_from(a);
    let ap = p.delta_from(a);
    let ab_len2 = ab.x * ab.x + ab.y * ab.y;
    if ab_len2 <= f64::EPSILON {
        return p.distance_to(a);
    }
    let t = ((ap.x * ab.x + ap.y * ab.y) / ab_len2).clamp(0.0, 1.0);
    let closest = Point::new(a.x + ab.x * t, a.y + ab.y * t);
    p.distance_to(closest)
}
