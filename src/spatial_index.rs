//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing over node footprints for hit testing
//! on the canvas. Point queries run in O(log n) instead of scanning every node.
//!
//! Indexes are built from the current visible nodes at query time and are
//! not kept across mutations.

use crate::constants::{NODE_HEIGHT, NODE_WIDTH};
use crate::types::{Node, NodeId};
use rstar::{AABB, RTree, RTreeObject};

/// A node's logical bounding box plus its z-order (insertion index).
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub node_id: NodeId,
    pub z: usize,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SpatialEntry {
    pub fn new(node: &Node, z: usize) -> Self {
        Self {
            node_id: node.id.clone(),
            z,
            min_x: node.x,
            min_y: node.y,
            max_x: node.x + NODE_WIDTH,
            max_y: node.y + NODE_HEIGHT,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node_id == other.node_id
    }
}

/// Spatial index for nodes using an R-tree.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
}

impl SpatialIndex {
    /// Build an index from nodes given in z-order (later nodes draw on top).
    pub fn from_nodes<'a, I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = &'a Node>,
    {
        let entries: Vec<SpatialEntry> = nodes
            .into_iter()
            .enumerate()
            .map(|(z, node)| SpatialEntry::new(node, z))
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// All nodes whose footprint contains the logical point, topmost first.
    pub fn query_point(&self, x: f64, y: f64) -> Vec<NodeId> {
        let point_envelope = AABB::from_point([x, y]);
        let mut hits: Vec<&SpatialEntry> = self
            .tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .collect();
        hits.sort_by(|a, b| b.z.cmp(&a.z));
        hits.into_iter().map(|entry| entry.node_id.clone()).collect()
    }

    /// Topmost node containing the logical point
    pub fn topmost_at(&self, x: f64, y: f64) -> Option<NodeId> {
        self.query_point(x, y).into_iter().next()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
