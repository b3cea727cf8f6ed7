//! Core types for the Layerboard diagram model.
//!
//! This module defines the fundamental data structures shared by the model,
//! the geometry helpers and the interaction engine: identifiers, points,
//! layers, nodes and connections. Field names serialize in camelCase to
//! match the persisted snapshot format.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Identifiers
// ============================================================================

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh random identifier
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a [`Layer`]
    LayerId
);
string_id!(
    /// Identifier of a [`Node`]
    NodeId
);
string_id!(
    /// Identifier of a [`Connection`]
    ConnectionId
);

// ============================================================================
// Geometry Primitives
// ============================================================================

/// A 2D point. Whether it is in screen or logical space depends on context;
/// functions document which one they take.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`
    #[inline]
    pub fn delta_from(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    pub fn offset_by(self, delta: Point) -> Point {
        Point::new(self.x + delta.x, self.y + delta.y)
    }

    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        let d = self.delta_from(other);
        (d.x * d.x + d.y * d.y).sqrt()
    }
}

/// One of the four attachment sides of a node rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleDirection {
    Top,
    Right,
    Bottom,
    Left,
}

impl HandleDirection {
    pub const ALL: [HandleDirection; 4] = [
        HandleDirection::Top,
        HandleDirection::Right,
        HandleDirection::Bottom,
        HandleDirection::Left,
    ];
}

// ============================================================================
// Diagram Entities
// ============================================================================

/// A named, colored swimlane grouping nodes.
///
/// A layer's order is its position in the diagram's layer list; it is not
/// stored on the layer itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: LayerId,
    pub name: String,
    /// CSS-style hex color, e.g. `#3b82f6`
    pub color: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Layer {
    pub fn new(id: impl Into<LayerId>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            visible: true,
        }
    }
}

/// A text box positioned on a layer. `(x, y)` is the top-left corner in
/// logical coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeId,
    pub layer_id: LayerId,
    pub x: f64,
    pub y: f64,
    pub text: String,
}

impl Node {
    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// The "to" side of a connection.
///
/// Flattened into [`Connection`] so a bound end serializes as `toNodeId`
/// and a loose end as `looseEnd`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ConnectionEnd {
    /// Attached to a node
    #[serde(rename = "toNodeId")]
    Node(NodeId),
    /// Free-floating logical point while the user is still placing it
    #[serde(rename = "looseEnd")]
    Loose(Point),
}

/// A directed edge from one node to a node or a loose point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: ConnectionId,
    pub from_node_id: NodeId,
    #[serde(flatten)]
    pub to: ConnectionEnd,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_handle: Option<HandleDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_handle: Option<HandleDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Connection {
    /// Create a bound connection with geometric (unrecorded) handles
    pub fn bound(from: NodeId, to: NodeId) -> Self {
        Self {
            id: ConnectionId::generate(),
            from_node_id: from,
            to: ConnectionEnd::Node(to),
            from_handle: None,
            to_handle: None,
            label: None,
        }
    }

    /// Target node id, if this connection is bound
    pub fn to_node_id(&self) -> Option<&NodeId> {
        match &self.to {
            ConnectionEnd::Node(id) => Some(id),
            ConnectionEnd::Loose(_) => None,
        }
    }

    /// Free endpoint, if this connection is loose
    pub fn loose_end(&self) -> Option<Point> {
        match self.to {
            ConnectionEnd::Loose(p) => Some(p),
            ConnectionEnd::Node(_) => None,
        }
    }

    pub fn is_loose(&self) -> bool {
        matches!(self.to, ConnectionEnd::Loose(_))
    }

    /// Returns true if either endpoint references the given node
    pub fn touches(&self, node_id: &NodeId) -> bool {
        &self.from_node_id == node_id || self.to_node_id() == Some(node_id)
    }
}
