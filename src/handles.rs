//! Handle geometry - node anchors and anchor-side selection.
//!
//! Every node occupies a fixed `NODE_WIDTH x NODE_HEIGHT` rectangle whose
//! top-left corner is the node position. Anchors sit at the midpoint of
//! each side.

use crate::constants::{NODE_HEIGHT, NODE_WIDTH};
use crate::types::{Connection, HandleDirection, Node, Point};

/// Anchor offset of `direction` relative to a node's top-left corner.
pub fn anchor_offset(direction: HandleDirection) -> Point {
    match direction {
        HandleDirection::Top => Point::new(NODE_WIDTH / 2.0, 0.0),
        HandleDirection::Right => Point::new(NODE_WIDTH, NODE_HEIGHT / 2.0),
        HandleDirection::Bottom => Point::new(NODE_WIDTH / 2.0, NODE_HEIGHT),
        HandleDirection::Left => Point::new(0.0, NODE_HEIGHT / 2.0),
    }
}

/// Logical position of a node's anchor on the given side.
pub fn anchor_point(node: &Node, direction: HandleDirection) -> Point {
    node.position().offset_by(anchor_offset(direction))
}

/// Geometric center of a node.
pub fn center(node: &Node) -> Point {
    Point::new(node.x + NODE_WIDTH / 2.0, node.y + NODE_HEIGHT / 2.0)
}

/// Side of `from` facing `to`.
///
/// Horizontal wins only when `|dx| > |dy|`; ties resolve vertically.
pub fn pick_direction(from: &Node, to: &Node) -> HandleDirection {
    pick_direction_towards(center(from), center(to))
}

/// Same rule as [`pick_direction`] but towards an arbitrary logical point,
/// used for loose endpoints and the drawing preview.
pub fn pick_direction_towards(from_center: Point, target: Point) -> HandleDirection {
    let dx = target.x - from_center.x;
    let dy = target.y - from_center.y;
    if dx.abs() > dy.abs() {
        if dx >= 0.0 {
            HandleDirection::Right
        } else {
            HandleDirection::Left
        }
    } else if dy >= 0.0 {
        HandleDirection::Bottom
    } else {
        HandleDirection::Top
    }
}

/// Logical endpoints of a connection line.
///
/// Recorded handles win; missing ones are recomputed from the current node
/// positions, so unrecorded anchors follow nodes while they are dragged.
/// `to` is `None` for a loose connection, whose end is the loose point.
pub fn connection_endpoints(
    connection: &Connection,
    from: &Node,
    to: Option<&Node>,
) -> Option<(Point, Point)> {
    match (to, connection.loose_end()) {
        (Some(to), _) => {
            let from_dir = connection
                .from_handle
                .unwrap_or_else(|| pick_direction(from, to));
            let to_dir = connection
                .to_handle
                .unwrap_or_else(|| pick_direction(to, from));
            Some((anchor_point(from, from_dir), anchor_point(to, to_dir)))
        }
        (None, Some(end)) => {
            let from_dir = connection
                .from_handle
                .unwrap_or_else(|| pick_direction_towards(center(from), end));
            Some((anchor_point(from, from_dir), end))
        }
        (None, None) => None,
    }
}
