//! Anchor geometry through the public API.

use crate::helpers::pt;
use layerboard::handles::{anchor_point, connection_endpoints, pick_direction};
use layerboard::types::{Connection, ConnectionEnd, Node};
use layerboard::{HandleDirection, NodeId};

fn node(id: &str, x: f64, y: f64) -> Node {
    Node {
        id: NodeId::from(id),
        layer_id: "customer".into(),
        x,
        y,
        text: String::new(),
    }
}

#[test]
fn test_side_by_side_nodes_connect_right_to_left() {
    let a = node("a", 0.0, 0.0);
    let b = node("b", 300.0, 0.0);

    assert_eq!(pick_direction(&a, &b), HandleDirection::Right);
    assert_eq!(pick_direction(&b, &a), HandleDirection::Left);

    let conn = Connection::bound(a.id.clone(), b.id.clone());
    let (start, end) = connection_endpoints(&conn, &a, Some(&b)).unwrap();
    assert_eq!(start, pt(180.0, 60.0));
    assert_eq!(end, pt(300.0, 60.0));
}

#[test]
fn test_loose_end_is_used_verbatim() {
    let a = node("a", 0.0, 0.0);
    let mut conn = Connection::bound(a.id.clone(), NodeId::from("gone"));
    conn.to = ConnectionEnd::Loose(pt(0.0, -200.0));

    let (start, end) = connection_endpoints(&conn, &a, None).unwrap();
    assert_eq!(start, anchor_point(&a, HandleDirection::Top));
    assert_eq!(end, pt(0.0, -200.0));
}

#[test]
fn test_bound_connection_without_target_node_has_no_geometry() {
    let a = node("a", 0.0, 0.0);
    let conn = Connection::bound(a.id.clone(), NodeId::from("gone"));
    assert!(connection_endpoints(&conn, &a, None).is_none());
}
