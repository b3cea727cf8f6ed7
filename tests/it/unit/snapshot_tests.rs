//! Persisted snapshot format.
//!
//! To update inline snapshots after intentional format changes:
//! ```sh
//! cargo insta test --accept
//! ```

use layerboard::types::{Connection, ConnectionEnd, Layer, Node};
use layerboard::{
    ConnectionId, DiagramSnapshot, HandleDirection, NodeId, Point, SnapshotError, Viewport,
};
use layerboard::constants::{MAX_SCALE, MIN_SCALE};
use serde_json::json;

fn sample_snapshot() -> DiagramSnapshot {
    DiagramSnapshot {
        layers: vec![
            Layer::new("customer", "Customer actions", "#f59e0b"),
            Layer::new("frontstage", "Frontstage", "#3b82f6"),
        ],
        nodes: vec![
            Node {
                id: NodeId::from("n1"),
                layer_id: "customer".into(),
                x: 10.0,
                y: 20.0,
                text: "Browse".into(),
            },
            Node {
                id: NodeId::from("n2"),
                layer_id: "frontstage".into(),
                x: 300.0,
                y: 20.0,
                text: "Catalog".into(),
            },
        ],
        connections: vec![
            Connection {
                id: ConnectionId::from("c1"),
                from_node_id: NodeId::from("n1"),
                to: ConnectionEnd::Node(NodeId::from("n2")),
                from_handle: Some(HandleDirection::Right),
                to_handle: None,
                label: Some("opens".into()),
            },
            Connection {
                id: ConnectionId::from("c2"),
                from_node_id: NodeId::from("n2"),
                to: ConnectionEnd::Loose(Point::new(640.0, 80.5)),
                from_handle: None,
                to_handle: None,
                label: None,
            },
        ],
        viewport: Viewport {
            scale: 1.5,
            offset_x: -20.0,
            offset_y: 40.0,
        },
    }
}

// ============================================================================
// Format
// ============================================================================

#[test]
fn snapshot_layers() {
    let snapshot = sample_snapshot();
    insta::assert_json_snapshot!(snapshot.layers, @r###"
    [
      {
        "id": "customer",
        "name": "Customer actions",
        "color": "#f59e0b",
        "visible": true
      },
      {
        "id": "frontstage",
        "name": "Frontstage",
        "color": "#3b82f6",
        "visible": true
      }
    ]
    "###);
}

#[test]
fn snapshot_bound_connection() {
    let snapshot = sample_snapshot();
    insta::assert_json_snapshot!(snapshot.connections[0], @r###"
    {
      "id": "c1",
      "fromNodeId": "n1",
      "toNodeId": "n2",
      "fromHandle": "right",
      "label": "opens"
    }
    "###);
}

#[test]
fn test_field_names_are_camel_case() {
    let value = serde_json::to_value(sample_snapshot()).unwrap();

    assert_eq!(
        value["nodes"][0],
        json!({"id": "n1", "layerId": "customer", "x": 10.0, "y": 20.0, "text": "Browse"})
    );
    assert_eq!(
        value["connections"][1],
        json!({"id": "c2", "fromNodeId": "n2", "looseEnd": {"x": 640.0, "y": 80.5}})
    );
    assert_eq!(
        value["viewport"],
        json!({"scale": 1.5, "offsetX": -20.0, "offsetY": 40.0})
    );
}

// ============================================================================
// Parsing and validation
// ============================================================================

#[test]
fn test_json_round_trip() {
    let snapshot = sample_snapshot();
    let json = snapshot.to_json_pretty().unwrap();
    let parsed = DiagramSnapshot::from_json(&json).unwrap();
    assert_eq!(parsed, snapshot);
}

#[test]
fn test_missing_optional_sections_default() {
    let parsed = DiagramSnapshot::from_json(
        r##"{"layers": [{"id": "l", "name": "L", "color": "#000000"}]}"##,
    )
    .unwrap();

    assert!(parsed.nodes.is_empty());
    assert!(parsed.connections.is_empty());
    assert_eq!(parsed.viewport, Viewport::reset());
    assert!(parsed.layers[0].visible);
}

#[test]
fn test_empty_layers_become_default_layers() {
    let parsed = DiagramSnapshot::from_json(
        r#"{
            "layers": [],
            "nodes": [{"id": "n", "layerId": "backstage", "x": 0, "y": 0, "text": ""}]
        }"#,
    )
    .unwrap();

    let (diagram, _) = parsed.into_parts();
    assert_eq!(diagram.layers().len(), 3);
    assert!(diagram.is_node_visible(&NodeId::from("n")));
}

#[test]
fn test_malformed_json_is_rejected() {
    let result = DiagramSnapshot::from_json("{\"layers\": [");
    assert!(matches!(result, Err(SnapshotError::Json(_))));

    let result = DiagramSnapshot::from_json(r#"{"layers": 3}"#);
    assert!(matches!(result, Err(SnapshotError::Json(_))));
}

#[test]
fn test_missing_layers_key_uses_default_layers() {
    let parsed = DiagramSnapshot::from_json(
        r#"{"nodes": [{"id": "n", "layerId": "customer", "x": 0, "y": 0, "text": ""}]}"#,
    )
    .unwrap();

    assert!(parsed.layers.is_empty());
    let (diagram, _) = parsed.into_parts();
    let ids: Vec<_> = diagram.layers().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["customer", "frontstage", "backstage"]);
}

#[test]
fn test_self_loop_connection_is_rejected() {
    let mut snapshot = sample_snapshot();
    snapshot.connections[0].to = ConnectionEnd::Node(NodeId::from("n1"));
    assert!(matches!(
        snapshot.validate(),
        Err(SnapshotError::InvalidShape(_))
    ));
}

#[test]
fn test_duplicate_connection_pair_is_rejected() {
    let mut snapshot = sample_snapshot();
    let mut copy = snapshot.connections[0].clone();
    copy.id = ConnectionId::from("c3");
    copy.label = None;
    snapshot.connections.push(copy);

    assert!(matches!(
        snapshot.validate(),
        Err(SnapshotError::InvalidShape(_))
    ));
}

#[test]
fn test_reverse_pair_and_repeated_loose_ends_are_accepted() {
    let mut snapshot = sample_snapshot();
    snapshot.connections.push(Connection {
        id: ConnectionId::from("c3"),
        from_node_id: NodeId::from("n2"),
        to: ConnectionEnd::Node(NodeId::from("n1")),
        from_handle: None,
        to_handle: None,
        label: None,
    });
    snapshot.connections.push(Connection {
        id: ConnectionId::from("c4"),
        from_node_id: NodeId::from("n2"),
        to: ConnectionEnd::Loose(Point::new(640.0, 80.5)),
        from_handle: None,
        to_handle: None,
        label: None,
    });

    snapshot.validate().unwrap();
}

#[test]
fn test_scale_above_range_is_clamped_on_import() {
    let mut snapshot = sample_snapshot();
    snapshot.viewport.scale = 10.0;
    snapshot.validate().unwrap();

    let (_, viewport) = snapshot.into_parts();
    assert_eq!(viewport.scale, MAX_SCALE);
    assert_eq!(viewport.offset(), Point::new(-20.0, 40.0));

    let anchor = Point::new(100.0, 100.0);
    assert_eq!(viewport.zoom_at(0.0, Some(anchor)), viewport);
}

#[test]
fn test_scale_below_range_is_clamped_on_import() {
    let mut snapshot = sample_snapshot();
    snapshot.viewport.scale = 0.05;

    let (_, viewport) = snapshot.into_parts();
    assert_eq!(viewport.scale, MIN_SCALE);
    assert_eq!(viewport.zoom_at(0.0, None), viewport);
}

#[test]
fn test_node_on_unknown_layer_is_rejected() {
    let mut snapshot = sample_snapshot();
    snapshot.nodes[0].layer_id = "ghost".into();
    assert!(matches!(
        snapshot.validate(),
        Err(SnapshotError::InvalidShape(_))
    ));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let mut snapshot = sample_snapshot();
    snapshot.nodes[1].id = NodeId::from("n1");
    assert!(matches!(
        snapshot.validate(),
        Err(SnapshotError::InvalidShape(_))
    ));
}

#[test]
fn test_degenerate_viewport_is_rejected() {
    let mut snapshot = sample_snapshot();
    snapshot.viewport.scale = 0.0;
    assert!(snapshot.validate().is_err());
}

#[test]
fn test_dangling_connection_is_accepted_but_hidden() {
    let mut snapshot = sample_snapshot();
    snapshot.connections[0].to = ConnectionEnd::Node(NodeId::from("deleted"));
    snapshot.validate().unwrap();

    let (diagram, _) = snapshot.into_parts();
    assert_eq!(diagram.connections().len(), 2);
    let visible: Vec<_> = diagram
        .visible_connections()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(visible, ["c2"]);
}
