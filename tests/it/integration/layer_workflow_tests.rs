//! Sidebar and toolbar workflows: layers, node creation, presets, zoom.

use crate::helpers::{TestDiagramBuilder, assert_close, click, press, pt};
use layerboard::types::Layer;
use layerboard::{Layerboard, LayerId, NodeId, ReorderDirection, Selection};

#[test]
fn test_fresh_editor_state() {
    let app = Layerboard::default();
    assert_eq!(app.diagram().layers().len(), 3);
    assert_eq!(app.selected_layer_id(), &LayerId::from("customer"));
    assert!(app.selection().is_none());
    assert!(app.input_state().is_idle());
}

#[test]
fn test_add_node_lands_at_viewport_center() {
    let mut app = Layerboard::default();

    let id = app.add_node().unwrap();

    let node = app.diagram().node(&id).unwrap();
    assert_eq!(node.position(), pt(400.0, 300.0));
    assert_eq!(node.layer_id, LayerId::from("customer"));
    assert_eq!(node.text, "New node");
    assert_eq!(app.selection(), &Selection::Node(id));
}

#[test]
fn test_add_node_accounts_for_pan_and_zoom() {
    let mut app = TestDiagramBuilder::new()
        .with_scale(2.0)
        .with_offset(100.0, 100.0)
        .build();
    app.set_container_size(1000.0, 500.0);

    let id = app.add_node().unwrap();

    let node = app.diagram().node(&id).unwrap();
    assert_eq!(node.position(), pt(200.0, 75.0));
}

#[test]
fn test_single_custom_layer_cannot_be_deleted() {
    let mut app = TestDiagramBuilder::new()
        .with_layers(vec![Layer::new("solo", "Solo", "#111111")])
        .with_node("n", "solo", (0.0, 0.0))
        .build();
    assert_eq!(app.selected_layer_id(), &LayerId::from("solo"));

    assert!(!app.delete_layer(&LayerId::from("solo")));
    assert_eq!(app.diagram().layers().len(), 1);
    assert!(app.diagram().node(&NodeId::from("n")).is_some());

    let id = app.add_node().unwrap();
    assert_eq!(app.diagram().node(&id).unwrap().layer_id, LayerId::from("solo"));
}

#[test]
fn test_new_layer_becomes_target_for_nodes() {
    let mut app = Layerboard::default();

    let layer = app.add_layer(Some("Support".into()), None);
    assert_eq!(app.selected_layer_id(), &layer);
    let node = app.add_node().unwrap();

    assert_eq!(app.diagram().node(&node).unwrap().layer_id, layer);
    assert_eq!(app.diagram().layer_order(&layer), Some(3));
}

#[test]
fn test_select_layer_ignores_unknown_ids() {
    let mut app = Layerboard::default();
    assert!(app.select_layer(&LayerId::from("backstage")));
    assert!(!app.select_layer(&LayerId::from("ghost")));
    assert_eq!(app.selected_layer_id(), &LayerId::from("backstage"));
}

#[test]
fn test_delete_layer_clears_dangling_selection() {
    let mut app = TestDiagramBuilder::new()
        .with_node("a", "frontstage", (0.0, 0.0))
        .with_node("b", "customer", (300.0, 0.0))
        .build();
    app.select_layer(&LayerId::from("frontstage"));
    click(&mut app, 90.0, 60.0);
    assert_eq!(app.selection(), &Selection::Node(NodeId::from("a")));

    assert!(app.delete_layer(&LayerId::from("frontstage")));

    assert!(app.selection().is_none());
    assert_eq!(app.selected_layer_id(), &LayerId::from("customer"));
    assert_eq!(app.diagram().nodes().len(), 1);
}

#[test]
fn test_delete_layer_while_dragging_its_node_resets_input() {
    let mut app = TestDiagramBuilder::new()
        .with_node("a", "frontstage", (0.0, 0.0))
        .build();
    press(&mut app, 90.0, 60.0);
    assert!(app.input_state().is_dragging_node());

    app.delete_layer(&LayerId::from("frontstage"));
    assert!(app.input_state().is_idle());
}

#[test]
fn test_last_layer_survives_delete() {
    let mut app = Layerboard::default();
    assert!(app.delete_layer(&LayerId::from("customer")));
    assert!(app.delete_layer(&LayerId::from("frontstage")));
    assert!(!app.delete_layer(&LayerId::from("backstage")));
    assert_eq!(app.diagram().layers().len(), 1);
}

#[test]
fn test_hidden_layer_is_not_hit() {
    let mut app = TestDiagramBuilder::new()
        .with_node("a", "customer", (0.0, 0.0))
        .build();
    app.toggle_visibility(&LayerId::from("customer"));

    press(&mut app, 90.0, 60.0);

    assert!(app.input_state().is_panning());
    assert_eq!(app.visible_nodes().count(), 0);
}

#[test]
fn test_reorder_and_rename() {
    let mut app = Layerboard::default();
    assert!(app.reorder_layer(&LayerId::from("customer"), ReorderDirection::Down));
    assert!(!app.reorder_layer(&LayerId::from("frontstage"), ReorderDirection::Up));
    assert!(app.rename_layer(&LayerId::from("customer"), "Guests"));
    assert!(!app.rename_layer(&LayerId::from("ghost"), "Nobody"));

    let names: Vec<_> = app.diagram().layers().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names[1], "Guests");
}

#[test]
fn test_apply_preset_replaces_everything() {
    let mut app = TestDiagramBuilder::new()
        .with_node("a", "customer", (0.0, 0.0))
        .with_node("b", "customer", (300.0, 0.0))
        .build();
    click(&mut app, 90.0, 60.0);

    assert!(app.apply_preset("journey"));

    let ids: Vec<_> = app.diagram().layers().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["touchpoints", "emotions"]);
    assert!(app.diagram().nodes().is_empty());
    assert!(app.diagram().connections().is_empty());
    assert!(app.selection().is_none());
    assert_eq!(app.selected_layer_id(), &LayerId::from("touchpoints"));
}

#[test]
fn test_unknown_preset_is_ignored() {
    let mut app = Layerboard::default();
    app.add_node();
    assert!(!app.apply_preset("kanban"));
    assert_eq!(app.diagram().nodes().len(), 1);
}

#[test]
fn test_toolbar_zoom_and_reset() {
    let mut app = TestDiagramBuilder::new().with_offset(10.0, 20.0).build();

    app.zoom_by(0.5);
    assert_close(app.viewport().scale, 1.5);
    assert_eq!(app.viewport().offset(), pt(10.0, 20.0));

    app.zoom_by(-5.0);
    assert_close(app.viewport().scale, 0.3);

    app.reset_viewport();
    assert_eq!(app.viewport(), layerboard::Viewport::reset());
}
