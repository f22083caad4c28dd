use super::*;

use crate::foundation::core::NodeId;

#[test]
fn default_scene_is_white_at_unit_zoom() {
    let scene = SceneVisual::default();
    assert_eq!(scene.background, Rgba::opaque(255, 255, 255));
    assert_eq!(scene.zoom, 1.0);
    assert!(scene.title.is_empty());
}

#[test]
fn typed_accessors_roundtrip_records() {
    let mut frame = Frame::new();
    assert!(frame.node(NodeId(1)).is_none());

    let visual = NodeVisual {
        label: Some("hub".into()),
        ..NodeVisual::default()
    };
    frame.set_node(NodeId(1), visual.clone());
    assert_eq!(frame.node(NodeId(1)), Some(&visual));

    frame.set_edge(EdgeId(9), EdgeVisual::default());
    assert_eq!(frame.edge(EdgeId(9)), Some(&EdgeVisual::default()));
}

#[test]
fn node_iteration_order_is_deterministic() {
    let mut frame = Frame::new();
    for id in [5, 1, 3] {
        frame.set_node(NodeId(id), NodeVisual::default());
    }
    let ids: Vec<u64> = frame.nodes.keys().map(|id| id.0).collect();
    assert_eq!(ids, vec![1, 3, 5]);
}

#[test]
fn default_edge_has_unit_width_and_solid_line() {
    let edge = EdgeVisual::default();
    assert_eq!(edge.width, 1.0);
    assert_eq!(edge.line_style, LineStyle::Solid);
    assert_eq!(edge.source_arrow, ArrowShape::None);
}

#[test]
fn frame_survives_serde_roundtrip() {
    let mut frame = Frame::new();
    frame.scene.title = "session".into();
    frame.set_node(
        NodeId(2),
        NodeVisual {
            fill_color: Some(Rgba::opaque(200, 40, 40)),
            label_font: Some(FontSpec {
                family: "SansSerif".into(),
                style: FontStyle::Bold,
            }),
            ..NodeVisual::default()
        },
    );
    let key = KeyFrame::new(frame, 30);

    let json = serde_json::to_string(&key).unwrap();
    let back: KeyFrame = serde_json::from_str(&json).unwrap();
    assert_eq!(back, key);
}
