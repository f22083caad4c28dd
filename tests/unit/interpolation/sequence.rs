use super::*;

use crate::foundation::core::{NodeId, Point3};
use crate::frame::model::NodeVisual;

fn key_with_node(x: f64, steps: u32) -> KeyFrame {
    let mut frame = Frame::new();
    frame.set_node(
        NodeId(1),
        NodeVisual {
            position: Point3::new(x, 0.0, 0.0),
            ..NodeVisual::default()
        },
    );
    KeyFrame::new(frame, steps)
}

#[test]
fn empty_key_list_yields_empty_sequence() {
    assert_eq!(build_sequence(&[]).unwrap(), Vec::<Frame>::new());
}

#[test]
fn single_key_yields_itself() {
    let key = key_with_node(5.0, 30);
    let frames = build_sequence(std::slice::from_ref(&key)).unwrap();
    assert_eq!(frames, vec![key.frame]);
}

#[test]
fn two_keys_expand_to_steps_plus_one() {
    let keys = [key_with_node(0.0, 10), key_with_node(100.0, 10)];
    let frames = build_sequence(&keys).unwrap();
    assert_eq!(frames.len(), 11);

    let x = |i: usize| frames[i].node(NodeId(1)).unwrap().position.x;
    assert_eq!(x(0), 0.0);
    assert_eq!(x(5), 50.0);
    assert_eq!(x(10), 100.0);
}

#[test]
fn keys_land_at_cumulative_offsets() {
    let keys = [
        key_with_node(0.0, 4),
        key_with_node(10.0, 2),
        key_with_node(30.0, 7),
    ];
    let frames = build_sequence(&keys).unwrap();
    assert_eq!(frames.len(), 4 + 2 + 1);
    assert_eq!(frames[0], keys[0].frame);
    assert_eq!(frames[4], keys[1].frame);
    assert_eq!(frames[6], keys[2].frame);
}

#[test]
fn zero_steps_before_a_following_key_is_rejected() {
    let keys = [key_with_node(0.0, 0), key_with_node(1.0, 10)];
    let err = build_sequence(&keys).unwrap_err();
    assert!(matches!(err, KinegraphError::Validation(_)));
    assert!(err.to_string().contains("key 0"));
}

#[test]
fn zero_steps_on_the_terminal_key_is_fine() {
    let keys = [key_with_node(0.0, 3), key_with_node(9.0, 0)];
    let frames = build_sequence(&keys).unwrap();
    assert_eq!(frames.len(), 4);
}

#[test]
fn adjacent_keys_produce_no_intermediates() {
    let keys = [key_with_node(0.0, 1), key_with_node(9.0, 1)];
    let frames = build_sequence(&keys).unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0], keys[0].frame);
    assert_eq!(frames[1], keys[1].frame);
}

#[test]
fn rebuilding_is_deterministic() {
    let keys = [
        key_with_node(0.0, 13),
        key_with_node(47.0, 5),
        key_with_node(-3.0, 21),
    ];
    let first = build_sequence(&keys).unwrap();
    let second = build_sequence(&keys).unwrap();
    assert_eq!(first, second);
}

#[test]
fn scene_is_interpolated_alongside_entities() {
    let mut a = key_with_node(0.0, 2);
    a.frame.scene.zoom = 1.0;
    let mut b = key_with_node(10.0, 2);
    b.frame.scene.zoom = 3.0;

    let frames = build_sequence(&[a, b]).unwrap();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[1].scene.zoom, 2.0);
}
