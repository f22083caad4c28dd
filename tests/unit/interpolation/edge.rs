use super::*;

use crate::{
    foundation::core::{EdgeId, Rgba},
    frame::model::{ArrowShape, LineStyle},
};

fn run(from: Frame, to: Frame, n: usize) -> Vec<Frame> {
    let mut mid = vec![Frame::default(); n];
    EdgeInterpolator.interpolate(&from, &to, &mut mid);
    mid
}

#[test]
fn widths_blend_linearly() {
    let mut from = Frame::new();
    from.set_edge(
        EdgeId(1),
        EdgeVisual {
            width: 1.0,
            ..EdgeVisual::default()
        },
    );
    let mut to = Frame::new();
    to.set_edge(
        EdgeId(1),
        EdgeVisual {
            width: 5.0,
            ..EdgeVisual::default()
        },
    );

    let mid = run(from, to, 3);
    let widths: Vec<f64> = mid
        .iter()
        .map(|f| f.edge(EdgeId(1)).unwrap().width)
        .collect();
    assert_eq!(widths, vec![2.0, 3.0, 4.0]);
}

#[test]
fn edge_present_at_one_endpoint_holds_constant() {
    let visual = EdgeVisual {
        color: Some(Rgba::opaque(10, 20, 30)),
        width: 2.0,
        ..EdgeVisual::default()
    };
    let from = Frame::new();
    let mut to = Frame::new();
    to.set_edge(EdgeId(4), visual.clone());

    let mid = run(from, to, 5);
    for frame in &mid {
        assert_eq!(frame.edge(EdgeId(4)), Some(&visual));
    }
}

#[test]
fn stroke_colors_blend_opaque() {
    let mut a = EdgeVisual::default();
    a.stroke_color = Some(Rgba::opaque(0, 0, 0));
    let mut b = EdgeVisual::default();
    b.stroke_color = Some(Rgba::opaque(0, 200, 0));

    let records = edge_records(&a, &b, 1);
    let c = records[0].stroke_color.unwrap();
    assert_eq!((c.r, c.g, c.b, c.a), (0, 100, 0, 255));
}

#[test]
fn arrows_and_line_style_take_end_values() {
    let mut a = EdgeVisual::default();
    a.source_arrow = ArrowShape::Circle;
    a.line_style = LineStyle::Dot;
    let mut b = EdgeVisual::default();
    b.source_arrow = ArrowShape::Delta;
    b.target_arrow = ArrowShape::Tee;
    b.line_style = LineStyle::Dash;

    let records = edge_records(&a, &b, 4);
    for record in &records {
        assert_eq!(record.source_arrow, ArrowShape::Delta);
        assert_eq!(record.target_arrow, ArrowShape::Tee);
        assert_eq!(record.line_style, LineStyle::Dash);
    }
}

#[test]
fn unset_label_on_both_sides_stays_unset() {
    let records = edge_records(&EdgeVisual::default(), &EdgeVisual::default(), 3);
    for record in &records {
        assert_eq!(record.label, None);
        assert_eq!(record.label_size, None);
    }
}
