//! Frames, key frames, and the scene, node, and edge visual records.

use std::collections::BTreeMap;

use crate::{
    foundation::core::{AnnotationId, EdgeId, NodeId, Point3, Rgba, Size},
    frame::annotation::AnnotationVisual,
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A flat snapshot of every interpolatable attribute of one graph-view state.
///
/// A frame is pure data with typed get/set access and no behavior: how it is
/// populated from a live view ([`crate::ViewCapture`]) or pushed back onto one
/// ([`crate::ViewApply`]) is a host concern. Two frames of the same animation
/// may track different entity sets; entities appearing or disappearing
/// between key states is expected, not an error.
pub struct Frame {
    /// Scene-wide properties (one record per frame, not per entity).
    pub scene: SceneVisual,
    /// Per-node appearance keyed by stable node id.
    pub nodes: BTreeMap<NodeId, NodeVisual>,
    /// Per-edge appearance keyed by stable edge id.
    pub edges: BTreeMap<EdgeId, EdgeVisual>,
    /// Per-annotation appearance keyed by minted annotation id.
    pub annotations: BTreeMap<AnnotationId, AnnotationVisual>,
}

impl Frame {
    /// Empty frame with default scene properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Node record, if this frame tracks `id`.
    pub fn node(&self, id: NodeId) -> Option<&NodeVisual> {
        self.nodes.get(&id)
    }

    /// Insert or replace a node record.
    pub fn set_node(&mut self, id: NodeId, visual: NodeVisual) {
        self.nodes.insert(id, visual);
    }

    /// Edge record, if this frame tracks `id`.
    pub fn edge(&self, id: EdgeId) -> Option<&EdgeVisual> {
        self.edges.get(&id)
    }

    /// Insert or replace an edge record.
    pub fn set_edge(&mut self, id: EdgeId, visual: EdgeVisual) {
        self.edges.insert(id, visual);
    }

    /// Annotation record, if this frame tracks `id`.
    pub fn annotation(&self, id: AnnotationId) -> Option<&AnnotationVisual> {
        self.annotations.get(&id)
    }

    /// Insert or replace an annotation record.
    pub fn set_annotation(&mut self, id: AnnotationId, visual: AnnotationVisual) {
        self.annotations.insert(id, visual);
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A key frame authored by the user, tagged with its interpolation stride.
pub struct KeyFrame {
    /// The captured state.
    pub frame: Frame,
    /// Stride to the next key: the segment between this key and the next
    /// occupies `steps + 1` output slots, so `steps - 1` intermediate frames
    /// are synthesized. Defaults to the animation fps.
    pub steps: u32,
}

impl KeyFrame {
    /// Tag a frame with a stride to the following key.
    pub fn new(frame: Frame, steps: u32) -> Self {
        Self { frame, steps }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Scene-wide visual properties of one frame.
pub struct SceneVisual {
    /// View title.
    pub title: String,
    /// Background color.
    pub background: Rgba,
    /// View scale factor.
    pub zoom: f64,
    /// Logical scene size.
    pub size: f64,
    /// Viewport width in pixels.
    pub width: f64,
    /// Viewport height in pixels.
    pub height: f64,
    /// 3D center point of the viewport.
    pub center: Point3,
}

impl Default for SceneVisual {
    fn default() -> Self {
        Self {
            title: String::new(),
            background: Rgba::opaque(255, 255, 255),
            zoom: 1.0,
            size: 0.0,
            width: 0.0,
            height: 0.0,
            center: Point3::ZERO,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Appearance of one node in one frame.
///
/// Optional fields model attributes a capture host may not provide; the
/// interpolation engine substitutes the other endpoint's value for an unset
/// one instead of blending toward a default.
pub struct NodeVisual {
    /// Node outline shape; not blended, intermediates take the end value.
    pub shape: NodeShape,
    /// Position in view space.
    pub position: Point3,
    /// Width and height.
    pub size: Size,
    /// Border stroke width.
    pub border_width: f64,
    /// Border color.
    pub border_color: Option<Rgba>,
    /// Border opacity, 0..=255.
    pub border_opacity: Option<u8>,
    /// Fill color.
    pub fill_color: Option<Rgba>,
    /// Fill opacity, 0..=255.
    pub fill_opacity: Option<u8>,
    /// Label text.
    pub label: Option<String>,
    /// Label color.
    pub label_color: Option<Rgba>,
    /// Label font descriptor.
    pub label_font: Option<FontSpec>,
    /// Label font size; `0.0` means unset, never a size to blend toward.
    pub label_size: Option<f64>,
    /// Label opacity, 0..=255.
    pub label_opacity: Option<u8>,
    /// Maximum label width.
    pub label_width: Option<f64>,
}

impl Default for NodeVisual {
    fn default() -> Self {
        Self {
            shape: NodeShape::default(),
            position: Point3::ZERO,
            size: Size::ZERO,
            border_width: 0.0,
            border_color: None,
            border_opacity: None,
            fill_color: None,
            fill_opacity: None,
            label: None,
            label_color: None,
            label_font: None,
            label_size: None,
            label_opacity: None,
            label_width: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Appearance of one edge in one frame.
pub struct EdgeVisual {
    /// Overall line color.
    pub color: Option<Rgba>,
    /// Overall line opacity, 0..=255.
    pub opacity: Option<u8>,
    /// Stroke color (unselected paint).
    pub stroke_color: Option<Rgba>,
    /// Stroke opacity, 0..=255.
    pub stroke_opacity: Option<u8>,
    /// Line width.
    pub width: f64,
    /// Label text.
    pub label: Option<String>,
    /// Label color.
    pub label_color: Option<Rgba>,
    /// Label font descriptor.
    pub label_font: Option<FontSpec>,
    /// Label font size; `0.0` means unset.
    pub label_size: Option<f64>,
    /// Label opacity, 0..=255.
    pub label_opacity: Option<u8>,
    /// Arrowhead at the source end; intermediates take the end value.
    pub source_arrow: ArrowShape,
    /// Arrowhead at the target end; intermediates take the end value.
    pub target_arrow: ArrowShape,
    /// Line style; intermediates take the end value.
    pub line_style: LineStyle,
}

impl Default for EdgeVisual {
    fn default() -> Self {
        Self {
            color: None,
            opacity: None,
            stroke_color: None,
            stroke_opacity: None,
            width: 1.0,
            label: None,
            label_color: None,
            label_font: None,
            label_size: None,
            label_opacity: None,
            source_arrow: ArrowShape::default(),
            target_arrow: ArrowShape::default(),
            line_style: LineStyle::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Closed set of node outline shapes.
pub enum NodeShape {
    /// Ellipse (the common default in graph views).
    #[default]
    Ellipse,
    /// Axis-aligned rectangle.
    Rectangle,
    /// Rectangle with rounded corners.
    RoundRectangle,
    /// Triangle.
    Triangle,
    /// Diamond.
    Diamond,
    /// Hexagon.
    Hexagon,
    /// Octagon.
    Octagon,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Closed set of edge arrowhead shapes.
pub enum ArrowShape {
    /// No arrowhead.
    #[default]
    None,
    /// Filled triangular delta.
    Delta,
    /// Open arrow.
    Arrow,
    /// Diamond head.
    Diamond,
    /// Circle head.
    Circle,
    /// Perpendicular tee.
    Tee,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Closed set of edge line styles.
pub enum LineStyle {
    /// Solid stroke.
    #[default]
    Solid,
    /// Dashed stroke.
    Dash,
    /// Dotted stroke.
    Dot,
    /// Alternating dash-dot stroke.
    DashDot,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Font descriptor for node, edge, and annotation labels.
///
/// Size is tracked separately on the owning record so it can be blended
/// numerically; the face itself follows the discrete interpolation policy.
pub struct FontSpec {
    /// Font family name as reported by the host.
    pub family: String,
    /// Face style.
    pub style: FontStyle,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Font face styles.
pub enum FontStyle {
    /// Regular weight, upright.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
    /// Italic slant.
    Italic,
    /// Bold and italic.
    BoldItalic,
}

#[cfg(test)]
#[path = "../../tests/unit/frame/model.rs"]
mod tests;
