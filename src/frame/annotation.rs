//! Annotation visual records, one closed kind per annotation.

use crate::{
    foundation::core::{Point, Rgba, Size},
    frame::model::FontSpec,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Appearance of one annotation in one frame.
///
/// Position and zoom are common to every kind; everything else lives on the
/// [`AnnotationKind`] variant so each kind carries only the fields relevant
/// to it, dispatched by pattern matching.
pub struct AnnotationVisual {
    /// Anchor position in view space.
    pub position: Point,
    /// Kind-specific zoom factor.
    pub zoom: f64,
    /// Kind tag plus kind-specific fields.
    pub kind: AnnotationKind,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// The closed set of annotation kinds.
///
/// Kinds never blend into each other: an annotation keeps one kind for its
/// whole lifetime. The order of variants is also the interpolation order
/// partition: arrow annotations are always processed after every other kind,
/// because arrows derive fallback coloring from other annotations' border
/// and fill colors when applied to a view.
pub enum AnnotationKind {
    /// Free-standing text.
    Text(TextAnnotation),
    /// Text inside a bounding shape.
    BoundedText(BoundedTextAnnotation),
    /// Plain shape.
    Shape(ShapeAnnotation),
    /// Image with an optional border.
    Image(ImageAnnotation),
    /// Arrow connecting annotations or entities.
    Arrow(ArrowAnnotation),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Fields of a free text annotation.
pub struct TextAnnotation {
    /// The text content.
    pub text: String,
    /// Text color.
    pub text_color: Option<Rgba>,
    /// Font face.
    pub font: Option<FontSpec>,
    /// Font size; `0.0` means unset.
    pub font_size: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Fields of a bounded text annotation (text inside a shape).
pub struct BoundedTextAnnotation {
    /// The text content.
    pub text: String,
    /// Text color.
    pub text_color: Option<Rgba>,
    /// Font face.
    pub font: Option<FontSpec>,
    /// Font size; `0.0` means unset.
    pub font_size: Option<f64>,
    /// Bounding shape fill color.
    pub fill_color: Option<Rgba>,
    /// Bounding shape border color.
    pub border_color: Option<Rgba>,
    /// Bounding shape border width.
    pub border_width: f64,
    /// Bounding shape type tag; intermediates take the end value.
    pub shape: ShapeType,
    /// Bounding shape size.
    pub size: Size,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Fields of a plain shape annotation.
pub struct ShapeAnnotation {
    /// Fill color.
    pub fill_color: Option<Rgba>,
    /// Border color.
    pub border_color: Option<Rgba>,
    /// Border width.
    pub border_width: f64,
    /// Shape type tag; intermediates take the end value.
    pub shape: ShapeType,
    /// Shape size.
    pub size: Size,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Fields of an image annotation.
pub struct ImageAnnotation {
    /// Border color.
    pub border_color: Option<Rgba>,
    /// Border width.
    pub border_width: f64,
    /// Crop shape tag; intermediates take the end value.
    pub shape: ShapeType,
    /// Image size.
    pub size: Size,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Fields of an arrow annotation.
pub struct ArrowAnnotation {
    /// Line color.
    pub line_color: Option<Rgba>,
    /// Arrowhead color at the source end.
    pub source_color: Option<Rgba>,
    /// Arrowhead color at the target end.
    pub target_color: Option<Rgba>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Closed set of annotation shape types.
pub enum ShapeType {
    /// Axis-aligned rectangle.
    #[default]
    Rectangle,
    /// Rectangle with rounded corners.
    RoundedRectangle,
    /// Ellipse.
    Ellipse,
    /// Triangle.
    Triangle,
    /// Hexagon.
    Hexagon,
    /// Octagon.
    Octagon,
}

impl AnnotationVisual {
    /// Whether this annotation is an arrow (interpolated after other kinds).
    pub fn is_arrow(&self) -> bool {
        matches!(self.kind, AnnotationKind::Arrow(_))
    }

    /// Fill color, for kinds that have one. Arrows expose their target
    /// arrowhead color here, mirroring how hosts store arrow colors.
    pub fn fill_color(&self) -> Option<Rgba> {
        match &self.kind {
            AnnotationKind::Text(_) => None,
            AnnotationKind::BoundedText(a) => a.fill_color,
            AnnotationKind::Shape(a) => a.fill_color,
            AnnotationKind::Image(_) => None,
            AnnotationKind::Arrow(a) => a.target_color,
        }
    }

    /// Border color; arrows expose their line color here.
    pub fn border_color(&self) -> Option<Rgba> {
        match &self.kind {
            AnnotationKind::Text(_) => None,
            AnnotationKind::BoundedText(a) => a.border_color,
            AnnotationKind::Shape(a) => a.border_color,
            AnnotationKind::Image(a) => a.border_color,
            AnnotationKind::Arrow(a) => a.line_color,
        }
    }

    /// Text color; arrows expose their source arrowhead color here.
    pub fn text_color(&self) -> Option<Rgba> {
        match &self.kind {
            AnnotationKind::Text(a) => a.text_color,
            AnnotationKind::BoundedText(a) => a.text_color,
            AnnotationKind::Shape(_) | AnnotationKind::Image(_) => None,
            AnnotationKind::Arrow(a) => a.source_color,
        }
    }

    /// Font size, for text-bearing kinds; `0.0` is reported as unset.
    pub fn font_size(&self) -> Option<f64> {
        let size = match &self.kind {
            AnnotationKind::Text(a) => a.font_size,
            AnnotationKind::BoundedText(a) => a.font_size,
            _ => None,
        };
        size.filter(|s| *s != 0.0)
    }

    /// Border width, for kinds that have one; `0.0` is reported as unset.
    pub fn border_width(&self) -> Option<f64> {
        let width = match &self.kind {
            AnnotationKind::BoundedText(a) => Some(a.border_width),
            AnnotationKind::Shape(a) => Some(a.border_width),
            AnnotationKind::Image(a) => Some(a.border_width),
            _ => None,
        };
        width.filter(|w| *w != 0.0)
    }

    /// Bounding size, for kinds that have one.
    pub fn size(&self) -> Option<Size> {
        match &self.kind {
            AnnotationKind::BoundedText(a) => Some(a.size),
            AnnotationKind::Shape(a) => Some(a.size),
            AnnotationKind::Image(a) => Some(a.size),
            _ => None,
        }
    }

    /// Free text, for text-bearing kinds; empty text is reported as unset.
    pub fn text(&self) -> Option<&str> {
        let text = match &self.kind {
            AnnotationKind::Text(a) => Some(a.text.as_str()),
            AnnotationKind::BoundedText(a) => Some(a.text.as_str()),
            _ => None,
        };
        text.filter(|t| !t.is_empty())
    }

    /// Write the fill color if the kind supports one.
    pub fn set_fill_color(&mut self, color: Rgba) {
        match &mut self.kind {
            AnnotationKind::BoundedText(a) => a.fill_color = Some(color),
            AnnotationKind::Shape(a) => a.fill_color = Some(color),
            AnnotationKind::Arrow(a) => a.target_color = Some(color),
            AnnotationKind::Text(_) | AnnotationKind::Image(_) => {}
        }
    }

    /// Write the border color if the kind supports one.
    pub fn set_border_color(&mut self, color: Rgba) {
        match &mut self.kind {
            AnnotationKind::BoundedText(a) => a.border_color = Some(color),
            AnnotationKind::Shape(a) => a.border_color = Some(color),
            AnnotationKind::Image(a) => a.border_color = Some(color),
            AnnotationKind::Arrow(a) => a.line_color = Some(color),
            AnnotationKind::Text(_) => {}
        }
    }

    /// Write the text color if the kind supports one.
    pub fn set_text_color(&mut self, color: Rgba) {
        match &mut self.kind {
            AnnotationKind::Text(a) => a.text_color = Some(color),
            AnnotationKind::BoundedText(a) => a.text_color = Some(color),
            AnnotationKind::Arrow(a) => a.source_color = Some(color),
            AnnotationKind::Shape(_) | AnnotationKind::Image(_) => {}
        }
    }

    /// Write the font size if the kind supports one.
    pub fn set_font_size(&mut self, size: f64) {
        match &mut self.kind {
            AnnotationKind::Text(a) => a.font_size = Some(size),
            AnnotationKind::BoundedText(a) => a.font_size = Some(size),
            _ => {}
        }
    }

    /// Write the border width if the kind supports one.
    pub fn set_border_width(&mut self, width: f64) {
        match &mut self.kind {
            AnnotationKind::BoundedText(a) => a.border_width = width,
            AnnotationKind::Shape(a) => a.border_width = width,
            AnnotationKind::Image(a) => a.border_width = width,
            _ => {}
        }
    }

    /// Write the bounding size if the kind supports one.
    pub fn set_size(&mut self, size: Size) {
        match &mut self.kind {
            AnnotationKind::BoundedText(a) => a.size = size,
            AnnotationKind::Shape(a) => a.size = size,
            AnnotationKind::Image(a) => a.size = size,
            _ => {}
        }
    }

    /// Write the free text if the kind supports it.
    pub fn set_text(&mut self, text: impl Into<String>) {
        match &mut self.kind {
            AnnotationKind::Text(a) => a.text = text.into(),
            AnnotationKind::BoundedText(a) => a.text = text.into(),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/annotation.rs"]
mod tests;
