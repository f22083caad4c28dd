use crate::{
    frame::model::{EdgeVisual, Frame},
    interpolation::{
        EntityInterpolator,
        attribute::{
            color_series, discrete_series, linear_series, opacity_series, resolve_pair,
            resolve_pair_cloned,
        },
        union_ids,
    },
};

/// Entity-set interpolator for edges.
pub(crate) struct EdgeInterpolator;

impl EntityInterpolator for EdgeInterpolator {
    fn interpolate(&self, from: &Frame, to: &Frame, mid: &mut [Frame]) {
        let n = mid.len();
        if n == 0 {
            return;
        }
        for id in union_ids(&from.edges, &to.edges) {
            let (a, b) = match (from.edges.get(&id), to.edges.get(&id)) {
                (None, None) => continue,
                (Some(a), None) => (a, a),
                (None, Some(b)) => (b, b),
                (Some(a), Some(b)) => (a, b),
            };
            for (slot, record) in mid.iter_mut().zip(edge_records(a, b, n)) {
                slot.edges.insert(id, record);
            }
        }
    }
}

fn edge_records(a: &EdgeVisual, b: &EdgeVisual, n: usize) -> Vec<EdgeVisual> {
    let widths = linear_series(a.width, b.width, n);

    let colors = resolve_pair(a.color, b.color).map(|(s, e)| color_series(s, e, n, false));
    let opacities = resolve_pair(a.opacity, b.opacity).map(|(s, e)| opacity_series(s, e, n));
    let stroke_colors =
        resolve_pair(a.stroke_color, b.stroke_color).map(|(s, e)| color_series(s, e, n, false));
    let stroke_opacities = resolve_pair(a.stroke_opacity, b.stroke_opacity)
        .map(|(s, e)| opacity_series(s, e, n));

    let labels = resolve_pair_cloned(
        a.label.as_ref().filter(|l| !l.is_empty()),
        b.label.as_ref().filter(|l| !l.is_empty()),
    )
    .map(|(s, e)| discrete_series(&s, &e, n));
    let label_colors =
        resolve_pair(a.label_color, b.label_color).map(|(s, e)| color_series(s, e, n, false));
    let label_fonts = resolve_pair_cloned(a.label_font.as_ref(), b.label_font.as_ref())
        .map(|(s, e)| discrete_series(&s, &e, n));
    let label_sizes = resolve_pair(
        a.label_size.filter(|s| *s != 0.0),
        b.label_size.filter(|s| *s != 0.0),
    )
    .map(|(s, e)| linear_series(s, e, n));
    let label_opacities = resolve_pair(a.label_opacity, b.label_opacity)
        .map(|(s, e)| opacity_series(s, e, n));

    (0..n)
        .map(|k| EdgeVisual {
            color: colors.as_ref().map(|s| s[k]),
            opacity: opacities.as_ref().map(|s| s[k]),
            stroke_color: stroke_colors.as_ref().map(|s| s[k]),
            stroke_opacity: stroke_opacities.as_ref().map(|s| s[k]),
            width: widths[k],
            label: labels.as_ref().map(|s| s[k].clone()),
            label_color: label_colors.as_ref().map(|s| s[k]),
            label_font: label_fonts.as_ref().map(|s| s[k].clone()),
            label_size: label_sizes.as_ref().map(|s| s[k]),
            label_opacity: label_opacities.as_ref().map(|s| s[k]),
            // Arrowheads and line styles do not blend; intermediates take
            // the end values.
            source_arrow: b.source_arrow,
            target_arrow: b.target_arrow,
            line_style: b.line_style,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/interpolation/edge.rs"]
mod tests;
