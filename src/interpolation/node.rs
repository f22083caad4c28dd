use crate::{
    frame::model::{Frame, NodeVisual},
    interpolation::{
        EntityInterpolator,
        attribute::{
            color_series, discrete_series, linear_series, opacity_series, point3_series,
            resolve_pair, resolve_pair_cloned, size_series,
        },
        union_ids,
    },
};

/// Entity-set interpolator for nodes.
pub(crate) struct NodeInterpolator;

impl EntityInterpolator for NodeInterpolator {
    fn interpolate(&self, from: &Frame, to: &Frame, mid: &mut [Frame]) {
        let n = mid.len();
        if n == 0 {
            return;
        }
        for id in union_ids(&from.nodes, &to.nodes) {
            let (a, b) = match (from.nodes.get(&id), to.nodes.get(&id)) {
                (None, None) => continue,
                (Some(a), None) => (a, a),
                (None, Some(b)) => (b, b),
                (Some(a), Some(b)) => (a, b),
            };
            for (slot, record) in mid.iter_mut().zip(node_records(a, b, n)) {
                slot.nodes.insert(id, record);
            }
        }
    }
}

fn node_records(a: &NodeVisual, b: &NodeVisual, n: usize) -> Vec<NodeVisual> {
    let positions = point3_series(a.position, b.position, n);
    let sizes = size_series(a.size, b.size, n);
    let border_widths = linear_series(a.border_width, b.border_width, n);

    let border_colors = resolve_pair(a.border_color, b.border_color)
        .map(|(s, e)| color_series(s, e, n, false));
    let border_opacities = resolve_pair(a.border_opacity, b.border_opacity)
        .map(|(s, e)| opacity_series(s, e, n));
    let fill_colors =
        resolve_pair(a.fill_color, b.fill_color).map(|(s, e)| color_series(s, e, n, false));
    let fill_opacities =
        resolve_pair(a.fill_opacity, b.fill_opacity).map(|(s, e)| opacity_series(s, e, n));

    // Empty labels and zero font sizes count as unset and are substituted,
    // never blended toward.
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
    let label_widths =
        resolve_pair(a.label_width, b.label_width).map(|(s, e)| linear_series(s, e, n));

    (0..n)
        .map(|k| NodeVisual {
            // Shapes do not blend; every intermediate takes the end value.
            shape: b.shape,
            position: positions[k],
            size: sizes[k],
            border_width: border_widths[k],
            border_color: border_colors.as_ref().map(|s| s[k]),
            border_opacity: border_opacities.as_ref().map(|s| s[k]),
            fill_color: fill_colors.as_ref().map(|s| s[k]),
            fill_opacity: fill_opacities.as_ref().map(|s| s[k]),
            label: labels.as_ref().map(|s| s[k].clone()),
            label_color: label_colors.as_ref().map(|s| s[k]),
            label_font: label_fonts.as_ref().map(|s| s[k].clone()),
            label_size: label_sizes.as_ref().map(|s| s[k]),
            label_opacity: label_opacities.as_ref().map(|s| s[k]),
            label_width: label_widths.as_ref().map(|s| s[k]),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/interpolation/node.rs"]
mod tests;
