use crate::{
    frame::annotation::AnnotationVisual,
    frame::model::Frame,
    interpolation::{
        EntityInterpolator,
        attribute::{color_series, discrete_series, linear_series, point_series, resolve_pair,
            resolve_pair_cloned, size_series},
        union_ids,
    },
};

/// Entity-set interpolator for annotations.
///
/// Non-arrow kinds are always processed before arrow kinds, regardless of
/// the order ids arrive in: arrows derive fallback coloring from other
/// annotations' border and fill colors when a frame is applied to a view.
pub(crate) struct AnnotationInterpolator;

impl EntityInterpolator for AnnotationInterpolator {
    fn interpolate(&self, from: &Frame, to: &Frame, mid: &mut [Frame]) {
        let n = mid.len();
        if n == 0 {
            return;
        }
        let mut ids = union_ids(&from.annotations, &to.annotations);
        ids.sort_by_key(|id| {
            from.annotations
                .get(id)
                .or_else(|| to.annotations.get(id))
                .is_some_and(AnnotationVisual::is_arrow)
        });
        for id in ids {
            let (a, b) = match (from.annotations.get(&id), to.annotations.get(&id)) {
                (None, None) => continue,
                (Some(a), None) => (a, a),
                (None, Some(b)) => (b, b),
                (Some(a), Some(b)) => (a, b),
            };
            for (slot, record) in mid.iter_mut().zip(annotation_records(a, b, n)) {
                slot.annotations.insert(id, record);
            }
        }
    }
}

fn annotation_records(
    a: &AnnotationVisual,
    b: &AnnotationVisual,
    n: usize,
) -> Vec<AnnotationVisual> {
    let positions = point_series(a.position, b.position, n);
    let zooms = linear_series(a.zoom, b.zoom, n);

    // Annotation colors blend with alpha: hiding an annotation is expressed
    // as a fully transparent color, and the fade has to reach it.
    let fill_colors =
        resolve_pair(a.fill_color(), b.fill_color()).map(|(s, e)| color_series(s, e, n, true));
    let border_colors =
        resolve_pair(a.border_color(), b.border_color()).map(|(s, e)| color_series(s, e, n, true));
    let text_colors =
        resolve_pair(a.text_color(), b.text_color()).map(|(s, e)| color_series(s, e, n, true));

    // Accessors already report zero sizes/widths and empty text as unset.
    let font_sizes =
        resolve_pair(a.font_size(), b.font_size()).map(|(s, e)| linear_series(s, e, n));
    let border_widths =
        resolve_pair(a.border_width(), b.border_width()).map(|(s, e)| linear_series(s, e, n));
    let sizes = resolve_pair(a.size(), b.size()).map(|(s, e)| size_series(s, e, n));

    let text_a = a.text().map(str::to_owned);
    let text_b = b.text().map(str::to_owned);
    let texts =
        resolve_pair_cloned(text_a.as_ref(), text_b.as_ref()).map(|(s, e)| discrete_series(&s, &e, n));

    (0..n)
        .map(|k| {
            // Kind tag and per-kind structural fields come from the end
            // record; blended fields are written over them below.
            let mut record = b.clone();
            record.position = positions[k];
            record.zoom = zooms[k];
            if let Some(series) = &fill_colors {
                record.set_fill_color(series[k]);
            }
            if let Some(series) = &border_colors {
                record.set_border_color(series[k]);
            }
            if let Some(series) = &text_colors {
                record.set_text_color(series[k]);
            }
            if let Some(series) = &font_sizes {
                record.set_font_size(series[k]);
            }
            if let Some(series) = &border_widths {
                record.set_border_width(series[k]);
            }
            if let Some(series) = &sizes {
                record.set_size(series[k]);
            }
            if let Some(series) = &texts {
                record.set_text(series[k].clone());
            }
            record
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/interpolation/annotation.rs"]
mod tests;
