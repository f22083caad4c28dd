use crate::{
    frame::model::{Frame, SceneVisual},
    interpolation::{
        EntityInterpolator,
        attribute::{color_series, discrete_series, linear_series, point3_series},
    },
};

/// Interpolator for the scene-level visual record.
pub(crate) struct SceneInterpolator;

impl EntityInterpolator for SceneInterpolator {
    fn interpolate(&self, from: &Frame, to: &Frame, mid: &mut [Frame]) {
        let n = mid.len();
        if n == 0 {
            return;
        }
        let a = &from.scene;
        let b = &to.scene;

        let titles = discrete_series(&a.title, &b.title, n);
        let backgrounds = color_series(a.background, b.background, n, true);
        let zooms = linear_series(a.zoom, b.zoom, n);
        let sizes = linear_series(a.size, b.size, n);
        let widths = linear_series(a.width, b.width, n);
        let heights = linear_series(a.height, b.height, n);
        let centers = point3_series(a.center, b.center, n);

        for (k, slot) in mid.iter_mut().enumerate() {
            slot.scene = SceneVisual {
                title: titles[k].clone(),
                background: backgrounds[k],
                zoom: zooms[k],
                size: sizes[k],
                width: widths[k],
                height: heights[k],
                center: centers[k],
            };
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interpolation/scene.rs"]
mod tests;
