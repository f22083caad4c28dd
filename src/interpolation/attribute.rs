//! Pure attribute interpolators.
//!
//! Every function here shares one contract: given a start value, an end
//! value, and `n` (the count of intermediate steps strictly between the two
//! endpoints), produce exactly `n` intermediate values. The sequence with
//! endpoints included is monotonic per component and the last synthesized
//! value is within one step increment of the end value.
//!
//! Two fast paths apply everywhere: `n == 0` returns an empty sequence (the
//! key frames are adjacent), and `start == end` repeats the value without
//! invoking the blend math (no float drift, no per-step allocation).

use crate::foundation::core::{Point, Point3, Rgba, Size};

/// Linear scalar series: `value(k) = start + (end - start) * k / (n + 1)`.
pub fn linear_series(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if start == end {
        return vec![start; n];
    }
    let step = (end - start) / (n as f64 + 1.0);
    (1..=n).map(|k| start + step * k as f64).collect()
}

/// Linear series over a 2D point, each axis independent.
pub fn point_series(start: Point, end: Point, n: usize) -> Vec<Point> {
    if n == 0 {
        return Vec::new();
    }
    if start == end {
        return vec![start; n];
    }
    let xs = linear_series(start.x, end.x, n);
    let ys = linear_series(start.y, end.y, n);
    xs.into_iter()
        .zip(ys)
        .map(|(x, y)| Point::new(x, y))
        .collect()
}

/// Linear series over a 3D point, each axis independent.
pub fn point3_series(start: Point3, end: Point3, n: usize) -> Vec<Point3> {
    if n == 0 {
        return Vec::new();
    }
    if start == end {
        return vec![start; n];
    }
    let xs = linear_series(start.x, end.x, n);
    let ys = linear_series(start.y, end.y, n);
    let zs = linear_series(start.z, end.z, n);
    xs.into_iter()
        .zip(ys)
        .zip(zs)
        .map(|((x, y), z)| Point3::new(x, y, z))
        .collect()
}

/// Linear series over a width/height pair, each component independent.
pub fn size_series(start: Size, end: Size, n: usize) -> Vec<Size> {
    if n == 0 {
        return Vec::new();
    }
    if start == end {
        return vec![start; n];
    }
    let ws = linear_series(start.width, end.width, n);
    let hs = linear_series(start.height, end.height, n);
    ws.into_iter()
        .zip(hs)
        .map(|(w, h)| Size::new(w, h))
        .collect()
}

/// Per-channel linear color series producing fixed-width RGBA8 at every step.
///
/// With `with_alpha` the alpha channel blends like the others; without it the
/// output alpha is pinned opaque and opacity is carried by the caller as a
/// separate scalar attribute.
pub fn color_series(start: Rgba, end: Rgba, n: usize, with_alpha: bool) -> Vec<Rgba> {
    if n == 0 {
        return Vec::new();
    }
    let start = if with_alpha { start } else { start.with_alpha(255) };
    let end = if with_alpha { end } else { end.with_alpha(255) };
    if start == end {
        return vec![start; n];
    }
    (1..=n)
        .map(|k| {
            let t = k as f64 / (n as f64 + 1.0);
            Rgba {
                r: blend_channel(start.r, end.r, t),
                g: blend_channel(start.g, end.g, t),
                b: blend_channel(start.b, end.b, t),
                a: blend_channel(start.a, end.a, t),
            }
        })
        .collect()
}

/// Linear series over a 0..=255 opacity value, rounded per step.
pub fn opacity_series(start: u8, end: u8, n: usize) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }
    if start == end {
        return vec![start; n];
    }
    (1..=n)
        .map(|k| blend_channel(start, end, k as f64 / (n as f64 + 1.0)))
        .collect()
}

/// Discrete series for values with no continuous blend (free text, font
/// faces): hold the start value for the first `floor(n / 2)` steps, then
/// switch to the end value for the remainder.
///
/// This is a deliberate approximation carried over from the original
/// behavior, not a content morph.
pub fn discrete_series<T: Clone + PartialEq>(start: &T, end: &T, n: usize) -> Vec<T> {
    if n == 0 {
        return Vec::new();
    }
    if start == end {
        return vec![start.clone(); n];
    }
    let hold = n / 2;
    (1..=n)
        .map(|k| if k <= hold { start.clone() } else { end.clone() })
        .collect()
}

/// Resolve a pair of optional endpoint values under the appear/disappear
/// policy: a value present at only one endpoint holds constant across the
/// span, and a value present at neither endpoint yields `None` (the
/// attribute is skipped entirely for the span).
pub fn resolve_pair<T: Copy>(a: Option<T>, b: Option<T>) -> Option<(T, T)> {
    match (a, b) {
        (None, None) => None,
        (Some(x), None) => Some((x, x)),
        (None, Some(y)) => Some((y, y)),
        (Some(x), Some(y)) => Some((x, y)),
    }
}

/// [`resolve_pair`] for clone-only values (strings, font descriptors).
pub fn resolve_pair_cloned<T: Clone>(a: Option<&T>, b: Option<&T>) -> Option<(T, T)> {
    match (a, b) {
        (None, None) => None,
        (Some(x), None) => Some((x.clone(), x.clone())),
        (None, Some(y)) => Some((y.clone(), y.clone())),
        (Some(x), Some(y)) => Some((x.clone(), y.clone())),
    }
}

fn blend_channel(a: u8, b: u8, t: f64) -> u8 {
    let a = f64::from(a);
    let b = f64::from(b);
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/interpolation/attribute.rs"]
mod tests;
