//! Expansion of a key frame list into the full playback sequence.

use rayon::prelude::*;

use crate::{
    foundation::error::{KinegraphError, KinegraphResult},
    frame::model::{Frame, KeyFrame},
    interpolation::{
        AnnotationInterpolator, EdgeInterpolator, EntityInterpolator, NodeInterpolator,
        SceneInterpolator,
    },
};

/// Expands a key frame list into the full frame sequence.
///
/// Each key contributes itself followed by `steps - 1` interpolated
/// intermediates toward the next key, so the sequence length for a
/// non-empty list is the sum of all non-terminal `steps` plus one.
/// Segments between consecutive keys are independent and are filled in
/// parallel, then assembled in key order.
#[tracing::instrument(skip(keys), fields(keys = keys.len()))]
pub fn build_sequence(keys: &[KeyFrame]) -> KinegraphResult<Vec<Frame>> {
    if keys.is_empty() {
        return Ok(Vec::new());
    }
    for (index, key) in keys[..keys.len() - 1].iter().enumerate() {
        if key.steps == 0 {
            return Err(KinegraphError::validation(format!(
                "key {index} has zero steps before a following key"
            )));
        }
    }
    if keys.len() == 1 {
        return Ok(vec![keys[0].frame.clone()]);
    }

    let interpolators: [&dyn EntityInterpolator; 4] = [
        &SceneInterpolator,
        &NodeInterpolator,
        &EdgeInterpolator,
        &AnnotationInterpolator,
    ];
    let segments: Vec<Vec<Frame>> = keys
        .par_windows(2)
        .map(|pair| {
            let n = (pair[0].steps - 1) as usize;
            let mut mid = vec![Frame::default(); n];
            for interpolator in interpolators {
                interpolator.interpolate(&pair[0].frame, &pair[1].frame, &mut mid);
            }
            mid
        })
        .collect();

    let total = keys[..keys.len() - 1]
        .iter()
        .map(|key| key.steps as usize)
        .sum::<usize>()
        + 1;
    let mut frames = Vec::with_capacity(total);
    for (key, segment) in keys.iter().zip(segments) {
        frames.push(key.frame.clone());
        frames.extend(segment);
    }
    frames.push(keys[keys.len() - 1].frame.clone());
    Ok(frames)
}

#[cfg(test)]
#[path = "../../tests/unit/interpolation/sequence.rs"]
mod tests;
