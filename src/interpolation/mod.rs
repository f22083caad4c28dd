//! The interpolation engine: attribute series, per-entity-family
//! interpolators, and the sequence builder.

pub mod attribute;
pub mod sequence;

mod annotation;
mod edge;
mod node;
mod scene;

use std::collections::BTreeMap;

use crate::frame::model::Frame;

pub(crate) use annotation::AnnotationInterpolator;
pub(crate) use edge::EdgeInterpolator;
pub(crate) use node::NodeInterpolator;
pub(crate) use scene::SceneInterpolator;

/// One interpolator per entity family.
///
/// `mid` holds exactly the intermediate slots strictly between the two key
/// frames of one segment; writing outside it is a programming error and
/// panics. Implementations resolve the union of entity ids present in either
/// endpoint, apply the appear/disappear hold policy, and delegate each
/// attribute to [`attribute`].
pub(crate) trait EntityInterpolator: Sync {
    fn interpolate(&self, from: &Frame, to: &Frame, mid: &mut [Frame]);
}

pub(crate) fn union_ids<K: Ord + Copy, A, B>(a: &BTreeMap<K, A>, b: &BTreeMap<K, B>) -> Vec<K> {
    let mut ids: Vec<K> = a.keys().copied().collect();
    for k in b.keys() {
        if !a.contains_key(k) {
            ids.push(*k);
        }
    }
    ids.sort_unstable();
    ids
}
