//! Lookup of animators by root graph.

use std::collections::HashMap;

use crate::{foundation::core::GraphId, host::ViewHost, playback::animator::Animator};

/// One animator per root graph.
///
/// Callers hold a single registry for the application and look animators
/// up by graph id, creating them lazily the first time a graph's
/// animation UI is opened and removing them when the graph closes.
pub struct AnimatorRegistry<H> {
    animators: HashMap<GraphId, Animator<H>>,
}

impl<H: ViewHost + Send + 'static> AnimatorRegistry<H> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            animators: HashMap::new(),
        }
    }

    /// Returns the animator for `graph`, creating one from `host` if the
    /// graph has none yet.
    pub fn get_or_create(&mut self, graph: GraphId, host: impl FnOnce() -> H) -> &mut Animator<H> {
        self.animators
            .entry(graph)
            .or_insert_with(|| Animator::new(host()))
    }

    /// The animator for `graph`, if one exists.
    pub fn get(&self, graph: GraphId) -> Option<&Animator<H>> {
        self.animators.get(&graph)
    }

    /// Mutable access to the animator for `graph`, if one exists.
    pub fn get_mut(&mut self, graph: GraphId) -> Option<&mut Animator<H>> {
        self.animators.get_mut(&graph)
    }

    /// Removes and returns the animator for `graph`. Dropping the
    /// returned animator stops its tick thread.
    pub fn remove(&mut self, graph: GraphId) -> Option<Animator<H>> {
        self.animators.remove(&graph)
    }

    /// Number of registered animators.
    pub fn len(&self) -> usize {
        self.animators.len()
    }

    /// Whether the registry holds no animators.
    pub fn is_empty(&self) -> bool {
        self.animators.is_empty()
    }
}

impl<H: ViewHost + Send + 'static> Default for AnimatorRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/registry.rs"]
mod tests;
