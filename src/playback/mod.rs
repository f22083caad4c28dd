//! Playback state machine, tick source, and per-graph animator registry.

pub mod animator;
pub(crate) mod clock;
pub mod registry;

pub use animator::{Animator, CancelFlag, PlaybackState};
pub use registry::AnimatorRegistry;
