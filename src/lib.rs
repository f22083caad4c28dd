//! Keyframe animation engine for graph views.
//!
//! `kinegraph` interpolates between captured snapshots of a graph view's
//! visual state and plays the resulting frame sequence back against the
//! view. The crate is split into:
//!
//! - [`foundation`]: ids, colors, frame-rate and error types shared by
//!   every layer.
//! - [`frame`]: the visual state model, one [`Frame`] per instant with
//!   scene, node, edge, and annotation records.
//! - [`interpolation`]: per-attribute series generators and the sequence
//!   builder that expands a key list into every displayed frame.
//! - [`host`]: the traits a view host implements so an animator can
//!   capture from it, apply frames to it, and export stills.
//! - [`playback`]: the animator state machine, its tick source, and the
//!   per-graph registry.
//!
//! Interpolation is deterministic: the same key list always yields the
//! same sequence, byte for byte, regardless of thread count.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod foundation;
pub mod frame;
pub mod host;
pub mod interpolation;
pub mod playback;

pub use foundation::{
    core::{AnnotationId, EdgeId, Fps, GraphId, IdMinter, NodeId, Point, Point3, Rgba, Size},
    error::{KinegraphError, KinegraphResult},
};
pub use frame::{
    annotation::{AnnotationKind, AnnotationVisual, ShapeType},
    model::{
        ArrowShape, EdgeVisual, FontSpec, FontStyle, Frame, KeyFrame, LineStyle, NodeShape,
        NodeVisual, SceneVisual,
    },
};
pub use host::{StillExport, ViewApply, ViewCapture, ViewHost};
pub use interpolation::sequence::build_sequence;
pub use playback::{Animator, AnimatorRegistry, CancelFlag, PlaybackState};
