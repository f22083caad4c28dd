//! Traits a graph view host implements so an animator can drive it.
//!
//! The playback engine never talks to a rendering toolkit directly. It
//! captures visual state from, and applies frames back to, an opaque host
//! behind these traits, and exports stills through the same seam.

use std::path::Path;

use crate::frame::model::Frame;

/// Reads the current visual state of a graph view as a [`Frame`].
pub trait ViewCapture {
    /// Snapshots every scene, node, edge, and annotation visual currently
    /// shown by the view.
    fn capture_state(&self) -> anyhow::Result<Frame>;
}

/// Pushes frame state back onto a graph view.
pub trait ViewApply {
    /// Writes the frame's visuals into the view, creating or hiding
    /// entities as needed so the view matches the frame exactly.
    fn apply_state(&mut self, frame: &Frame) -> anyhow::Result<()>;

    /// Removes animation-only artifacts left behind by [`apply_state`],
    /// such as entities shown at zero opacity mid-fade.
    ///
    /// [`apply_state`]: ViewApply::apply_state
    fn clear_transients(&mut self) -> anyhow::Result<()>;
}

/// Renders the view's current state to an image file.
pub trait StillExport {
    /// Writes a still of the currently applied frame to `path`.
    fn export_still(&mut self, path: &Path) -> anyhow::Result<()>;
}

/// Everything an animator needs from a host view.
pub trait ViewHost: ViewCapture + ViewApply + StillExport {}

impl<T: ViewCapture + ViewApply + StillExport> ViewHost for T {}
