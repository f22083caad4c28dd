//! Crate-wide error and result types.

/// Convenience alias used throughout the crate.
pub type KinegraphResult<T> = Result<T, KinegraphError>;

#[derive(thiserror::Error, Debug)]
/// Crate-wide error type.
///
/// Collaborator variants carry the offending key or output-frame index so a
/// caller can point back at a specific key state. The core's own state is
/// left untouched by any failing call.
pub enum KinegraphError {
    /// Invalid input to a constructor or key-list edit.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid input to the interpolation engine.
    #[error("interpolation error: {0}")]
    Interpolation(String),

    /// The capture collaborator failed while adding the key at `index`.
    #[error("capture failed for key {index}: {source}")]
    Capture {
        /// Index the captured key would have occupied.
        index: usize,
        /// Underlying host failure.
        source: anyhow::Error,
    },

    /// The apply collaborator failed while displaying output frame `frame`.
    #[error("apply failed at frame {frame}: {source}")]
    Apply {
        /// Output-array index of the frame being displayed.
        frame: usize,
        /// Underlying host failure.
        source: anyhow::Error,
    },

    /// The still-export collaborator failed during a recording walk.
    ///
    /// Frames exported before the failure remain intact on disk.
    #[error("export failed at frame {frame} after {written} frames written: {source}")]
    Export {
        /// Output-array index of the frame that failed to export.
        frame: usize,
        /// Number of frames successfully exported before the failure.
        written: usize,
        /// Underlying host failure.
        source: anyhow::Error,
    },

    /// Any other error bubbled up from a host or the standard library.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KinegraphError {
    /// Build a [`KinegraphError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KinegraphError::Interpolation`].
    pub fn interpolation(msg: impl Into<String>) -> Self {
        Self::Interpolation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
