//! Shared primitives: ids, colors, frame rate, and the crate error type.

pub mod core;
pub mod error;
