//! The visual state model: one [`model::Frame`] per displayed instant.

pub mod annotation;
pub mod model;
