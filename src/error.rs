//! Error types for tree rendering

use crate::types::{Notation, Target};
use thiserror::Error;

/// Errors surfaced synchronously by the render entry points.
///
/// Rendering is deterministic, so none of these are retryable; callers must
/// fix construction or pick a supported pairing. Nothing is written to the
/// output on the error path.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A mapping contains the same key twice (precondition violation)
    #[error("duplicate mapping key {key:?} at {path}")]
    DuplicateKey { key: String, path: String },

    /// The notation/target pairing has no dumper
    #[error("{notation} rendering to {target} is not implemented")]
    Unsupported { notation: Notation, target: Target },

    /// Input handed to an adapter could not be turned into a tree
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
