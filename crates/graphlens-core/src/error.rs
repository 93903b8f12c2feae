//! Error taxonomy for the analytics core.
//!
//! The core distinguishes three failure kinds. Everything else — empty
//! filter results, zero-degree entities, entities with no source refs —
//! is a valid outcome, not an error. Callers can tell "nothing matched"
//! from "the request was invalid" without inspecting strings.

use thiserror::Error;

/// Errors produced by the GraphLens core and analytics layers.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An explicit type-code or label lookup missed the lexicon.
    #[error("unknown entity type: {0}")]
    UnknownType(String),

    /// The queried identity is not present in the snapshot's entity set.
    #[error("entity not found in snapshot: {0}")]
    UnknownEntity(String),

    /// A query parameter was malformed (e.g. a blank type or keyword).
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

/// Convenience result alias for core operations.
pub type Result<T> = std::result::Result<T, GraphError>;
