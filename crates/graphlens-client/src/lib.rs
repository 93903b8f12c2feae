//! GraphLens Client - Snapshot retrieval
//!
//! This crate is the graph source for GraphLens: a synchronous HTTP client
//! for RAGFlow-compatible knowledge-graph APIs, plus JSON import/export of
//! snapshots for offline analysis.
//!
//! The client supplies exactly one snapshot per fetch and does no caching;
//! everything downstream treats the snapshot as immutable. Transport and
//! authorization failures surface as typed [`ClientError`]s, never as an
//! empty snapshot.

mod api;
mod export;

pub use api::{Dataset, GraphClient};
pub use export::{export_snapshot, load_snapshot};

use thiserror::Error;

/// Errors from snapshot retrieval and snapshot files.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection-level failure (DNS, refused, timeout).
    #[error("transport error: {0}")]
    Transport(Box<ureq::Error>),

    /// Non-2xx HTTP response, e.g. 401 for a bad API key.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The API answered 200 but reported an application-level error.
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },

    /// Response body or snapshot file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Response body or snapshot file was not the expected JSON.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
