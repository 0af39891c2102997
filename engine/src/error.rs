//! Error types for the MST engine.
//!
//! Lookup misses are `Option`, never errors; the only fallible boundary in
//! the core is graph persistence. Nothing here is fatal to the caller.

use crate::types::VertexId;

/// Failure loading or saving the structural graph document.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Input was not valid JSON or did not match the document shape
    /// (missing or ill-typed `vertices`/`edges` arrays, wrong field types).
    #[error("invalid graph document: {0}")]
    Json(#[from] serde_json::Error),

    /// Two vertex records carried the same id.
    #[error("duplicate vertex id {0}")]
    DuplicateVertexId(VertexId),

    /// An edge record referenced a vertex id with no vertex record.
    #[error("edge references unknown vertex {0}")]
    UnknownEndpoint(VertexId),
}
