//! Actor/movie graph errors.

use super::error_code::{self, ReelpickErrorCode};

/// Errors raised by graph operations that reference vertices.
///
/// These are caller contract violations (querying or linking an item that
/// was never added) and are always surfaced, never recovered silently.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("Vertex not found: {item}")]
    NotFound { item: String },

    #[error("Cannot link {item} to itself")]
    SelfLoop { item: String },
}

impl ReelpickErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::GRAPH_NOT_FOUND,
            Self::SelfLoop { .. } => error_code::GRAPH_SELF_LOOP,
        }
    }
}
