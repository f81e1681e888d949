//! Top-level error aggregating every subsystem error.

use super::error_code::ReelpickErrorCode;
use super::{ConfigError, EncodingError, GraphError, RecordError};

/// Any error produced while building or querying the recommendation indexes.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ReelpickError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ReelpickErrorCode for ReelpickError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            Self::Record(e) => e.error_code(),
            Self::Encoding(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
