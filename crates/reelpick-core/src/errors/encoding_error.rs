//! Attribute encoding and decision table errors.

use super::error_code::{self, ReelpickErrorCode};

/// Errors that can occur while encoding records or filters, or while
/// reading and writing the persisted decision table.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("Token not in vocabulary: {0}")]
    UnknownToken(String),

    #[error("Vocabulary mismatch at column {position}: expected {expected}, found {found}")]
    VocabularyMismatch {
        position: usize,
        expected: String,
        found: String,
    },

    #[error("Invalid runtime bin: {0}")]
    InvalidRuntimeBin(String),

    #[error("Invalid genre order: {0}")]
    InvalidGenreOrder(String),

    #[error("Encoded width mismatch: expected {expected} cells, found {found}")]
    WidthMismatch { expected: usize, found: usize },

    #[error("Malformed decision table row {row}: {message}")]
    MalformedTableRow { row: usize, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ReelpickErrorCode for EncodingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::VocabularyMismatch { .. } => error_code::VOCABULARY_MISMATCH,
            _ => error_code::ENCODING_ERROR,
        }
    }
}
