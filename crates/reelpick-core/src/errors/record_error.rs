//! Record store and loader errors.

use super::error_code::{self, ReelpickErrorCode};

/// Errors that can occur while loading or resolving movie records.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Unknown movie title: {0}")]
    UnknownTitle(String),

    #[error("Malformed row {row}: {message}")]
    MalformedRow { row: usize, message: String },
}

impl ReelpickErrorCode for RecordError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::RECORD_IO,
            _ => error_code::RECORD_ERROR,
        }
    }
}
