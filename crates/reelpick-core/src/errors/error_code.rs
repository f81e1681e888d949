//! ReelpickErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable `Display` message.
pub trait ReelpickErrorCode {
    /// Returns the error code string (e.g., "GRAPH_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged error string: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const GRAPH_NOT_FOUND: &str = "GRAPH_NOT_FOUND";
pub const GRAPH_SELF_LOOP: &str = "GRAPH_SELF_LOOP";
pub const RECORD_ERROR: &str = "RECORD_ERROR";
pub const RECORD_IO: &str = "RECORD_IO";
pub const ENCODING_ERROR: &str = "ENCODING_ERROR";
pub const VOCABULARY_MISMATCH: &str = "VOCABULARY_MISMATCH";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
