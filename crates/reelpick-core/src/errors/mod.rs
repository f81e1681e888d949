//! Error handling for reelpick.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! A trie lookup that finds nothing is not an error: see
//! `reelpick_analysis::trie::Traversal`.

pub mod config_error;
pub mod encoding_error;
pub mod error_code;
pub mod graph_error;
pub mod reelpick_error;
pub mod record_error;

pub use config_error::ConfigError;
pub use encoding_error::EncodingError;
pub use error_code::ReelpickErrorCode;
pub use graph_error::GraphError;
pub use reelpick_error::ReelpickError;
pub use record_error::RecordError;
