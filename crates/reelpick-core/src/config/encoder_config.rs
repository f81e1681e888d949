//! Attribute encoder configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GENRE_ORDER, DEFAULT_MISSING_RUNTIME_BIN};

/// Configuration for the one-hot attribute encoder.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EncoderConfig {
    /// Runtime bin assigned when a record has no parseable runtime.
    /// Default: `very-short` (treats the runtime as zero minutes).
    pub missing_runtime_bin: Option<String>,
    /// Genre token order inside the vocabulary: `lexical` or `first-seen`.
    /// Default: `lexical`.
    pub genre_order: Option<String>,
}

impl EncoderConfig {
    /// Returns the effective fallback runtime bin name.
    pub fn effective_missing_runtime_bin(&self) -> &str {
        self.missing_runtime_bin
            .as_deref()
            .unwrap_or(DEFAULT_MISSING_RUNTIME_BIN)
    }

    /// Returns the effective genre order name.
    pub fn effective_genre_order(&self) -> &str {
        self.genre_order.as_deref().unwrap_or(DEFAULT_GENRE_ORDER)
    }
}
