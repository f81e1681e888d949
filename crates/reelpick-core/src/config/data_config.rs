//! Data source configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DECISION_TABLE, DEFAULT_ENCODING, DEFAULT_MOVIE_FILE};
use crate::records::TextEncoding;

/// Where the raw movie rows and the persisted decision table live.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataConfig {
    /// Source CSV with one row per movie. Default: `imdb_top_1000.csv`.
    pub movie_file: Option<String>,
    /// Persisted one-hot table used to rebuild the trie. Default: `decision_tree.csv`.
    pub decision_table: Option<String>,
    /// Text encoding of `movie_file`: `latin-1` or `utf-8`. Default: `latin-1`.
    pub encoding: Option<String>,
}

impl DataConfig {
    /// Returns the effective movie file path.
    pub fn effective_movie_file(&self) -> &str {
        self.movie_file.as_deref().unwrap_or(DEFAULT_MOVIE_FILE)
    }

    /// Returns the effective decision table path.
    pub fn effective_decision_table(&self) -> &str {
        self.decision_table.as_deref().unwrap_or(DEFAULT_DECISION_TABLE)
    }

    /// Returns the effective text encoding. Unknown names fall back to
    /// Latin-1; `ReelpickConfig::validate` rejects them before this point.
    pub fn effective_encoding(&self) -> TextEncoding {
        self.encoding
            .as_deref()
            .unwrap_or(DEFAULT_ENCODING)
            .parse()
            .unwrap_or(TextEncoding::Latin1)
    }
}
