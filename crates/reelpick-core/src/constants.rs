//! Shared constants for reelpick.

/// Default source file with the raw movie rows.
pub const DEFAULT_MOVIE_FILE: &str = "imdb_top_1000.csv";

/// Default path of the persisted one-hot decision table.
pub const DEFAULT_DECISION_TABLE: &str = "decision_tree.csv";

/// Default text encoding of the source file.
pub const DEFAULT_ENCODING: &str = "latin-1";

/// Runtime bin used when a record's runtime has no parseable number.
pub const DEFAULT_MISSING_RUNTIME_BIN: &str = "very-short";

/// Default genre ordering inside the vocabulary.
pub const DEFAULT_GENRE_ORDER: &str = "lexical";

/// Default cap on the number of movies returned by a recommendation.
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Number of cast columns in the source file (`Star1`..`Star4`).
pub const CAST_COLUMNS: usize = 4;

/// Name of the first column of the persisted decision table.
pub const DECISION_TABLE_PAYLOAD_COLUMN: &str = "movie";

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "REELPICK_LOG";

/// Filter used when `REELPICK_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "reelpick=info";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "reelpick.toml";

/// Runtime bin names in bin order. `reelpick_analysis::encoder::RuntimeBin`
/// mirrors this list.
pub const RUNTIME_BIN_NAMES: [&str; 6] =
    ["very-short", "short", "mid", "mid-long", "long", "very-long"];

/// Accepted values for `encoder.genre_order`.
pub const GENRE_ORDERS: [&str; 2] = ["lexical", "first-seen"];
