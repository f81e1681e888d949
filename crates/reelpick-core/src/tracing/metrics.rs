//! Structured span field names used across reelpick.
//!
//! Consistent field names keep log queries over build and query events
//! uniform between the graph, the encoder, and the trie.

/// Graph: build time in milliseconds.
pub const GRAPH_BUILD_TIME: &str = "graph_build_time";

/// Graph: number of movie vertices.
pub const GRAPH_MOVIES: &str = "graph_movies";

/// Graph: number of actor vertices.
pub const GRAPH_ACTORS: &str = "graph_actors";

/// Graph: number of actor/movie edges.
pub const GRAPH_EDGES: &str = "graph_edges";

/// Encoder: vocabulary size.
pub const VOCABULARY_SIZE: &str = "vocabulary_size";

/// Encoder: records whose runtime fell back to the default bin.
pub const RUNTIME_FALLBACKS: &str = "runtime_fallbacks";

/// Trie: build time in milliseconds.
pub const TRIE_BUILD_TIME: &str = "trie_build_time";

/// Trie: number of distinct leaves.
pub const TRIE_LEAVES: &str = "trie_leaves";

/// Trie: number of leaves whose payload was replaced by a later movie.
pub const TRIE_COLLISIONS: &str = "trie_collisions";
