//! # reelpick-analysis
//!
//! The two query structures and the encoding contract between them:
//! - `graph`: undirected actor/movie graph for "movies featuring X".
//! - `encoder`: one-hot attribute encoding over a fixed vocabulary.
//! - `trie`: discrimination trie over each movie's active tokens.
//! - `recommend`: facade mapping every lookup outcome to a user-facing result.

pub mod encoder;
pub mod graph;
pub mod recommend;
pub mod trie;

pub use encoder::{AttributeEncoder, AttributeToken, RuntimeBin, Vocabulary};
pub use graph::{BipartiteGraph, VertexKind};
pub use recommend::{Recommender, RecommenderHandle};
pub use trie::{DiscriminationTrie, Traversal};
