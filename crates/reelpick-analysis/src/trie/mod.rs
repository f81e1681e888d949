//! Discrimination trie over each movie's active attribute tokens.
//!
//! A path from the root spells one movie's active tokens in vocabulary
//! order and ends in a leaf carrying that movie's `MovieId`. Movies with the
//! same active tokens share a path, so only the last one inserted keeps
//! the leaf.

pub mod builder;
pub mod node;
pub mod traversal;
pub mod tree;

pub use builder::{build_trie, build_trie_from_table, TrieStats};
pub use node::{TrieEntry, TrieKey, TrieNode};
pub use traversal::Traversal;
pub use tree::{BranchOutcome, DiscriminationTrie};
