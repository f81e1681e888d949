//! Event payloads emitted while the indexes are built.

use crate::records::MovieId;

/// The actor/movie graph finished building.
#[derive(Debug, Clone)]
pub struct GraphBuiltEvent {
    pub movies: usize,
    pub actors: usize,
    pub edges: usize,
    pub duration_ms: u64,
}

/// The discrimination trie finished building.
#[derive(Debug, Clone)]
pub struct TrieBuiltEvent {
    pub branches: usize,
    pub leaves: usize,
    pub collisions: usize,
    pub duration_ms: u64,
}

/// A record had no parseable runtime and was assigned the fallback bin.
#[derive(Debug, Clone)]
pub struct RuntimeFallbackEvent {
    pub title: String,
    pub raw_runtime: String,
    pub assigned_bin: String,
}

/// Two movies share one token path; the later one now owns the leaf.
#[derive(Debug, Clone)]
pub struct LeafCollisionEvent {
    pub previous: MovieId,
    pub replacement: MovieId,
}
