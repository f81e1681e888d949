//! Builds the trie from a record store or from a persisted decision table.

use std::time::{Duration, Instant};

use reelpick_core::errors::ReelpickError;
use reelpick_core::events::{EventDispatcher, LeafCollisionEvent, TrieBuiltEvent};
use reelpick_core::{MovieId, RecordStore};

use crate::encoder::{AttributeEncoder, AttributeToken, EncodeDiagnostics, EncodedTable};

use super::tree::{BranchOutcome, DiscriminationTrie};

/// Statistics from a trie build.
#[derive(Debug, Clone, Default)]
pub struct TrieStats {
    /// Branches inserted, one per movie.
    pub branches: usize,
    /// Distinct leaves after the build.
    pub leaves: usize,
    /// Leaves whose movie was replaced by a later movie with the same tokens.
    pub collisions: usize,
    pub nodes: usize,
    pub depth: usize,
    pub encode: EncodeDiagnostics,
    pub build_duration: Duration,
}

/// Build the trie from every record in `store`.
pub fn build_trie(
    store: &RecordStore,
    encoder: &AttributeEncoder,
    events: &EventDispatcher,
) -> (DiscriminationTrie, TrieStats) {
    let start = Instant::now();
    let (encoded, diagnostics) = encoder.encode_store(store, events);
    let branches = encoded.into_iter().map(|movie| (movie.tokens, movie.id));
    let (trie, mut stats) = insert_all(branches, events);
    stats.encode = diagnostics;
    finish(trie, stats, start, events)
}

/// Rebuild the trie from a decision table, resolving each row's title
/// against `store`.
pub fn build_trie_from_table(
    table: &EncodedTable,
    store: &RecordStore,
    events: &EventDispatcher,
) -> Result<(DiscriminationTrie, TrieStats), ReelpickError> {
    let start = Instant::now();
    let mut branches: Vec<(Vec<AttributeToken>, MovieId)> = Vec::with_capacity(table.len());
    for row in table.rows() {
        let id = store.resolve(&row.title)?;
        branches.push((table.active_tokens(row), id));
    }
    let (trie, mut stats) = insert_all(branches, events);
    stats.encode.encoded = table.len();
    Ok(finish(trie, stats, start, events))
}

fn insert_all(
    branches: impl IntoIterator<Item = (Vec<AttributeToken>, MovieId)>,
    events: &EventDispatcher,
) -> (DiscriminationTrie, TrieStats) {
    let mut trie = DiscriminationTrie::new();
    let mut stats = TrieStats::default();
    for (tokens, id) in branches {
        stats.branches += 1;
        if let BranchOutcome::Replaced { previous } = trie.create_branch(&tokens, id) {
            stats.collisions += 1;
            events.emit_leaf_collision(&LeafCollisionEvent {
                previous,
                replacement: id,
            });
        }
    }
    (trie, stats)
}

fn finish(
    trie: DiscriminationTrie,
    mut stats: TrieStats,
    start: Instant,
    events: &EventDispatcher,
) -> (DiscriminationTrie, TrieStats) {
    stats.leaves = trie.leaf_count();
    stats.nodes = trie.node_count();
    stats.depth = trie.depth();
    stats.build_duration = start.elapsed();

    let duration_ms = stats.build_duration.as_millis() as u64;
    tracing::info!(
        trie_leaves = stats.leaves,
        trie_collisions = stats.collisions,
        runtime_fallbacks = stats.encode.runtime_fallbacks,
        trie_build_time = duration_ms,
        branches = stats.branches,
        "discrimination trie built"
    );
    events.emit_trie_built(&TrieBuiltEvent {
        branches: stats.branches,
        leaves: stats.leaves,
        collisions: stats.collisions,
        duration_ms,
    });
    (trie, stats)
}
