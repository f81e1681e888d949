//! IndexEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Receives index lifecycle events.
///
/// Handlers only override the events they care about. `Send + Sync` so a
/// dispatcher can be shared by a rebuild thread and its readers.
pub trait IndexEventHandler: Send + Sync {
    fn on_graph_built(&self, _event: &GraphBuiltEvent) {}
    fn on_trie_built(&self, _event: &TrieBuiltEvent) {}
    fn on_runtime_fallback(&self, _event: &RuntimeFallbackEvent) {}
    fn on_leaf_collision(&self, _event: &LeafCollisionEvent) {}
}
