//! EventDispatcher: synchronous event dispatch, zero overhead when empty.

use std::sync::Arc;

use super::handler::IndexEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default, Clone)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn IndexEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn IndexEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler is logged and does not stop later handlers.
    fn emit<F: Fn(&dyn IndexEventHandler)>(&self, event_name: &'static str, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::error!(event = event_name, "event handler panicked");
            }
        }
    }

    pub fn emit_graph_built(&self, event: &GraphBuiltEvent) {
        self.emit("graph_built", |h| h.on_graph_built(event));
    }

    pub fn emit_trie_built(&self, event: &TrieBuiltEvent) {
        self.emit("trie_built", |h| h.on_trie_built(event));
    }

    pub fn emit_runtime_fallback(&self, event: &RuntimeFallbackEvent) {
        self.emit("runtime_fallback", |h| h.on_runtime_fallback(event));
    }

    pub fn emit_leaf_collision(&self, event: &LeafCollisionEvent) {
        self.emit("leaf_collision", |h| h.on_leaf_collision(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
