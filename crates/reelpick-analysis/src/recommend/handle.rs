//! Shared handle for swapping in a rebuilt recommender.

use std::sync::{Arc, PoisonError, RwLock};

use super::recommender::Recommender;

/// Readers take an `Arc` snapshot and query it without holding any lock.
/// A rebuild constructs a fresh `Recommender` and swaps it in; snapshots
/// already handed out keep the old one alive until dropped.
#[derive(Debug, Clone)]
pub struct RecommenderHandle {
    current: Arc<RwLock<Arc<Recommender>>>,
}

impl RecommenderHandle {
    pub fn new(recommender: Recommender) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(recommender))),
        }
    }

    /// Snapshot of the current recommender.
    pub fn current(&self) -> Arc<Recommender> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Install `recommender`, returning the one it replaces.
    pub fn replace(&self, recommender: Recommender) -> Arc<Recommender> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(recommender))
    }
}
