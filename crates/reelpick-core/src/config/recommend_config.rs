//! Recommendation output configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_RESULTS;

/// Configuration for the recommender facade.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RecommendConfig {
    /// Maximum movies returned by one recommendation. Default: 50.
    pub max_results: Option<usize>,
}

impl RecommendConfig {
    /// Returns the effective result cap, defaulting to 50.
    pub fn effective_max_results(&self) -> usize {
        self.max_results.unwrap_or(DEFAULT_MAX_RESULTS)
    }
}
