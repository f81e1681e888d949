//! Build report: index statistics keyed by the shared metric field names,
//! plus any timed results, serialized to JSON for CI.

use std::collections::BTreeMap;
use std::path::Path;

use reelpick_analysis::recommend::BuildStats;
use reelpick_core::tracing::metrics;
use serde::{Deserialize, Serialize};

use crate::fixtures::FixtureInfo;
use crate::BenchResult;

/// Statistics of one full index build.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildReport {
    pub fixture: Option<FixtureInfo>,
    /// Keyed by the names in `reelpick_core::tracing::metrics`.
    pub metrics: BTreeMap<String, f64>,
    pub results: Vec<BenchResult>,
}

impl BuildReport {
    /// Collect the metrics of a finished build.
    pub fn from_build(stats: &BuildStats, vocabulary_size: usize) -> Self {
        let mut report = Self::default();
        report.record(metrics::GRAPH_MOVIES, stats.graph.movies as f64);
        report.record(metrics::GRAPH_ACTORS, stats.graph.actors as f64);
        report.record(metrics::GRAPH_EDGES, stats.graph.edges as f64);
        report.record(
            metrics::GRAPH_BUILD_TIME,
            stats.graph.build_duration.as_secs_f64() * 1000.0,
        );
        report.record(metrics::VOCABULARY_SIZE, vocabulary_size as f64);
        report.record(
            metrics::RUNTIME_FALLBACKS,
            stats.trie.encode.runtime_fallbacks as f64,
        );
        report.record(metrics::TRIE_LEAVES, stats.trie.leaves as f64);
        report.record(metrics::TRIE_COLLISIONS, stats.trie.collisions as f64);
        report.record(
            metrics::TRIE_BUILD_TIME,
            stats.trie.build_duration.as_secs_f64() * 1000.0,
        );
        report
    }

    pub fn with_fixture(mut self, fixture: FixtureInfo) -> Self {
        self.fixture = Some(fixture);
        self
    }

    pub fn record(&mut self, key: &str, value: f64) {
        self.metrics.insert(key.to_string(), value);
    }

    pub fn push_result(&mut self, result: BenchResult) {
        self.results.push(result);
    }

    pub fn metric(&self, key: &str) -> Option<f64> {
        self.metrics.get(key).copied()
    }

    /// Results in `self` that regress against a same-named result in `baseline`.
    pub fn regressions<'a>(&'a self, baseline: &BuildReport) -> Vec<&'a BenchResult> {
        self.results
            .iter()
            .filter(|result| {
                baseline
                    .results
                    .iter()
                    .find(|b| b.name == result.name)
                    .is_some_and(|b| result.regresses_vs(b))
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Write the report as pretty JSON, creating parent directories.
    pub fn write_to_file(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = self
            .to_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    /// Load a baseline report written by `write_to_file`.
    pub fn load_from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
