//! # reelpick-bench
//!
//! Benchmarks for the reelpick indexes.
//! - **Micro**: Criterion benchmarks for single operations (trie walk, lookup).
//! - **Component**: index builds over a synthetic store.
//! - **Regression**: CI-tracked results compared against a baseline.
//!
//! Contains a deterministic movie generator and a JSON report built from
//! index build statistics.

pub mod fixtures;
pub mod report;

use std::time::Instant;

/// Benchmark level: determines scope and CI behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BenchLevel {
    Micro,
    Component,
    Regression,
}

impl BenchLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Component => "component",
            Self::Regression => "regression",
        }
    }

    /// Whether this level should block CI on regression.
    pub fn blocks_ci(&self) -> bool {
        matches!(self, Self::Regression)
    }

    /// Allowed slowdown relative to baseline, as a fraction.
    pub fn regression_threshold(&self) -> f64 {
        match self {
            Self::Micro => 0.20,
            Self::Component => 0.50,
            Self::Regression => 0.10,
        }
    }
}

/// Benchmark result for CI comparison.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchResult {
    pub name: String,
    pub level: BenchLevel,
    pub duration_ms: f64,
    pub iterations: u64,
    /// Movies per second, where meaningful.
    pub throughput: Option<f64>,
}

impl BenchResult {
    /// Run `f` `iterations` times and record the mean wall-clock time.
    /// `items` is the number of movies one run processes; zero leaves
    /// `throughput` unset.
    pub fn measure<T>(
        name: impl Into<String>,
        level: BenchLevel,
        iterations: u64,
        items: u64,
        mut f: impl FnMut() -> T,
    ) -> Self {
        let iterations = iterations.max(1);
        let start = Instant::now();
        for _ in 0..iterations {
            std::hint::black_box(f());
        }
        let per_run = start.elapsed().as_secs_f64() / iterations as f64;
        Self {
            name: name.into(),
            level,
            duration_ms: per_run * 1000.0,
            iterations,
            throughput: (items > 0).then(|| items as f64 / per_run.max(1e-9)),
        }
    }

    /// Check if this result regresses vs a baseline.
    pub fn regresses_vs(&self, baseline: &BenchResult) -> bool {
        if baseline.duration_ms <= 0.0 {
            return false;
        }
        let ratio = self.duration_ms / baseline.duration_ms;
        ratio > (1.0 + self.level.regression_threshold())
    }
}
