//! Criterion benchmarks for the graph, the trie, and the recommender queries.

use std::path::PathBuf;

use criterion::{criterion_group, criterion_main, Criterion};

use reelpick_analysis::encoder::AttributeEncoder;
use reelpick_analysis::graph::load_movie_actor_graph;
use reelpick_analysis::recommend::FilterSelection;
use reelpick_analysis::trie::build_trie;
use reelpick_analysis::{Recommender, RuntimeBin};
use reelpick_bench::fixtures::{generate_store, FixtureSize};
use reelpick_bench::report::BuildReport;
use reelpick_bench::{BenchLevel, BenchResult};
use reelpick_core::config::{EncoderConfig, ReelpickConfig};
use reelpick_core::events::EventDispatcher;

const SEED: u64 = 42;

fn bench_graph_build(c: &mut Criterion) {
    let store = generate_store(FixtureSize::Small, SEED);
    let events = EventDispatcher::new();

    c.bench_function("graph_build_1k_movies", |b| {
        b.iter(|| load_movie_actor_graph(&store, &events).map(|(graph, _)| graph.edge_count()))
    });
}

fn bench_trie_build(c: &mut Criterion) {
    let store = generate_store(FixtureSize::Small, SEED);
    let events = EventDispatcher::new();
    let Ok(encoder) = AttributeEncoder::from_store(&store, &EncoderConfig::default()) else {
        return;
    };

    c.bench_function("trie_build_1k_movies", |b| {
        b.iter(|| build_trie(&store, &encoder, &events).1.leaves)
    });
}

fn bench_queries(c: &mut Criterion) {
    let store = generate_store(FixtureSize::Medium, SEED);
    let Ok(recommender) =
        Recommender::build(store, &ReelpickConfig::default(), &EventDispatcher::new())
    else {
        return;
    };
    let selection = FilterSelection::new(
        Some(RuntimeBin::Mid),
        vec!["Comedy".to_string(), "Drama".to_string()],
    );

    c.bench_function("actor_lookup_10k_movies", |b| {
        b.iter(|| recommender.movies_featuring("Actor 7").movies().len())
    });

    c.bench_function("filter_recommend_10k_movies", |b| {
        b.iter(|| recommender.recommend(&selection).message())
    });

    c.bench_function("trie_go_left_most_10k_movies", |b| {
        b.iter(|| recommender.trie().go_left_most())
    });
}

/// Timed component runs collected into a JSON report under the target
/// directory. Set `REELPICK_BENCH_BASELINE` to a previous report to list
/// regressions.
fn bench_build_report(_c: &mut Criterion) {
    let store = generate_store(FixtureSize::Small, SEED);
    let movies = store.len() as u64;
    let events = EventDispatcher::new();
    let config = ReelpickConfig::default();
    let Ok(recommender) = Recommender::build(store.clone(), &config, &events) else {
        return;
    };
    let mut report = BuildReport::from_build(
        recommender.stats(),
        recommender.encoder().vocabulary().len(),
    );

    report.push_result(BenchResult::measure(
        "graph_build",
        BenchLevel::Component,
        10,
        movies,
        || load_movie_actor_graph(&store, &events).is_ok(),
    ));
    report.push_result(BenchResult::measure(
        "trie_build",
        BenchLevel::Component,
        10,
        movies,
        || build_trie(&store, recommender.encoder(), &events).1.leaves,
    ));
    let selection = FilterSelection::new(Some(RuntimeBin::Mid), ["Drama"]);
    report.push_result(BenchResult::measure(
        "filter_recommend",
        BenchLevel::Regression,
        1_000,
        0,
        || recommender.recommend(&selection).movies().len(),
    ));

    let target = std::env::var_os("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target"));
    let path = target.join("reelpick-bench").join("report.json");
    if let Err(e) = report.write_to_file(&path) {
        eprintln!("could not write {}: {e}", path.display());
    }

    if let Some(baseline_path) = std::env::var_os("REELPICK_BENCH_BASELINE") {
        match BuildReport::load_from_file(&PathBuf::from(baseline_path)) {
            Ok(baseline) => {
                for result in report.regressions(&baseline) {
                    eprintln!(
                        "regression: {} ({}) {:.3} ms",
                        result.name,
                        result.level.as_str(),
                        result.duration_ms
                    );
                }
            }
            Err(e) => eprintln!("could not load baseline: {e}"),
        }
    }
}

criterion_group!(
    benches,
    bench_graph_build,
    bench_trie_build,
    bench_queries,
    bench_build_report
);
criterion_main!(benches);
