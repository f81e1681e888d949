//! Property-based tests for graph and trie invariants.
//!
//! Uses proptest to fuzz-verify:
//!   - graph adjacency is symmetric and never reflexive
//!   - edge insertion is idempotent
//!   - encoding is deterministic and fixed-width with one runtime bin
//!   - every inserted branch is found again at its own path

use proptest::prelude::*;

use reelpick_analysis::encoder::{AttributeEncoder, RuntimeBin, Vocabulary};
use reelpick_analysis::graph::{BipartiteGraph, VertexKind};
use reelpick_analysis::trie::{DiscriminationTrie, Traversal, TrieEntry};
use reelpick_core::{MovieId, MovieRecord};

const GENRES: [&str; 6] = ["Action", "Comedy", "Crime", "Drama", "Romance", "War"];

fn arb_edges() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..6, 0usize..10), 0..40)
}

fn arb_record() -> impl Strategy<Value = MovieRecord> {
    (
        prop::option::of(0u32..400),
        prop::collection::vec(prop::sample::select(GENRES.to_vec()), 0..4),
    )
        .prop_map(|(minutes, genres)| {
            let runtime = minutes.map_or_else(|| "n/a".to_string(), |m| format!("{m} min"));
            MovieRecord::new("Probe", genres.join(", "), runtime, ["Someone"])
        })
}

fn encoder() -> AttributeEncoder {
    AttributeEncoder::new(Vocabulary::with_genres(GENRES), RuntimeBin::VeryShort)
}

fn graph_from(edges: &[(usize, usize)]) -> BipartiteGraph {
    let mut graph = BipartiteGraph::new();
    for m in 0..6 {
        graph.add_vertex(&format!("movie-{m}"), VertexKind::Movie);
    }
    for a in 0..10 {
        graph.add_vertex(&format!("actor-{a}"), VertexKind::Actor);
    }
    for &(m, a) in edges {
        graph
            .add_edge(&format!("movie-{m}"), &format!("actor-{a}"))
            .unwrap();
    }
    graph
}

proptest! {
    /// Adjacency is symmetric and no vertex neighbours itself.
    #[test]
    fn prop_adjacency_symmetric_irreflexive(edges in arb_edges()) {
        let graph = graph_from(&edges);
        let labels = graph
            .get_vertices(VertexKind::Movie)
            .into_iter()
            .chain(graph.get_vertices(VertexKind::Actor));
        for label in labels {
            let neighbours = graph.get_neighbours(&label).unwrap();
            prop_assert!(!neighbours.contains(&label));
            for n in &neighbours {
                prop_assert!(graph.get_neighbours(n).unwrap().contains(&label));
            }
        }
        for &(m, a) in &edges {
            let movie = format!("movie-{m}");
            let actor = format!("actor-{a}");
            let cast = graph.get_neighbours(&movie).unwrap();
            prop_assert!(cast.contains(&actor));
        }
    }

    /// Inserting every edge a second time changes nothing.
    #[test]
    fn prop_edges_idempotent(edges in arb_edges()) {
        let once = graph_from(&edges);
        let doubled: Vec<(usize, usize)> = edges.iter().chain(edges.iter()).copied().collect();
        let twice = graph_from(&doubled);
        prop_assert_eq!(once.edge_count(), twice.edge_count());
        for label in once.get_vertices(VertexKind::Movie) {
            prop_assert_eq!(once.get_neighbours(&label).unwrap(), twice.get_neighbours(&label).unwrap());
        }
    }

    /// Encoding is deterministic, fixed-width, and sets exactly one runtime bin.
    #[test]
    fn prop_encoding_fixed_width(a in arb_record(), b in arb_record()) {
        let encoder = encoder();
        let ea = encoder.encode(&a);
        prop_assert_eq!(&ea, &encoder.encode(&a));
        prop_assert_eq!(ea.len(), encoder.encode(&b).len());
        prop_assert_eq!(ea[..RuntimeBin::ALL.len()].iter().filter(|&&c| c == 1).count(), 1);
    }

    /// The runtime bin agrees with the half-open bounds.
    #[test]
    fn prop_runtime_bin_bounds(minutes in 0u32..100_000) {
        let bin = RuntimeBin::from_minutes(minutes);
        prop_assert!(bin.lower_bound() <= minutes);
        if let Some(upper) = bin.upper_bound() {
            prop_assert!(minutes < upper);
        }
    }

    /// After any sequence of inserts, each record's path holds exactly one
    /// leaf: the last record inserted with those tokens.
    #[test]
    fn prop_branch_then_traverse(records in prop::collection::vec(arb_record(), 1..30)) {
        let encoder = encoder();
        let mut trie = DiscriminationTrie::new();
        let paths: Vec<_> = records.iter().map(|r| encoder.active_tokens(r)).collect();
        for (i, path) in paths.iter().enumerate() {
            trie.create_branch(path, MovieId(i));
        }
        for path in &paths {
            let last = paths.iter().rposition(|p| p == path).unwrap();
            let children = match trie.traverse_tree(path) {
                Traversal::Matches(children) => children,
                other => return Err(TestCaseError::fail(format!("{other:?}"))),
            };
            let movies: Vec<&TrieEntry> = children
                .iter()
                .filter(|c| matches!(c, TrieEntry::Movie(_)))
                .collect();
            let expected = TrieEntry::Movie(MovieId(last));
            prop_assert_eq!(movies, vec![&expected]);
        }
        let mut distinct = paths.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(trie.leaf_count(), distinct.len());
    }
}
