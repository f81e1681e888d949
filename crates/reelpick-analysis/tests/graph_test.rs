//! Actor/movie graph behaviour.

use std::path::PathBuf;

use reelpick_analysis::graph::{load_movie_actor_graph, BipartiteGraph, VertexKind};
use reelpick_core::errors::GraphError;
use reelpick_core::events::EventDispatcher;
use reelpick_core::records::{load_movie_records, TextEncoding};
use reelpick_core::{MovieRecord, RecordStore};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/movies_small.csv")
}

/// T1: Heat's neighbours are exactly its four billed cast members.
#[test]
fn test_heat_scenario() {
    let store: RecordStore = [
        MovieRecord::new("Heat", "Action, Crime, Drama", "170 min", ["Pacino", "De Niro", "Kilmer", "Voight"]),
        MovieRecord::new("The Insider", "Biography, Drama", "157 min", ["Pacino", "Crowe", "Plummer", "Venora"]),
        MovieRecord::new("Ronin", "Action, Crime", "122 min", ["De Niro", "Reno", "McElhone", "Bean"]),
    ]
    .into_iter()
    .collect();

    let (graph, stats) = load_movie_actor_graph(&store, &EventDispatcher::new()).unwrap();
    assert_eq!(stats.movies, 3);
    assert_eq!(stats.actors, 10);

    let cast: Vec<String> = graph.get_neighbours("Heat").unwrap().into_iter().collect();
    assert_eq!(cast, vec!["De Niro", "Kilmer", "Pacino", "Voight"]);
    assert!(graph.get_neighbours("Pacino").unwrap().contains("Heat"));
    assert_eq!(graph.get_neighbours("Pacino").unwrap().len(), 2);
}

/// T2: Fixture file loads into the expected vertex counts.
#[test]
fn test_fixture_graph() {
    let store = load_movie_records(&fixture(), TextEncoding::Latin1).unwrap();
    let (graph, stats) = load_movie_actor_graph(&store, &EventDispatcher::new()).unwrap();

    assert_eq!(graph.get_vertices(VertexKind::Movie).len(), 7);
    assert_eq!(graph.get_vertices(VertexKind::Actor).len(), 18);
    assert_eq!(stats.edges, 25);
    assert_eq!(graph.edge_count(), 25);

    let keaton: Vec<String> = graph.get_neighbours("Diane Keaton").unwrap().into_iter().collect();
    assert_eq!(
        keaton,
        vec!["Annie Hall", "Manhattan", "The Godfather", "The Godfather: Part II"]
    );
    assert_eq!(graph.get_neighbours("Lost Reel").unwrap().len(), 1);
}

/// T3: Unknown endpoints fail with NotFound and leave the graph untouched.
#[test]
fn test_add_edge_unknown_item_does_not_mutate() {
    let mut graph = BipartiteGraph::new();
    graph.add_vertex("Heat", VertexKind::Movie);

    let err = graph.add_edge("Heat", "Nobody").unwrap_err();
    assert_eq!(err, GraphError::NotFound { item: "Nobody".into() });
    let err = graph.add_edge("Nobody", "Heat").unwrap_err();
    assert_eq!(err, GraphError::NotFound { item: "Nobody".into() });

    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.get_neighbours("Heat").unwrap().is_empty());
    assert!(!graph.contains("Nobody"));
}

/// T4: Neighbour lookups on unknown labels fail rather than return empty.
#[test]
fn test_get_neighbours_unknown() {
    let graph = BipartiteGraph::new();
    assert!(matches!(
        graph.get_neighbours("Nobody"),
        Err(GraphError::NotFound { .. })
    ));
    assert!(graph.degree("Nobody").is_err());
}

/// T5: Adding an edge twice leaves the same neighbour sets as adding it once.
#[test]
fn test_edge_idempotence() {
    let mut graph = BipartiteGraph::new();
    graph.add_vertex("Heat", VertexKind::Movie);
    graph.add_vertex("Al Pacino", VertexKind::Actor);

    assert_eq!(graph.add_edge("Heat", "Al Pacino"), Ok(true));
    let once = graph.get_neighbours("Heat").unwrap();
    assert_eq!(graph.add_edge("Heat", "Al Pacino"), Ok(false));
    assert_eq!(graph.add_edge("Al Pacino", "Heat"), Ok(false));
    assert_eq!(graph.get_neighbours("Heat").unwrap(), once);
    assert_eq!(graph.edge_count(), 1);
}

/// T6: Re-adding an existing label keeps its edges.
#[test]
fn test_add_vertex_preserves_edges() {
    let store = load_movie_records(&fixture(), TextEncoding::Latin1).unwrap();
    let (mut graph, _) = load_movie_actor_graph(&store, &EventDispatcher::new()).unwrap();
    let before = graph.get_neighbours("Heat").unwrap();
    assert!(!graph.add_vertex("Heat", VertexKind::Movie));
    assert_eq!(graph.get_neighbours("Heat").unwrap(), before);
}
