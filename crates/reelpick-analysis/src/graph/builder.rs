//! Builds the actor/movie graph from a record store.

use std::time::{Duration, Instant};

use reelpick_core::errors::GraphError;
use reelpick_core::events::{EventDispatcher, GraphBuiltEvent};
use reelpick_core::RecordStore;

use super::types::{BipartiteGraph, VertexKind};

/// Statistics from a graph build.
#[derive(Debug, Clone, Default)]
pub struct GraphStats {
    pub movies: usize,
    pub actors: usize,
    pub edges: usize,
    /// Cast entries dropped because the name already labels a movie.
    pub skipped_cast: usize,
    pub build_duration: Duration,
}

/// Build the graph: one vertex per movie, one per distinct cast member, and
/// an edge for every movie/cast pair.
///
/// Movie vertices are added before any actor so a cast name that matches a
/// title can never turn a movie into an actor. Such names are skipped.
/// Blank cast entries are ignored and repeated names add no extra edge.
pub fn load_movie_actor_graph(
    store: &RecordStore,
    events: &EventDispatcher,
) -> Result<(BipartiteGraph, GraphStats), GraphError> {
    let start = Instant::now();
    let mut graph = BipartiteGraph::new();
    let mut stats = GraphStats::default();

    for (_, record) in store.iter() {
        graph.add_vertex(&record.title, VertexKind::Movie);
    }

    for (_, record) in store.iter() {
        for actor in record.cast_members() {
            if graph.kind_of(actor) == Some(VertexKind::Movie) {
                tracing::warn!(movie = %record.title, actor, "cast name collides with a movie title, skipping");
                stats.skipped_cast += 1;
                continue;
            }
            if graph.add_vertex(actor, VertexKind::Actor) {
                stats.actors += 1;
            }
            if graph.add_edge(&record.title, actor)? {
                stats.edges += 1;
            }
        }
    }

    stats.movies = store.len();
    stats.build_duration = start.elapsed();

    let duration_ms = stats.build_duration.as_millis() as u64;
    tracing::info!(
        graph_movies = stats.movies,
        graph_actors = stats.actors,
        graph_edges = stats.edges,
        graph_build_time = duration_ms,
        "actor/movie graph built"
    );
    events.emit_graph_built(&GraphBuiltEvent {
        movies: stats.movies,
        actors: stats.actors,
        edges: stats.edges,
        duration_ms,
    });

    Ok((graph, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelpick_core::MovieRecord;

    #[test]
    fn test_blank_and_repeated_cast() {
        let store: RecordStore = [MovieRecord::new(
            "Heat",
            "Crime",
            "170 min",
            ["Al Pacino", "", "Al Pacino", "Val Kilmer"],
        )]
        .into_iter()
        .collect();

        let (graph, stats) = load_movie_actor_graph(&store, &EventDispatcher::new()).unwrap();
        assert_eq!(stats.actors, 2);
        assert_eq!(stats.edges, 2);
        assert_eq!(graph.get_neighbours("Heat").unwrap().len(), 2);
    }

    #[test]
    fn test_cast_named_like_a_movie_is_skipped() {
        let store: RecordStore = [
            MovieRecord::new("Madonna", "Music", "120 min", ["Someone"]),
            MovieRecord::new("Evita", "Drama", "135 min", ["Madonna", "Antonio Banderas"]),
        ]
        .into_iter()
        .collect();

        let (graph, stats) = load_movie_actor_graph(&store, &EventDispatcher::new()).unwrap();
        assert_eq!(stats.skipped_cast, 1);
        assert_eq!(graph.kind_of("Madonna"), Some(VertexKind::Movie));
        assert!(!graph.get_neighbours("Evita").unwrap().contains("Madonna"));
    }
}
