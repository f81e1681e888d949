//! Undirected actor/movie graph.
//!
//! Vertices are keyed by label (actor full name or movie title). Edges only
//! ever join an actor to a movie when built through `load_movie_actor_graph`.

pub mod builder;
pub mod types;

pub use builder::{load_movie_actor_graph, GraphStats};
pub use types::{BipartiteGraph, Vertex, VertexKind};
