//! Graph types: vertex kinds, vertices, and the label-indexed graph.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableGraph;
use petgraph::Undirected;
use reelpick_core::errors::GraphError;
use reelpick_core::types::collections::FxHashMap;
use serde::{Deserialize, Serialize};

/// What a vertex stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexKind {
    Actor,
    Movie,
}

impl VertexKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Actor => "actor",
            Self::Movie => "movie",
        }
    }
}

impl fmt::Display for VertexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VertexKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "actor" => Ok(Self::Actor),
            "movie" => Ok(Self::Movie),
            other => Err(format!("unknown vertex kind: {other}")),
        }
    }
}

/// One actor or one movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    pub item: String,
    pub kind: VertexKind,
}

/// Undirected graph of actor and movie vertices.
///
/// Adjacency is symmetric by construction (undirected edges), a vertex never
/// neighbours itself, and at most one edge joins any pair of vertices.
/// Nothing is ever removed, so a built graph can be shared read-only.
#[derive(Debug, Clone, Default)]
pub struct BipartiteGraph {
    graph: StableGraph<Vertex, (), Undirected>,
    /// Map from label to NodeIndex for O(1) lookup.
    index: FxHashMap<String, NodeIndex>,
}

impl BipartiteGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex if `item` is absent.
    ///
    /// Returns `true` if a vertex was inserted. An existing label is left
    /// untouched, edges included, whatever `kind` is passed.
    pub fn add_vertex(&mut self, item: &str, kind: VertexKind) -> bool {
        if let Some(&idx) = self.index.get(item) {
            let existing = self.graph[idx].kind;
            if existing != kind {
                tracing::warn!(item, %existing, requested = %kind, "vertex exists with another kind, ignoring");
            }
            return false;
        }
        let idx = self.graph.add_node(Vertex {
            item: item.to_string(),
            kind,
        });
        self.index.insert(item.to_string(), idx);
        true
    }

    /// Link two existing vertices.
    ///
    /// Returns `Ok(true)` if the edge is new and `Ok(false)` if it was already
    /// present. Fails without touching the graph when either label is unknown
    /// or both labels are the same.
    pub fn add_edge(&mut self, item1: &str, item2: &str) -> Result<bool, GraphError> {
        if item1 == item2 {
            return Err(GraphError::SelfLoop {
                item: item1.to_string(),
            });
        }
        let a = self.lookup(item1)?;
        let b = self.lookup(item2)?;
        if self.graph.find_edge(a, b).is_some() {
            return Ok(false);
        }
        self.graph.add_edge(a, b, ());
        Ok(true)
    }

    /// Labels adjacent to `item`.
    pub fn get_neighbours(&self, item: &str) -> Result<BTreeSet<String>, GraphError> {
        let idx = self.lookup(item)?;
        Ok(self
            .graph
            .neighbors(idx)
            .map(|n| self.graph[n].item.clone())
            .collect())
    }

    /// Labels of every vertex of `kind`.
    pub fn get_vertices(&self, kind: VertexKind) -> BTreeSet<String> {
        self.graph
            .node_indices()
            .map(|idx| &self.graph[idx])
            .filter(|v| v.kind == kind)
            .map(|v| v.item.clone())
            .collect()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.index.contains_key(item)
    }

    /// Kind of the vertex labelled `item`, if any.
    pub fn kind_of(&self, item: &str) -> Option<VertexKind> {
        self.index.get(item).map(|&idx| self.graph[idx].kind)
    }

    /// Number of edges touching `item`.
    pub fn degree(&self, item: &str) -> Result<usize, GraphError> {
        let idx = self.lookup(item)?;
        Ok(self.graph.neighbors(idx).count())
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn lookup(&self, item: &str) -> Result<NodeIndex, GraphError> {
        self.index
            .get(item)
            .copied()
            .ok_or_else(|| GraphError::NotFound {
                item: item.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heat() -> BipartiteGraph {
        let mut g = BipartiteGraph::new();
        g.add_vertex("Heat", VertexKind::Movie);
        for actor in ["Al Pacino", "Robert De Niro"] {
            g.add_vertex(actor, VertexKind::Actor);
            g.add_edge("Heat", actor).unwrap();
        }
        g
    }

    #[test]
    fn test_add_vertex_ignores_existing_label() {
        let mut g = heat();
        assert!(!g.add_vertex("Heat", VertexKind::Movie));
        assert!(!g.add_vertex("Heat", VertexKind::Actor));
        assert_eq!(g.kind_of("Heat"), Some(VertexKind::Movie));
        assert_eq!(g.degree("Heat").unwrap(), 2);
    }

    #[test]
    fn test_add_edge_reports_new_or_existing() {
        let mut g = heat();
        assert_eq!(g.add_edge("Al Pacino", "Heat"), Ok(false));
        g.add_vertex("Val Kilmer", VertexKind::Actor);
        assert_eq!(g.add_edge("Val Kilmer", "Heat"), Ok(true));
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut g = heat();
        assert_eq!(
            g.add_edge("Heat", "Heat"),
            Err(GraphError::SelfLoop { item: "Heat".into() })
        );
    }

    #[test]
    fn test_get_vertices_by_kind() {
        let g = heat();
        assert_eq!(g.get_vertices(VertexKind::Movie).len(), 1);
        let actors: Vec<String> = g.get_vertices(VertexKind::Actor).into_iter().collect();
        assert_eq!(actors, vec!["Al Pacino", "Robert De Niro"]);
    }

    #[test]
    fn test_vertex_kind_round_trip() {
        assert_eq!("actor".parse::<VertexKind>(), Ok(VertexKind::Actor));
        assert_eq!(VertexKind::Movie.to_string(), "movie");
        assert!("director".parse::<VertexKind>().is_err());
    }
}
