//! The recommender: both indexes over one record store.

use std::path::Path;

use reelpick_core::config::ReelpickConfig;
use reelpick_core::errors::ReelpickError;
use reelpick_core::events::EventDispatcher;
use reelpick_core::records::load_movie_records;
use reelpick_core::{MovieId, MovieRecord, RecordStore};

use crate::encoder::{AttributeEncoder, EncodedTable};
use crate::graph::{load_movie_actor_graph, BipartiteGraph, GraphStats, VertexKind};
use crate::trie::{build_trie, DiscriminationTrie, Traversal, TrieStats};

use super::outcome::{ActorRecommendation, FilterRecommendation, FilterSelection};

/// Statistics from building both indexes.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    pub graph: GraphStats,
    pub trie: TrieStats,
}

/// Read-only snapshot of the record store, the actor graph, the encoder,
/// and the trie. Rebuild by constructing a new one.
#[derive(Debug)]
pub struct Recommender {
    store: RecordStore,
    graph: BipartiteGraph,
    encoder: AttributeEncoder,
    trie: DiscriminationTrie,
    max_results: usize,
    stats: BuildStats,
}

impl Recommender {
    /// Build every index from `store`.
    pub fn build(
        store: RecordStore,
        config: &ReelpickConfig,
        events: &EventDispatcher,
    ) -> Result<Self, ReelpickError> {
        let (graph, graph_stats) = load_movie_actor_graph(&store, events)?;
        let encoder = AttributeEncoder::from_store(&store, &config.encoder)?;
        let (trie, trie_stats) = build_trie(&store, &encoder, events);
        Ok(Self {
            store,
            graph,
            encoder,
            trie,
            max_results: config.recommend.effective_max_results(),
            stats: BuildStats {
                graph: graph_stats,
                trie: trie_stats,
            },
        })
    }

    /// Load the movie file named by `config` (relative to `root`) and build.
    pub fn load(
        root: &Path,
        config: &ReelpickConfig,
        events: &EventDispatcher,
    ) -> Result<Self, ReelpickError> {
        let path = root.join(config.data.effective_movie_file());
        let store = load_movie_records(&path, config.data.effective_encoding())?;
        Self::build(store, config, events)
    }

    /// Movies an actor appears in, sorted by title.
    pub fn movies_featuring(&self, actor: &str) -> ActorRecommendation<'_> {
        let actor = actor.trim();
        if actor.is_empty() {
            return ActorRecommendation::EmptyName;
        }
        if self.graph.kind_of(actor) != Some(VertexKind::Actor) {
            return ActorRecommendation::NotInDatabase {
                actor: actor.to_string(),
            };
        }
        let titles = match self.graph.get_neighbours(actor) {
            Ok(titles) => titles,
            Err(e) => {
                tracing::debug!(actor, error = %e, "actor lookup failed");
                return ActorRecommendation::NotInDatabase {
                    actor: actor.to_string(),
                };
            }
        };
        let movies: Vec<&MovieRecord> = titles
            .iter()
            .filter_map(|title| self.store.by_title(title))
            .collect();
        if movies.is_empty() {
            ActorRecommendation::NoMovies {
                actor: actor.to_string(),
            }
        } else {
            ActorRecommendation::Movies {
                actor: actor.to_string(),
                movies,
            }
        }
    }

    /// Representative movies matching a filter selection, at most
    /// `max_results` of them.
    ///
    /// The selection is put in vocabulary order before the trie is walked.
    /// Unknown genres, a miss, and an empty trie all come back as
    /// `NoRecommendations`.
    pub fn recommend(&self, selection: &FilterSelection) -> FilterRecommendation<'_> {
        let tokens = match self.encoder.encode_filter(selection.tokens()) {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::debug!(error = %e, "filter outside vocabulary");
                return FilterRecommendation::NoRecommendations;
            }
        };
        match self.trie.representatives(&tokens) {
            Traversal::Matches(ids) if !ids.is_empty() => {
                let movies: Vec<&MovieRecord> = ids
                    .into_iter()
                    .filter_map(|id| self.store.get(id))
                    .take(self.max_results)
                    .collect();
                FilterRecommendation::Movies(movies)
            }
            outcome => {
                tracing::debug!(?outcome, "no recommendation");
                FilterRecommendation::NoRecommendations
            }
        }
    }

    /// Encode the store under this recommender's vocabulary.
    pub fn decision_table(&self, events: &EventDispatcher) -> EncodedTable {
        EncodedTable::from_store(&self.store, &self.encoder, events).0
    }

    pub fn record(&self, id: MovieId) -> Option<&MovieRecord> {
        self.store.get(id)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn graph(&self) -> &BipartiteGraph {
        &self.graph
    }

    pub fn encoder(&self) -> &AttributeEncoder {
        &self.encoder
    }

    pub fn trie(&self) -> &DiscriminationTrie {
        &self.trie
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }
}
