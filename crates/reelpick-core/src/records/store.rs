//! In-memory record store keyed by movie title.

use crate::errors::RecordError;
use crate::types::FxHashMap;

use super::movie::{MovieId, MovieRecord};

/// All movie records, in first-seen order, with a title index.
///
/// Titles are unique. Inserting a record whose title already exists replaces
/// the earlier record in place, so its `MovieId` stays stable.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<MovieRecord>,
    by_title: FxHashMap<String, MovieId>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning its id.
    pub fn insert(&mut self, record: MovieRecord) -> MovieId {
        if let Some(&id) = self.by_title.get(&record.title) {
            tracing::warn!(title = %record.title, %id, "duplicate title, replacing earlier record");
            self.records[id.index()] = record;
            return id;
        }
        let id = MovieId(self.records.len());
        self.by_title.insert(record.title.clone(), id);
        self.records.push(record);
        id
    }

    /// Record for an id.
    pub fn get(&self, id: MovieId) -> Option<&MovieRecord> {
        self.records.get(id.index())
    }

    /// Id of the record with this title.
    pub fn id_of(&self, title: &str) -> Option<MovieId> {
        self.by_title.get(title).copied()
    }

    /// Id of the record with this title, or `RecordError::UnknownTitle`.
    pub fn resolve(&self, title: &str) -> Result<MovieId, RecordError> {
        self.id_of(title)
            .ok_or_else(|| RecordError::UnknownTitle(title.to_string()))
    }

    /// Record with this title.
    pub fn by_title(&self, title: &str) -> Option<&MovieRecord> {
        self.id_of(title).and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate `(id, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (MovieId, &MovieRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| (MovieId(i), record))
    }
}

impl FromIterator<MovieRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = MovieRecord>>(iter: I) -> Self {
        let mut store = Self::new();
        for record in iter {
            store.insert(record);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, runtime: &str) -> MovieRecord {
        MovieRecord::new(title, "Drama", runtime, ["Someone"])
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut store = RecordStore::new();
        assert_eq!(store.insert(record("A", "90 min")), MovieId(0));
        assert_eq!(store.insert(record("B", "91 min")), MovieId(1));
        assert_eq!(store.len(), 2);
        assert_eq!(store.id_of("B"), Some(MovieId(1)));
    }

    #[test]
    fn test_duplicate_title_replaces_in_place() {
        let mut store = RecordStore::new();
        let first = store.insert(record("A", "90 min"));
        let second = store.insert(record("A", "150 min"));
        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(first).map(|r| r.runtime.as_str()), Some("150 min"));
    }

    #[test]
    fn test_resolve_unknown_title() {
        let store = RecordStore::new();
        assert!(matches!(store.resolve("Nope"), Err(RecordError::UnknownTitle(t)) if t == "Nope"));
    }
}
