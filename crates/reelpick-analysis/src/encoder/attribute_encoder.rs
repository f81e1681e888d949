//! The attribute encoder: records and filter selections to tokens.

use reelpick_core::config::EncoderConfig;
use reelpick_core::errors::EncodingError;
use reelpick_core::events::{EventDispatcher, RuntimeFallbackEvent};
use reelpick_core::{MovieId, MovieRecord, RecordStore};

use super::runtime_bin::RuntimeBin;
use super::token::AttributeToken;
use super::vocabulary::{GenreOrder, Vocabulary};

/// One movie's active tokens, in vocabulary order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedMovie {
    pub id: MovieId,
    pub tokens: Vec<AttributeToken>,
}

/// Counters from encoding a whole store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeDiagnostics {
    pub encoded: usize,
    /// Records without a parseable runtime, placed in the fallback bin.
    pub runtime_fallbacks: usize,
    /// Titles of the records counted in `runtime_fallbacks`.
    pub fallback_titles: Vec<String>,
}

/// Deterministic encoder over a fixed vocabulary.
#[derive(Debug, Clone)]
pub struct AttributeEncoder {
    vocabulary: Vocabulary,
    missing_runtime_bin: RuntimeBin,
}

impl AttributeEncoder {
    pub fn new(vocabulary: Vocabulary, missing_runtime_bin: RuntimeBin) -> Self {
        Self {
            vocabulary,
            missing_runtime_bin,
        }
    }

    /// Build the vocabulary from `store` using the encoder settings.
    pub fn from_store(store: &RecordStore, config: &EncoderConfig) -> Result<Self, EncodingError> {
        let missing_runtime_bin: RuntimeBin = config.effective_missing_runtime_bin().parse()?;
        let order: GenreOrder = config
            .effective_genre_order()
            .parse()
            .map_err(EncodingError::InvalidGenreOrder)?;
        let vocabulary = Vocabulary::from_store(store, order);
        tracing::debug!(
            vocabulary_size = vocabulary.len(),
            fallback_bin = %missing_runtime_bin,
            "encoder vocabulary built"
        );
        Ok(Self::new(vocabulary, missing_runtime_bin))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Bin assigned when a runtime has no digits.
    pub fn missing_runtime_bin(&self) -> RuntimeBin {
        self.missing_runtime_bin
    }

    /// Runtime bin of a record, or the fallback bin if it has no runtime.
    pub fn runtime_bin(&self, record: &MovieRecord) -> RuntimeBin {
        match record.runtime_minutes() {
            Some(minutes) => RuntimeBin::from_minutes(minutes),
            None => {
                tracing::debug!(
                    title = %record.title,
                    raw_runtime = %record.runtime,
                    assigned_bin = %self.missing_runtime_bin,
                    "runtime missing, using fallback bin"
                );
                self.missing_runtime_bin
            }
        }
    }

    /// Active tokens of a record in vocabulary order. Genres missing from the
    /// vocabulary are dropped.
    pub fn active_tokens(&self, record: &MovieRecord) -> Vec<AttributeToken> {
        let mut positions: Vec<usize> = Vec::with_capacity(4);
        let runtime = AttributeToken::runtime(self.runtime_bin(record));
        positions.extend(self.vocabulary.position(runtime.as_str()));
        for genre in record.genres() {
            let token = AttributeToken::genre(genre);
            match self.vocabulary.position(token.as_str()) {
                Some(position) => positions.push(position),
                None => tracing::debug!(title = %record.title, %token, "genre outside vocabulary"),
            }
        }
        self.tokens_at(positions)
    }

    /// Dense 0/1 vector, one cell per vocabulary token.
    pub fn encode(&self, record: &MovieRecord) -> Vec<u8> {
        self.dense(&self.active_tokens(record))
    }

    /// Sort a user selection into vocabulary order.
    ///
    /// Duplicates collapse. Any name outside the vocabulary is an error.
    pub fn encode_filter<S: AsRef<str>>(
        &self,
        selected: impl IntoIterator<Item = S>,
    ) -> Result<Vec<AttributeToken>, EncodingError> {
        let mut positions = Vec::new();
        for name in selected {
            let name = name.as_ref().trim();
            let position = self
                .vocabulary
                .position(name)
                .ok_or_else(|| EncodingError::UnknownToken(name.to_string()))?;
            positions.push(position);
        }
        Ok(self.tokens_at(positions))
    }

    /// Dense 0/1 vector for a user selection.
    pub fn encode_selection_dense<S: AsRef<str>>(
        &self,
        selected: impl IntoIterator<Item = S>,
    ) -> Result<Vec<u8>, EncodingError> {
        Ok(self.dense(&self.encode_filter(selected)?))
    }

    /// Active tokens of a dense vector.
    pub fn decode_dense(&self, cells: &[u8]) -> Result<Vec<AttributeToken>, EncodingError> {
        if cells.len() != self.vocabulary.len() {
            return Err(EncodingError::WidthMismatch {
                expected: self.vocabulary.len(),
                found: cells.len(),
            });
        }
        Ok(cells
            .iter()
            .zip(self.vocabulary.iter())
            .filter(|(cell, _)| **cell != 0)
            .map(|(_, token)| token.clone())
            .collect())
    }

    /// Encode every record in `store`.
    ///
    /// Each runtime fallback is logged, sent to `events`, and counted.
    pub fn encode_store(
        &self,
        store: &RecordStore,
        events: &EventDispatcher,
    ) -> (Vec<EncodedMovie>, EncodeDiagnostics) {
        let mut diagnostics = EncodeDiagnostics::default();
        let mut encoded = Vec::with_capacity(store.len());

        for (id, record) in store.iter() {
            if record.runtime_minutes().is_none() {
                tracing::warn!(
                    title = %record.title,
                    raw_runtime = %record.runtime,
                    assigned_bin = %self.missing_runtime_bin,
                    "runtime missing, using fallback bin"
                );
                events.emit_runtime_fallback(&RuntimeFallbackEvent {
                    title: record.title.clone(),
                    raw_runtime: record.runtime.clone(),
                    assigned_bin: self.missing_runtime_bin.name().to_string(),
                });
                diagnostics.runtime_fallbacks += 1;
                diagnostics.fallback_titles.push(record.title.clone());
            }
            encoded.push(EncodedMovie {
                id,
                tokens: self.active_tokens(record),
            });
        }

        diagnostics.encoded = encoded.len();
        if diagnostics.runtime_fallbacks > 0 {
            tracing::info!(
                runtime_fallbacks = diagnostics.runtime_fallbacks,
                vocabulary_size = self.vocabulary.len(),
                "store encoded with runtime fallbacks"
            );
        }
        (encoded, diagnostics)
    }

    fn tokens_at(&self, mut positions: Vec<usize>) -> Vec<AttributeToken> {
        positions.sort_unstable();
        positions.dedup();
        positions
            .into_iter()
            .filter_map(|p| self.vocabulary.get(p).cloned())
            .collect()
    }

    fn dense(&self, active: &[AttributeToken]) -> Vec<u8> {
        let mut cells = vec![0u8; self.vocabulary.len()];
        for token in active {
            if let Some(position) = self.vocabulary.position(token.as_str()) {
                cells[position] = 1;
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> AttributeEncoder {
        AttributeEncoder::new(
            Vocabulary::with_genres(["Comedy", "Drama", "Romance"]),
            RuntimeBin::VeryShort,
        )
    }

    fn names(tokens: &[AttributeToken]) -> Vec<&str> {
        tokens.iter().map(AttributeToken::as_str).collect()
    }

    #[test]
    fn test_active_tokens_in_vocabulary_order() {
        let record = MovieRecord::new("Annie Hall", "Romance, Comedy", "93 min", ["Woody Allen"]);
        let tokens = encoder().active_tokens(&record);
        assert_eq!(names(&tokens), vec!["runtime_bin_mid", "genre_Comedy", "genre_Romance"]);
    }

    #[test]
    fn test_unknown_genre_dropped() {
        let record = MovieRecord::new("X", "Drama, Opera", "61 min", ["a"]);
        let tokens = encoder().active_tokens(&record);
        assert_eq!(names(&tokens), vec!["runtime_bin_short", "genre_Drama"]);
    }

    #[test]
    fn test_missing_runtime_uses_fallback() {
        let record = MovieRecord::new("X", "Drama", "unknown", ["a"]);
        assert_eq!(encoder().runtime_bin(&record), RuntimeBin::VeryShort);

        let mid = AttributeEncoder::new(Vocabulary::with_genres(["Drama"]), RuntimeBin::Mid);
        assert_eq!(mid.runtime_bin(&record), RuntimeBin::Mid);
    }

    #[test]
    fn test_encode_filter_sorts_and_dedups() {
        let tokens = encoder()
            .encode_filter(["genre_Romance", "runtime_bin_long", "genre_Romance"])
            .unwrap();
        assert_eq!(names(&tokens), vec!["runtime_bin_long", "genre_Romance"]);
    }

    #[test]
    fn test_encode_filter_unknown_token() {
        let err = encoder().encode_filter(["genre_Western"]).unwrap_err();
        assert!(matches!(err, EncodingError::UnknownToken(t) if t == "genre_Western"));
    }

    #[test]
    fn test_dense_round_trip() {
        let enc = encoder();
        let dense = enc
            .encode_selection_dense(["genre_Drama", "runtime_bin_mid"])
            .unwrap();
        assert_eq!(dense, vec![0, 0, 1, 0, 0, 0, 0, 1, 0]);
        let back = enc.decode_dense(&dense).unwrap();
        assert_eq!(names(&back), vec!["runtime_bin_mid", "genre_Drama"]);
    }

    #[test]
    fn test_decode_dense_wrong_width() {
        let err = encoder().decode_dense(&[1, 0]).unwrap_err();
        assert!(matches!(
            err,
            EncodingError::WidthMismatch { expected: 9, found: 2 }
        ));
    }

    #[test]
    fn test_oversized_runtime_is_very_long() {
        let record = MovieRecord::new("Epic", "Drama", "5000000000 min", ["a"]);
        assert_eq!(encoder().runtime_bin(&record), RuntimeBin::VeryLong);
        let tokens = encoder().active_tokens(&record);
        assert_eq!(names(&tokens), vec!["runtime_bin_very-long", "genre_Drama"]);
    }

    #[test]
    fn test_from_store_rejects_bad_config() {
        let store = RecordStore::new();
        let config = EncoderConfig {
            missing_runtime_bin: Some("epic".into()),
            genre_order: None,
        };
        assert!(matches!(
            AttributeEncoder::from_store(&store, &config),
            Err(EncodingError::InvalidRuntimeBin(_))
        ));
    }
}
