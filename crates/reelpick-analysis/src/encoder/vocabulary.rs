//! The ordered token vocabulary shared by the encoder and the trie.

use std::str::FromStr;

use reelpick_core::errors::EncodingError;
use reelpick_core::types::collections::{FxHashMap, FxHashSet};
use reelpick_core::RecordStore;

use super::runtime_bin::RuntimeBin;
use super::token::{AttributeToken, TokenCategory};

/// How genre tokens are ordered after the runtime tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenreOrder {
    /// Sorted by token name.
    #[default]
    Lexical,
    /// In the order genres first appear in the record store.
    FirstSeen,
}

impl FromStr for GenreOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lexical" => Ok(Self::Lexical),
            "first-seen" => Ok(Self::FirstSeen),
            other => Err(other.to_string()),
        }
    }
}

/// Fixed, ordered list of every attribute token.
///
/// Always starts with the six runtime tokens in bin order, followed by the
/// genre tokens. Positions never change once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: Vec<AttributeToken>,
    positions: FxHashMap<AttributeToken, usize>,
}

impl Vocabulary {
    /// Vocabulary with the runtime tokens and the given genres, deduplicated,
    /// in the given order.
    pub fn with_genres<'a>(genres: impl IntoIterator<Item = &'a str>) -> Self {
        let mut tokens: Vec<AttributeToken> =
            RuntimeBin::ALL.into_iter().map(AttributeToken::runtime).collect();
        let mut seen = FxHashSet::default();
        for genre in genres {
            let token = AttributeToken::genre(genre);
            if seen.insert(token.clone()) {
                tokens.push(token);
            }
        }
        Self::from_ordered(tokens)
    }

    /// Vocabulary covering every genre in the store.
    pub fn from_store(store: &RecordStore, order: GenreOrder) -> Self {
        let mut genres: Vec<&str> = Vec::new();
        let mut seen = FxHashSet::default();
        for (_, record) in store.iter() {
            for genre in record.genres() {
                if seen.insert(genre) {
                    genres.push(genre);
                }
            }
        }
        if order == GenreOrder::Lexical {
            genres.sort_unstable();
        }
        Self::with_genres(genres)
    }

    /// Vocabulary from an explicit token list, e.g. a decision table header.
    ///
    /// The list must hold every runtime token first, in bin order, then
    /// distinct genre tokens.
    pub fn from_tokens(tokens: Vec<AttributeToken>) -> Result<Self, EncodingError> {
        for (position, bin) in RuntimeBin::ALL.into_iter().enumerate() {
            let expected = AttributeToken::runtime(bin);
            match tokens.get(position) {
                Some(found) if *found == expected => {}
                found => {
                    return Err(EncodingError::VocabularyMismatch {
                        position,
                        expected: expected.to_string(),
                        found: found.map_or_else(|| "<end>".to_string(), ToString::to_string),
                    })
                }
            }
        }
        let mut seen = FxHashSet::default();
        for token in &tokens[RuntimeBin::ALL.len()..] {
            if token.category() != TokenCategory::Genre || !seen.insert(token) {
                return Err(EncodingError::UnknownToken(token.to_string()));
            }
        }
        Ok(Self::from_ordered(tokens))
    }

    fn from_ordered(tokens: Vec<AttributeToken>) -> Self {
        let positions = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Self { tokens, positions }
    }

    /// Position of a token, looked up by name.
    pub fn position(&self, token: &str) -> Option<usize> {
        self.positions.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.positions.contains_key(token)
    }

    pub fn get(&self, position: usize) -> Option<&AttributeToken> {
        self.tokens.get(position)
    }

    pub fn tokens(&self) -> &[AttributeToken] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AttributeToken> {
        self.tokens.iter()
    }

    /// Genre names in vocabulary order.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(AttributeToken::genre_name)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Compare against `expected` position by position.
    pub fn ensure_matches(&self, expected: &Vocabulary) -> Result<(), EncodingError> {
        let width = self.len().max(expected.len());
        for position in 0..width {
            let ours = self.get(position);
            let theirs = expected.get(position);
            if ours != theirs {
                let name = |t: Option<&AttributeToken>| {
                    t.map_or_else(|| "<end>".to_string(), ToString::to_string)
                };
                return Err(EncodingError::VocabularyMismatch {
                    position,
                    expected: name(theirs),
                    found: name(ours),
                });
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a AttributeToken;
    type IntoIter = std::slice::Iter<'a, AttributeToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
