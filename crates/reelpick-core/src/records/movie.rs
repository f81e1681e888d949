//! Movie record and its typed store identifier.

use std::fmt;
use std::num::IntErrorKind;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::SmallVec4;

static RUNTIME_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("runtime digit pattern is valid"));

/// Index of a record inside a `RecordStore`.
///
/// Trie leaves carry this instead of a copy of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MovieId(pub usize);

impl MovieId {
    /// Position of the record in its store.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "movie#{}", self.0)
    }
}

/// One movie row as delivered by the source file.
///
/// `genre` and `runtime` keep their raw text; the encoder interprets them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub poster_link: String,
    /// Comma-separated genre list, e.g. `"Crime, Drama"`.
    pub genre: String,
    /// Free text containing the runtime in minutes, e.g. `"142 min"`.
    pub runtime: String,
    /// Billed cast in credit order.
    pub cast: SmallVec4<String>,
    pub director: String,
    pub overview: String,
    pub rating: Option<f32>,
}

impl MovieRecord {
    /// Create a record with the fields both indexes need.
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        runtime: impl Into<String>,
        cast: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            runtime: runtime.into(),
            cast: cast.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Individual genre names: split on commas, trimmed, empties dropped.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genre
            .split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
    }

    /// First run of ASCII digits in the runtime text, read as minutes.
    /// Numbers too large for `u32` saturate at `u32::MAX`.
    pub fn runtime_minutes(&self) -> Option<u32> {
        let digits = RUNTIME_DIGITS.find(&self.runtime)?;
        match digits.as_str().parse::<u32>() {
            Ok(minutes) => Some(minutes),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u32::MAX),
            Err(_) => None,
        }
    }

    /// Non-empty cast names in credit order.
    pub fn cast_members(&self) -> impl Iterator<Item = &str> {
        self.cast.iter().map(|c| c.trim()).filter(|c| !c.is_empty())
    }
}

impl fmt::Display for MovieRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Genre: {}", self.genre)?;
        writeln!(f, "Runtime: {}", self.runtime)?;
        writeln!(f, "Director: {}", self.director)?;
        writeln!(f, "Cast: {}", self.cast.join(", "))?;
        match self.rating {
            Some(rating) => writeln!(f, "IMDB Rating: {rating}")?,
            None => writeln!(f, "IMDB Rating: n/a")?,
        }
        write!(f, "Overview: {}", self.overview)
    }
}
