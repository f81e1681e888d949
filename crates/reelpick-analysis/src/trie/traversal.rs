//! Three-way traversal result.

/// Outcome of walking the trie along a token sequence.
///
/// A miss is an expected outcome, not an error, and is kept apart from
/// both a successful lookup and a trie with nothing in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Traversal<T> {
    /// The trie holds no branches.
    EmptyTree,
    /// Some token in the sequence had no matching child.
    NoMatch,
    /// The whole sequence matched.
    Matches(T),
}

impl<T> Traversal<T> {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matches(_))
    }

    pub fn matches(&self) -> Option<&T> {
        match self {
            Self::Matches(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_matches(self) -> Option<T> {
        match self {
            Self::Matches(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Traversal<U> {
        match self {
            Self::EmptyTree => Traversal::EmptyTree,
            Self::NoMatch => Traversal::NoMatch,
            Self::Matches(value) => Traversal::Matches(f(value)),
        }
    }
}
