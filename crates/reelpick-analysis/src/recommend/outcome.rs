//! Query inputs and user-facing outcomes.

use reelpick_core::MovieRecord;

use crate::encoder::{AttributeToken, RuntimeBin};

/// A filter picked by the user: at most one runtime bin and any genres.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub runtime: Option<RuntimeBin>,
    /// Genre names, e.g. `Drama`.
    pub genres: Vec<String>,
}

impl FilterSelection {
    pub fn new(runtime: Option<RuntimeBin>, genres: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            runtime,
            genres: genres.into_iter().map(Into::into).collect(),
        }
    }

    /// Selected tokens in selection order.
    pub fn tokens(&self) -> Vec<AttributeToken> {
        self.runtime
            .map(AttributeToken::runtime)
            .into_iter()
            .chain(self.genres.iter().map(|g| AttributeToken::genre(g)))
            .collect()
    }
}

/// Result of "movies featuring X".
#[derive(Debug, Clone, PartialEq)]
pub enum ActorRecommendation<'a> {
    /// No actor name was given.
    EmptyName,
    NotInDatabase { actor: String },
    NoMovies { actor: String },
    Movies {
        actor: String,
        movies: Vec<&'a MovieRecord>,
    },
}

impl ActorRecommendation<'_> {
    pub fn movies(&self) -> &[&MovieRecord] {
        match self {
            Self::Movies { movies, .. } => movies,
            _ => &[],
        }
    }

    /// Message or heading to show the user.
    pub fn message(&self) -> String {
        match self {
            Self::EmptyName => "Please enter an actor's name".to_string(),
            Self::NotInDatabase { actor } => format!("{actor} is not in our database"),
            Self::NoMovies { actor } => format!("No movies found for {actor}"),
            Self::Movies { actor, .. } => format!("Movies featuring {actor}"),
        }
    }
}

/// Result of a filter query.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterRecommendation<'a> {
    NoRecommendations,
    Movies(Vec<&'a MovieRecord>),
}

impl FilterRecommendation<'_> {
    pub fn movies(&self) -> &[&MovieRecord] {
        match self {
            Self::Movies(movies) => movies,
            Self::NoRecommendations => &[],
        }
    }

    /// Message or heading to show the user.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoRecommendations => "No movie recommendations found for your preferences.",
            Self::Movies(_) => "Movie Recommendations",
        }
    }
}
