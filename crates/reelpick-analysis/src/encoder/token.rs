//! Attribute tokens: the names of one-hot columns.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use reelpick_core::errors::EncodingError;
use serde::{Deserialize, Serialize};

use super::runtime_bin::RuntimeBin;

pub(crate) const RUNTIME_PREFIX: &str = "runtime_bin_";
pub(crate) const GENRE_PREFIX: &str = "genre_";

/// Category a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Runtime(RuntimeBin),
    Genre,
}

/// Canonical name of one boolean feature, namespaced by category:
/// `runtime_bin_<bin>` or `genre_<Name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AttributeToken(String);

impl AttributeToken {
    pub fn runtime(bin: RuntimeBin) -> Self {
        Self(format!("{RUNTIME_PREFIX}{}", bin.name()))
    }

    /// Token for a genre name. The name is trimmed; case is kept.
    pub fn genre(name: &str) -> Self {
        Self(format!("{GENRE_PREFIX}{}", name.trim()))
    }

    pub fn category(&self) -> TokenCategory {
        match self.0.strip_prefix(RUNTIME_PREFIX).and_then(|n| n.parse().ok()) {
            Some(bin) => TokenCategory::Runtime(bin),
            None => TokenCategory::Genre,
        }
    }

    /// Genre name for a genre token.
    pub fn genre_name(&self) -> Option<&str> {
        match self.category() {
            TokenCategory::Genre => self.0.strip_prefix(GENRE_PREFIX),
            TokenCategory::Runtime(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AttributeToken {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(bin) = s.strip_prefix(RUNTIME_PREFIX) {
            return Ok(Self::runtime(bin.parse()?));
        }
        match s.strip_prefix(GENRE_PREFIX) {
            Some(name) if !name.trim().is_empty() => Ok(Self::genre(name)),
            _ => Err(EncodingError::UnknownToken(s.to_string())),
        }
    }
}

impl TryFrom<String> for AttributeToken {
    type Error = EncodingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AttributeToken> for String {
    fn from(token: AttributeToken) -> Self {
        token.0
    }
}

impl Borrow<str> for AttributeToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AttributeToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttributeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
