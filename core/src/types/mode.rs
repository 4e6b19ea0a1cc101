use serde::{Deserialize, Serialize};
use std::fmt;

/// Matching flags supplied with a search submission.
///
/// `fuzzy` wins over `exact` when both are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchMode {
    /// Match the whole query as one literal phrase.
    pub exact: bool,
    /// Match words by edit distance instead of literally.
    pub fuzzy: bool,
}

impl MatchMode {
    pub const PHRASE: Self = Self {
        exact: true,
        fuzzy: false,
    };

    pub const TERMS: Self = Self {
        exact: false,
        fuzzy: false,
    };

    pub const FUZZY: Self = Self {
        exact: false,
        fuzzy: true,
    };

    /// Builds a mode from the request flags, where `multi` asks for the
    /// query to be split into independent words.
    pub fn from_multi(multi: bool, fuzzy: bool) -> Self {
        Self {
            exact: !multi,
            fuzzy,
        }
    }

    pub fn strategy(self) -> Strategy {
        if self.fuzzy {
            Strategy::Fuzzy
        } else if self.exact {
            Strategy::Phrase
        } else {
            Strategy::Terms
        }
    }
}

/// Resolved matching strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Whole query as a single case-insensitive literal.
    Phrase,
    /// Whitespace-separated terms as a case-insensitive alternation.
    Terms,
    /// Per-word edit-distance comparison on normalized text.
    Fuzzy,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Phrase => write!(f, "phrase"),
            Strategy::Terms => write!(f, "terms"),
            Strategy::Fuzzy => write!(f, "fuzzy"),
        }
    }
}
