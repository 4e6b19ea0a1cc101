use crate::types::Strategy;
use nutype::nutype;

/// A single query term or phrase. Never empty or whitespace-only.
#[nutype(
    validate(predicate = |term: &str| !term.trim().is_empty()),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Term(String);

/// Raw user query as typed, not pre-normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whitespace-separated terms in query order. Duplicates are kept.
    pub fn terms(&self) -> Vec<Term> {
        self.0
            .split_whitespace()
            .filter_map(|word| Term::try_from(word).ok())
            .collect()
    }

    /// The whole query as one literal phrase, if it has any content.
    pub fn phrase(&self) -> Option<Term> {
        Term::try_from(self.0.as_str()).ok()
    }

    pub fn terms_for(&self, strategy: Strategy) -> Vec<Term> {
        match strategy {
            Strategy::Phrase => self.phrase().into_iter().collect(),
            Strategy::Terms | Strategy::Fuzzy => self.terms(),
        }
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Query {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests;
