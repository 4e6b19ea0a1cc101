use serde::{Deserialize, Serialize};

/// Context and limits for corpus lookups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Bytes of context kept either side of a literal hit.
    #[serde(default = "default_context_bytes")]
    pub context_bytes: usize,
    /// Words of context kept either side of a fuzzy hit.
    #[serde(default = "default_context_words")]
    pub context_words: usize,
    #[serde(default = "default_max_hits_per_term")]
    pub max_hits_per_term: usize,
    /// Interleave results when more than one term was searched.
    #[serde(default = "default_true")]
    pub shuffle: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            context_bytes: default_context_bytes(),
            context_words: default_context_words(),
            max_hits_per_term: default_max_hits_per_term(),
            shuffle: true,
        }
    }
}

fn default_context_bytes() -> usize {
    250
}

fn default_context_words() -> usize {
    35
}

fn default_max_hits_per_term() -> usize {
    500
}

fn default_true() -> bool {
    true
}
