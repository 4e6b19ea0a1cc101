//! In-memory text corpus that produces the result strings fed to the highlighter.

use crate::fuzzy::is_similar;
use crate::normalize::normalize;
use quill_core::CorpusError;
use quill_core::types::{CorpusConfig, Term};
use rand::seq::SliceRandom;
use regex::{Regex, RegexBuilder};
use std::path::Path;
use tracing::{debug, info, warn};

/// Words whose normalized length differs from the term's by more than this are skipped.
const MAX_LENGTH_GAP: usize = 2;

pub struct Corpus {
    text: String,
    words: Vec<String>,
    normalized_words: Vec<String>,
}

impl Corpus {
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let text = std::fs::read_to_string(path)?;
        let corpus = Self::from_text(text);
        info!(
            path = %path.display(),
            bytes = corpus.text.len(),
            words = corpus.words.len(),
            "loaded corpus"
        );
        Ok(corpus)
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        let normalized_words = words.iter().map(|word| normalize(word)).collect();

        Self {
            text,
            words,
            normalized_words,
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Case-insensitive literal lookup.
    ///
    /// Every occurrence of each term (overlapping ones included), in text order,
    /// becomes a window of `context_bytes` either side of the hit.
    pub fn search(&self, terms: &[Term], config: &CorpusConfig) -> Vec<String> {
        let mut results = Vec::new();

        for term in terms {
            let Some(pattern) = literal_pattern(term) else {
                continue;
            };
            let before = results.len();

            for (at, hit_end) in occurrences(&pattern, &self.text).take(config.max_hits_per_term) {
                let start = floor_boundary(&self.text, at.saturating_sub(config.context_bytes));
                let end = (at + config.context_bytes).max(hit_end).min(self.text.len());
                let end = ceil_boundary(&self.text, end);
                results.push(self.text[start..end].to_string());
            }

            debug!(term = %term, hits = results.len() - before, "literal lookup");
        }

        shuffle_if_mixed(results, terms.len(), config)
    }

    /// Edit-distance lookup over the word list.
    ///
    /// Each hit becomes the `context_words` words either side of it joined
    /// by single spaces.
    pub fn search_fuzzy(&self, terms: &[Term], config: &CorpusConfig) -> Vec<String> {
        let mut results = Vec::new();

        for term in terms {
            let term = normalize(term);
            if term.is_empty() {
                continue;
            }
            let term_len = term.chars().count();

            let mut hits = Vec::new();
            for (index, word) in self.normalized_words.iter().enumerate() {
                if word.chars().count().abs_diff(term_len) > MAX_LENGTH_GAP {
                    continue;
                }
                if is_similar(&term, word) {
                    hits.push(index);
                    if hits.len() > config.max_hits_per_term {
                        break;
                    }
                }
            }
            hits.truncate(config.max_hits_per_term);

            debug!(term = %term, hits = hits.len(), "fuzzy lookup");

            for index in hits {
                let start = index.saturating_sub(config.context_words);
                let end = (index + config.context_words)
                    .max(index + 1)
                    .min(self.words.len());
                results.push(self.words[start..end].join(" "));
            }
        }

        shuffle_if_mixed(results, terms.len(), config)
    }
}

/// Interleaves results gathered for several terms.
fn shuffle_if_mixed(mut results: Vec<String>, terms: usize, config: &CorpusConfig) -> Vec<String> {
    if terms > 1 && config.shuffle {
        results.shuffle(&mut rand::thread_rng());
    }
    results
}

fn literal_pattern(term: &Term) -> Option<Regex> {
    match RegexBuilder::new(&regex::escape(term.as_str()))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => Some(pattern),
        Err(err) => {
            warn!(term = %term, error = %err, "term rejected, skipping lookup");
            None
        }
    }
}

/// Byte ranges of every match of `pattern`, overlapping matches included.
fn occurrences<'a>(
    pattern: &'a Regex,
    haystack: &'a str,
) -> impl Iterator<Item = (usize, usize)> + 'a {
    let mut from = 0;

    std::iter::from_fn(move || {
        if from > haystack.len() {
            return None;
        }
        let hit = pattern.find_at(haystack, from)?;
        let step = hit.as_str().chars().next().map_or(1, char::len_utf8);
        from = hit.start() + step;
        Some((hit.start(), hit.end()))
    })
}

fn floor_boundary(s: &str, mut index: usize) -> usize {
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_boundary(s: &str, mut index: usize) -> usize {
    while !s.is_char_boundary(index) {
        index += 1;
    }
    index
}
