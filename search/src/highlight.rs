//! Match-and-highlight engine.
//!
//! Dispatch per [`Strategy`]:
//! - `Phrase`: the whole query is one case-insensitive literal.
//! - `Terms`: whitespace-separated terms joined into a case-insensitive alternation.
//! - `Fuzzy`: every whitespace-delimited word is normalized and compared with each
//!   normalized term by equality or edit distance.
//!
//! Every strategy converts `\n` to `<br />` after matching. Highlighting only
//! inserts markup, so stripping it restores the input.

use crate::fuzzy::is_similar;
use crate::normalize::normalize;
use crate::render::{Renderer, line_breaks};
use quill_core::types::{HighlightConfig, MatchMode, Query, Strategy, Term};
use regex::{Captures, Regex, RegexBuilder};
use tracing::{debug, trace, warn};

/// Highlights each result with the default markup.
pub fn highlight<S: AsRef<str>>(results: &[S], query: &str, mode: MatchMode) -> Vec<String> {
    Highlighter::default().highlight(results, query, mode)
}

/// Wraps every case-insensitive literal occurrence of any of `terms` in a mark.
///
/// With a single term this is phrase matching; with several it is an
/// alternation tried left to right in the given order.
pub fn highlight_literal(text: &str, terms: &[Term]) -> String {
    Highlighter::default().highlight_literal(text, terms)
}

/// Highlighter bound to a markup configuration. Stateless between calls.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    renderer: Renderer,
}

impl Highlighter {
    pub fn new(config: HighlightConfig) -> Self {
        Self {
            renderer: Renderer::new(config),
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Produces one container-wrapped fragment per result.
    ///
    /// An empty `results` slice yields an empty vec.
    pub fn highlight<S: AsRef<str>>(
        &self,
        results: &[S],
        query: &str,
        mode: MatchMode,
    ) -> Vec<String> {
        let strategy = mode.strategy();
        let matcher = Matcher::new(&Query::new(query), strategy);
        let separator = self.renderer.config().separators.emits_for(strategy);

        debug!(%strategy, results = results.len(), "highlighting results");

        results
            .iter()
            .map(|result| {
                let html = line_breaks(&matcher.apply(result.as_ref(), &self.renderer));
                self.renderer.container(&html, separator)
            })
            .collect()
    }

    /// Highlights a single result without the container.
    pub fn highlight_text(&self, text: &str, query: &str, mode: MatchMode) -> String {
        let matcher = Matcher::new(&Query::new(query), mode.strategy());
        line_breaks(&matcher.apply(text, &self.renderer))
    }

    pub fn highlight_literal(&self, text: &str, terms: &[Term]) -> String {
        match literal_regex(terms) {
            Some(regex) => mark_literal(&regex, text, &self.renderer),
            None => text.to_string(),
        }
    }

    /// Wraps whole words that fuzzily match any of `terms`. Whitespace is kept as is.
    pub fn highlight_fuzzy(&self, text: &str, terms: &[Term]) -> String {
        mark_words(text, &normalized_terms(terms), &self.renderer)
    }
}

/// True when `word` matches any normalized term exactly or within its
/// edit-distance threshold.
pub fn should_highlight(normalized_terms: &[String], word: &str) -> bool {
    let word = normalize(word);
    if word.is_empty() {
        return false;
    }

    normalized_terms
        .iter()
        .filter(|term| !term.is_empty())
        .any(|term| *term == word || is_similar(term, &word))
}

/// Per-call compiled form of the query.
enum Matcher {
    Nothing,
    Literal(Regex),
    Fuzzy(Vec<String>),
}

impl Matcher {
    fn new(query: &Query, strategy: Strategy) -> Self {
        let terms = query.terms_for(strategy);

        match strategy {
            Strategy::Fuzzy => {
                let normalized = normalized_terms(&terms);
                if normalized.is_empty() {
                    Matcher::Nothing
                } else {
                    Matcher::Fuzzy(normalized)
                }
            }
            Strategy::Phrase | Strategy::Terms => match literal_regex(&terms) {
                Some(regex) => Matcher::Literal(regex),
                None => Matcher::Nothing,
            },
        }
    }

    fn apply(&self, text: &str, renderer: &Renderer) -> String {
        match self {
            Matcher::Nothing => text.to_string(),
            Matcher::Literal(regex) => mark_literal(regex, text, renderer),
            Matcher::Fuzzy(terms) => mark_words(text, terms, renderer),
        }
    }
}

fn normalized_terms(terms: &[Term]) -> Vec<String> {
    terms
        .iter()
        .map(|term| normalize(term))
        .filter(|term| !term.is_empty())
        .collect()
}

fn literal_regex(terms: &[Term]) -> Option<Regex> {
    if terms.is_empty() {
        return None;
    }

    let pattern = terms
        .iter()
        .map(|term| regex::escape(term.as_str()))
        .collect::<Vec<_>>()
        .join("|");
    trace!(%pattern, "literal alternation");

    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(regex) => Some(regex),
        Err(err) => {
            warn!(error = %err, "literal pattern rejected, leaving text unhighlighted");
            None
        }
    }
}

fn mark_literal(regex: &Regex, text: &str, renderer: &Renderer) -> String {
    regex
        .replace_all(text, |caps: &Captures| renderer.mark(&caps[0]))
        .into_owned()
}

fn mark_words(text: &str, terms: &[String], renderer: &Renderer) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while !rest.is_empty() {
        let gap = rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(rest.len());
        out.push_str(&rest[..gap]);
        rest = &rest[gap..];

        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let word = &rest[..end];
        if should_highlight(terms, word) {
            out.push_str(&renderer.mark(word));
        } else {
            out.push_str(word);
        }
        rest = &rest[end..];
    }

    out
}
