//! Submission lifecycle for a search front end.
//!
//! `Idle -> Searching -> {Results, Empty, Failed}`. Each submission gets a
//! [`Ticket`] carrying a generation number; beginning a new submission or
//! clearing bumps the generation, which cancels every outstanding ticket.
//! Completions for a stale ticket are dropped without touching the engine.

use crate::highlight::Highlighter;
use quill_core::types::MatchMode;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Searching,
    /// Highlighted fragments ready to render.
    Results(Vec<String>),
    /// The request succeeded with no results.
    Empty,
    /// Retrieval failed; the engine was not invoked.
    Failed(String),
}

/// Handle for one in-flight submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

#[derive(Debug, Default)]
pub struct SearchSession {
    highlighter: Highlighter,
    generation: u64,
    pending: Option<Submission>,
    state: SearchState,
}

#[derive(Debug)]
struct Submission {
    query: String,
    mode: MatchMode,
}

impl SearchSession {
    pub fn new(highlighter: Highlighter) -> Self {
        Self {
            highlighter,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_searching(&self) -> bool {
        self.state == SearchState::Searching
    }

    /// True while `ticket` belongs to the submission still being awaited.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.generation == self.generation && self.pending.is_some()
    }

    /// Starts a submission, superseding any in-flight one.
    pub fn begin(&mut self, query: impl Into<String>, mode: MatchMode) -> Ticket {
        if self.pending.is_some() {
            debug!(generation = self.generation, "superseding in-flight search");
        }

        self.generation += 1;
        self.pending = Some(Submission {
            query: query.into(),
            mode,
        });
        self.state = SearchState::Searching;

        Ticket {
            generation: self.generation,
        }
    }

    /// Delivers results for `ticket`. Returns false if the ticket is stale.
    pub fn complete<S: AsRef<str>>(&mut self, ticket: Ticket, results: &[S]) -> bool {
        if !self.is_current(ticket) {
            debug!(ticket = ticket.generation, "dropping stale results");
            return false;
        }
        let Some(submission) = self.pending.take() else {
            return false;
        };

        self.state = if results.is_empty() {
            SearchState::Empty
        } else {
            SearchState::Results(self.highlighter.highlight(
                results,
                &submission.query,
                submission.mode,
            ))
        };
        true
    }

    /// Records a retrieval failure for `ticket`. Returns false if the ticket is stale.
    pub fn fail(&mut self, ticket: Ticket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.pending = None;
        self.state = SearchState::Failed(message.into());
        true
    }

    /// Drops any results and cancels the in-flight submission.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.state = SearchState::Idle;
    }
}
