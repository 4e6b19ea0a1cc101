//! Quill match-and-highlight library.
//!
//! Takes result strings from a search backend plus the user's query and
//! [`MatchMode`], and returns HTML fragments with matched text wrapped in
//! `<mark>` tags.
//!
//! # Design
//!
//! - Pure and synchronous: no I/O and no shared state in the engine, so calls
//!   from several threads need no locking.
//! - Total: every input, including empty queries and empty result lists,
//!   produces a defined output.
//! - Matching never alters the text. Normalization is used for comparison only.
//!
//! # Modules
//!
//! - [`normalize`]: lowercase and strip non-word characters
//! - [`fuzzy`]: Levenshtein distance and the length-scaled threshold
//! - [`highlight`]: strategy dispatch and marking
//! - [`Corpus`]: local lookup that produces result windows
//! - [`SearchSession`]: submission lifecycle with stale-result cancellation

mod corpus;
pub mod fuzzy;
pub mod highlight;
pub mod normalize;
mod render;
mod session;

pub use corpus::Corpus;
pub use fuzzy::{distance_threshold, is_similar, levenshtein_distance};
pub use highlight::{Highlighter, highlight, highlight_literal, should_highlight};
pub use normalize::normalize;
pub use quill_core::types::{HighlightConfig, MatchMode, Strategy};
pub use render::{Renderer, line_breaks};
pub use session::{SearchSession, SearchState, Ticket};
