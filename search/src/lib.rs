//! Fuzzy subsequence matching and ranking for autocomplete candidates.
//!
//! # Design
//!
//! - Matcher: greedy leftmost subsequence scan producing the matched char
//!   positions of a candidate, case-insensitive by default.
//! - Ranker: scores each match by its longest run of consecutive positions
//!   and its first matched position, then stable-sorts (longest run first,
//!   earliest first match next, source order last).
//! - Engine: owns the candidate set and the current query. Every change
//!   re-evaluates the whole set; there is no incremental update.
//!
//! # API
//!
//! - `set_query()`: Replaces the query and re-ranks
//! - `set_candidates()`: Replaces the candidate set and re-ranks
//! - `results()`: Ranked entries, each carrying its own match positions
//!
//! Results carry the engine generation they were computed for, so callers
//! evaluating off the UI thread can drop results of superseded queries.

mod config;
mod engine;
mod matcher;
mod query;
mod ranker;
mod results;

pub use config::{CaseMatching, SearchConfig, Tiebreak};
pub use engine::SearchEngine;
pub use fuzzy_completer_core::types::{Candidate, CandidateId};
pub use matcher::{MatchResult, Matcher, Runs, fuzzy_match};
pub use query::SearchQuery;
pub use ranker::{RankedEntry, Score, compare, compare_with, score};
pub use results::SearchResults;
