//! Search results types.

use crate::matcher::MatchResult;
use crate::ranker::RankedEntry;
use fuzzy_completer_core::types::Candidate;

/// Ranked results of the current query, best first.
///
/// Borrows from the SearchEngine, so it can't outlive the next
/// `set_query` or `set_candidates` call.
#[derive(Debug, Clone, Copy)]
pub struct SearchResults<'a> {
    pub(crate) entries: &'a [RankedEntry],
    pub(crate) candidates: &'a [Candidate],
    pub(crate) generation: u64,
}

impl<'a> SearchResults<'a> {
    pub fn iter(&self) -> std::slice::Iter<'a, RankedEntry> {
        self.entries.iter()
    }

    /// Iterates over matched candidates paired with their match positions.
    pub fn hits(&self) -> impl Iterator<Item = (&'a Candidate, &'a MatchResult)> + use<'a> {
        let candidates = self.candidates;
        self.entries
            .iter()
            .map(move |entry| (&candidates[entry.id.index()], &entry.matched))
    }

    pub fn as_slice(&self) -> &'a [RankedEntry] {
        self.entries
    }

    pub fn get(&self, rank: usize) -> Option<&'a RankedEntry> {
        self.entries.get(rank)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Generation of the engine state these results were computed for.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<'a> IntoIterator for SearchResults<'a> {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
