use crate::matcher::{Haystack, Matcher, Needle};
use crate::ranker::RankedEntry;
use fuzzy_completer_core::types::Candidate;

/// Loaded candidates with their scan-ready text.
///
/// `haystacks[i]` is always the prepared form of `candidates[i]`, and
/// `candidates[i].id().index() == i`.
pub(crate) struct CandidateIndex {
    candidates: Vec<Candidate>,
    haystacks: Vec<Haystack>,
}

impl CandidateIndex {
    pub(crate) fn new(texts: Vec<String>, matcher: &Matcher) -> Self {
        let haystacks = texts.iter().map(|text| matcher.haystack(text)).collect();
        let candidates = Candidate::enumerate(texts);

        Self {
            candidates,
            haystacks,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.candidates.len()
    }

    pub(crate) fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Runs the needle over every candidate, in source order, keeping matches.
    pub(crate) fn match_all(&self, needle: &Needle) -> Vec<RankedEntry> {
        self.candidates
            .iter()
            .zip(&self.haystacks)
            .filter_map(|(candidate, haystack)| {
                needle
                    .find_in(haystack)
                    .map(|matched| RankedEntry::new(candidate.id(), matched))
            })
            .collect()
    }
}
