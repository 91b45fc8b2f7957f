//! Match scoring and result ordering.

use crate::config::Tiebreak;
use crate::matcher::MatchResult;
use fuzzy_completer_core::types::{Candidate, CandidateId};
use serde::Serialize;
use std::cmp::Ordering;

/// Scores derived from a [`MatchResult`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Score {
    /// Length of the longest block of consecutive matched positions.
    pub longest_run: usize,
    /// First matched position; 0 for the empty query.
    pub first_match_offset: usize,
}

impl Score {
    /// Orders better scores first: longer run, then earlier first match.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .longest_run
            .cmp(&self.longest_run)
            .then_with(|| self.first_match_offset.cmp(&other.first_match_offset))
    }
}

/// Computes both scores in a single pass over the positions.
pub fn score(matched: &MatchResult) -> Score {
    let positions = matched.positions();
    let Some(&first) = positions.first() else {
        return Score::default();
    };

    let mut best = 1;
    let mut current = 1;
    for pair in positions.windows(2) {
        if pair[1] == pair[0] + 1 {
            current += 1;
            best = best.max(current);
        } else {
            current = 1;
        }
    }

    Score {
        longest_run: best,
        first_match_offset: first,
    }
}

/// A matching candidate with its positions and scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub id: CandidateId,
    pub matched: MatchResult,
    pub score: Score,
}

impl RankedEntry {
    pub fn new(id: CandidateId, matched: MatchResult) -> Self {
        let score = score(&matched);
        Self { id, matched, score }
    }
}

/// Full ordering: scores first, then source order.
pub fn compare(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    compare_with(a, b, |a, b| a.id.cmp(&b.id))
}

/// Orders by scores and falls back to `secondary` when both scores tie.
pub fn compare_with<F>(a: &RankedEntry, b: &RankedEntry, secondary: F) -> Ordering
where
    F: FnOnce(&RankedEntry, &RankedEntry) -> Ordering,
{
    a.score
        .rank_cmp(&b.score)
        .then_with(|| secondary(a, b))
}

/// Stable-sorts `entries` best first.
///
/// `candidates` must be indexed by [`CandidateId`]; it is only read for
/// [`Tiebreak::Lexical`].
pub(crate) fn sort(entries: &mut [RankedEntry], tiebreak: Tiebreak, candidates: &[Candidate]) {
    match tiebreak {
        Tiebreak::InputOrder => entries.sort_by(compare),
        Tiebreak::Lexical => {
            let text = |entry: &RankedEntry| {
                candidates
                    .get(entry.id.index())
                    .map(Candidate::as_str)
                    .unwrap_or_default()
            };
            entries.sort_by(|a, b| {
                compare_with(a, b, |a, b| {
                    text(a).cmp(text(b)).then_with(|| a.id.cmp(&b.id))
                })
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::match_result;

    fn entry(id: usize, positions: Vec<usize>) -> RankedEntry {
        RankedEntry::new(CandidateId::new(id), match_result(positions))
    }

    #[test]
    fn test_score_empty() {
        assert_eq!(
            score(&match_result(vec![])),
            Score {
                longest_run: 0,
                first_match_offset: 0
            }
        );
    }

    #[test]
    fn test_score_single_position() {
        let s = score(&match_result(vec![4]));

        assert_eq!(s.longest_run, 1);
        assert_eq!(s.first_match_offset, 4);
    }

    #[test]
    fn test_score_longest_run_in_middle() {
        let s = score(&match_result(vec![0, 2, 3, 4, 7, 8]));

        assert_eq!(s.longest_run, 3);
        assert_eq!(s.first_match_offset, 0);
    }

    #[test]
    fn test_score_run_resets_on_gap() {
        let s = score(&match_result(vec![1, 2, 5, 6]));

        assert_eq!(s.longest_run, 2);
    }

    #[test]
    fn test_compare_longer_run_first() {
        let tight = entry(1, vec![0, 1]);
        let loose = entry(0, vec![0, 2]);

        assert_eq!(compare(&tight, &loose), Ordering::Less);
        assert_eq!(compare(&loose, &tight), Ordering::Greater);
    }

    #[test]
    fn test_compare_earlier_offset_breaks_run_tie() {
        let early = entry(1, vec![1, 2]);
        let late = entry(0, vec![3, 4]);

        assert_eq!(compare(&early, &late), Ordering::Less);
    }

    #[test]
    fn test_compare_falls_back_to_input_order() {
        let a = entry(0, vec![1, 2]);
        let b = entry(1, vec![1, 2]);

        assert_eq!(compare(&a, &b), Ordering::Less);
        assert_eq!(compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_compare_with_uses_secondary_only_on_tie() {
        let a = entry(0, vec![0, 1]);
        let b = entry(1, vec![5]);

        assert_eq!(compare_with(&a, &b, |_, _| Ordering::Greater), Ordering::Less);

        let c = entry(2, vec![0, 1]);
        assert_eq!(compare_with(&a, &c, |_, _| Ordering::Greater), Ordering::Greater);
    }

    #[test]
    fn test_sort_lexical_tiebreak() {
        let candidates = Candidate::enumerate(["beta", "alpha", "alpha"]);
        let mut entries = vec![entry(0, vec![0]), entry(1, vec![0]), entry(2, vec![0])];

        sort(&mut entries, Tiebreak::Lexical, &candidates);

        let ids: Vec<usize> = entries.iter().map(|e| e.id.index()).collect();
        assert_eq!(ids, vec![1, 2, 0]);
    }

    #[test]
    fn test_sort_input_order_tiebreak() {
        let candidates = Candidate::enumerate(["beta", "alpha"]);
        let mut entries = vec![entry(1, vec![0]), entry(0, vec![0])];

        sort(&mut entries, Tiebreak::InputOrder, &candidates);

        let ids: Vec<usize> = entries.iter().map(|e| e.id.index()).collect();
        assert_eq!(ids, vec![0, 1]);
    }
}
