//! Ordered-subsequence matching.
//!
//! A query matches a candidate when every query character appears in the
//! candidate in the same relative order. Matching is greedy: each query
//! character takes the leftmost candidate character still available. This
//! finds *a* valid assignment of positions, not necessarily the most
//! contiguous one; ranking is defined over whatever positions this produces.
//!
//! Positions count Unicode scalar values (`char`s), not bytes.

use crate::config::{CaseMatching, SearchConfig};
use nucleo::chars;
use serde::Serialize;
use std::iter::FusedIterator;
use std::ops::Range;

/// Candidate positions consumed by a successful match, strictly increasing,
/// one per query character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MatchResult {
    positions: Vec<usize>,
}

impl MatchResult {
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True for the match of an empty query.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn first(&self) -> Option<usize> {
        self.positions.first().copied()
    }

    pub fn contains(&self, position: usize) -> bool {
        self.positions.binary_search(&position).is_ok()
    }

    /// Maximal ranges of consecutive matched positions, in order.
    pub fn runs(&self) -> Runs<'_> {
        Runs {
            positions: &self.positions,
        }
    }

    pub fn into_positions(self) -> Vec<usize> {
        self.positions
    }
}

/// Iterator over the contiguous runs of a [`MatchResult`].
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    positions: &'a [usize],
}

impl Iterator for Runs<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let (&start, rest) = self.positions.split_first()?;
        let mut end = start + 1;
        let mut taken = 1;
        for &position in rest {
            if position != end {
                break;
            }
            end += 1;
            taken += 1;
        }
        self.positions = &self.positions[taken..];
        Some(start..end)
    }
}

impl FusedIterator for Runs<'_> {}

/// Matches `query` against `text` case-insensitively.
///
/// Returns `None` when `query` is not an ordered subsequence of `text`. An
/// empty query matches every text with an empty result.
pub fn fuzzy_match(query: &str, text: &str) -> Option<MatchResult> {
    Matcher::default().fuzzy_match(query, text)
}

/// Prepares queries and candidate text according to the configured case and
/// normalization rules, then runs the greedy scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    case_matching: CaseMatching,
    normalize: bool,
}

impl Matcher {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            case_matching: config.case_matching,
            normalize: config.unicode_normalization,
        }
    }

    pub fn fuzzy_match(&self, query: &str, text: &str) -> Option<MatchResult> {
        let needle = self.needle(query);
        let haystack = self.haystack(text);
        needle.find_in(&haystack)
    }

    pub(crate) fn needle(&self, query: &str) -> Needle {
        let normalized: Vec<char> = query.chars().map(|c| self.normalized(c)).collect();
        let ignore_case = match self.case_matching {
            CaseMatching::Insensitive => true,
            CaseMatching::Sensitive => false,
            CaseMatching::Smart => !normalized.iter().any(|c| c.is_uppercase()),
        };
        let chars = if ignore_case {
            normalized.into_iter().map(chars::to_lower_case).collect()
        } else {
            normalized
        };
        Needle { chars, ignore_case }
    }

    pub(crate) fn haystack(&self, text: &str) -> Haystack {
        let exact: Vec<char> = text.chars().map(|c| self.normalized(c)).collect();
        let folded = exact.iter().copied().map(chars::to_lower_case).collect();
        Haystack { exact, folded }
    }

    fn normalized(&self, c: char) -> char {
        if self.normalize {
            chars::normalize(c)
        } else {
            c
        }
    }
}

/// A query prepared for scanning. Folded once per query change.
#[derive(Debug, Clone, Default)]
pub(crate) struct Needle {
    chars: Vec<char>,
    ignore_case: bool,
}

impl Needle {
    pub(crate) fn find_in(&self, haystack: &Haystack) -> Option<MatchResult> {
        match_chars(&self.chars, haystack.chars(self.ignore_case))
    }
}

/// Candidate text prepared for scanning. Built once when candidates load.
#[derive(Debug, Clone)]
pub(crate) struct Haystack {
    exact: Vec<char>,
    folded: Vec<char>,
}

impl Haystack {
    fn chars(&self, ignore_case: bool) -> &[char] {
        if ignore_case { &self.folded } else { &self.exact }
    }
}

/// Single left-to-right scan with a cursor into `needle`.
fn match_chars(needle: &[char], haystack: &[char]) -> Option<MatchResult> {
    if needle.is_empty() {
        return Some(MatchResult::default());
    }

    let mut positions = Vec::with_capacity(needle.len());
    for (position, c) in haystack.iter().enumerate() {
        if *c == needle[positions.len()] {
            positions.push(position);
            if positions.len() == needle.len() {
                return Some(MatchResult { positions });
            }
        }
    }

    None
}

#[cfg(test)]
pub(crate) fn match_result(positions: Vec<usize>) -> MatchResult {
    MatchResult { positions }
}
