mod index;

use crate::config::SearchConfig;
use crate::matcher::{Matcher, Needle};
use crate::query::SearchQuery;
use crate::ranker::{self, RankedEntry};
use crate::results::SearchResults;
use fuzzy_completer_core::types::{Candidate, CandidateId};
use index::CandidateIndex;

/// Matches and ranks a candidate set against the current query.
///
/// Every `set_query` and `set_candidates` call re-evaluates the whole set
/// synchronously and caches the ranked result until the next call.
pub struct SearchEngine {
    index: CandidateIndex,
    matcher: Matcher,
    config: SearchConfig,
    query: SearchQuery,
    needle: Needle,
    ranked: Vec<RankedEntry>,
    generation: u64,
}

impl SearchEngine {
    /// Creates an engine over `candidates` with the empty query applied.
    pub fn new<I, S>(candidates: I, config: SearchConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let matcher = Matcher::new(&config);
        let texts = candidates.into_iter().map(Into::into).collect();

        let mut engine = Self {
            index: CandidateIndex::new(texts, &matcher),
            matcher,
            config,
            query: SearchQuery::default(),
            needle: Needle::default(),
            ranked: Vec::new(),
            generation: 0,
        };
        engine.refresh();
        engine
    }
}

/// Mutation operations.
impl SearchEngine {
    /// Replaces the active query and re-ranks every candidate.
    pub fn set_query(&mut self, query: impl Into<SearchQuery>) {
        let query = query.into();
        self.needle = self.matcher.needle(query.as_str());
        self.query = query;
        self.generation += 1;
        self.refresh();
    }

    /// Replaces the candidate set wholesale and re-ranks it against the
    /// current query.
    pub fn set_candidates<I, S>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let texts: Vec<String> = candidates.into_iter().map(Into::into).collect();
        tracing::trace!(count = texts.len(), "replacing candidate set");

        self.index = CandidateIndex::new(texts, &self.matcher);
        self.generation += 1;
        self.refresh();
    }

    fn refresh(&mut self) {
        let mut ranked = self.index.match_all(&self.needle);
        ranker::sort(&mut ranked, self.config.tiebreak, self.index.candidates());

        let matched = ranked.len();
        if let Some(limit) = self.config.result_limit {
            ranked.truncate(limit);
        }

        tracing::debug!(
            query = self.query.as_str(),
            generation = self.generation,
            matched,
            total = self.index.len(),
            "re-ranked candidates"
        );

        self.ranked = ranked;
    }
}

/// Search operations.
impl SearchEngine {
    pub fn results(&self) -> SearchResults<'_> {
        SearchResults {
            entries: &self.ranked,
            candidates: self.index.candidates(),
            generation: self.generation,
        }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Bumped by every `set_query` and `set_candidates` call.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Candidate lookup.
impl SearchEngine {
    pub fn candidates(&self) -> &[Candidate] {
        self.index.candidates()
    }

    pub fn candidate(&self, id: CandidateId) -> Option<&Candidate> {
        self.index.candidates().get(id.index())
    }
}
