use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a candidate: its zero-based position in the source list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct CandidateId(usize);

impl CandidateId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A display string offered for completion.
///
/// Candidates are immutable once loaded. A candidate set is replaced as a
/// whole, never edited in place, so the id always matches the index the
/// candidate had in the list it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    id: CandidateId,
    text: String,
}

impl Candidate {
    pub fn new(id: CandidateId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    /// Builds a candidate list, assigning ids in iteration order.
    pub fn enumerate<I, S>(texts: I) -> Vec<Candidate>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| Candidate::new(CandidateId::new(index), text))
            .collect()
    }

    pub fn id(&self) -> CandidateId {
        self.id
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in Unicode scalar values, the unit match positions are counted in.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl AsRef<str> for Candidate {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
