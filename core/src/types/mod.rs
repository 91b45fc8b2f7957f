pub(crate) mod candidate;
pub use candidate::{Candidate, CandidateId};

pub(crate) mod config;
pub use config::{
    CaseMatching, CompleterConfig, ConfigError, DisplayConfig, HighlightStyle, SearchSettings,
    Tiebreak,
};
