pub use fuzzy_completer_core::types::{CaseMatching, Tiebreak};
use fuzzy_completer_core::types::SearchSettings;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub case_matching: CaseMatching,
    /// Strip diacritics before comparing (`é` matches `e`).
    pub unicode_normalization: bool,
    pub result_limit: Option<usize>,
    pub tiebreak: Tiebreak,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_matching: CaseMatching::Insensitive,
            unicode_normalization: false,
            result_limit: None,
            tiebreak: Tiebreak::InputOrder,
        }
    }
}

impl From<&SearchSettings> for SearchConfig {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            case_matching: settings.case_matching,
            unicode_normalization: settings.unicode_normalization,
            // A zero limit is rejected by validation; treat it as unlimited here.
            result_limit: settings.result_limit.filter(|limit| *limit > 0),
            tiebreak: settings.tiebreak,
        }
    }
}
