mod completer;

pub use completer::{
    CaseMatching, CompleterConfig, ConfigError, DisplayConfig, HighlightStyle, SearchSettings,
    Tiebreak,
};
