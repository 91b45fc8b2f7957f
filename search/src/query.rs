//! Search query types.

/// Query type for search.
///
/// Only ordered-subsequence matching is supported. Queries are replaced
/// wholesale on every input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Fuzzy (subsequence) matching search.
    Fuzzy(String),
}

impl SearchQuery {
    pub fn as_str(&self) -> &str {
        let SearchQuery::Fuzzy(pattern) = self;
        pattern
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        SearchQuery::Fuzzy(String::new())
    }
}

impl From<&str> for SearchQuery {
    fn from(pattern: &str) -> Self {
        SearchQuery::Fuzzy(pattern.to_string())
    }
}

impl From<String> for SearchQuery {
    fn from(pattern: String) -> Self {
        SearchQuery::Fuzzy(pattern)
    }
}
