//! Terminal rendering of ranked matches.

use fuzzy_completer_core::types::HighlightStyle;
use fuzzy_completer_search::{MatchResult, SearchResults};
use serde_json::{Value, json};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Marks every run of matched characters in `text`.
pub(crate) fn highlight(text: &str, matched: &MatchResult, style: HighlightStyle) -> String {
    let (open, close) = match style {
        HighlightStyle::Bold => (BOLD, RESET),
        HighlightStyle::Brackets => ("[", "]"),
        HighlightStyle::Plain => return text.to_string(),
    };

    let mut out = String::with_capacity(text.len() + matched.len() * (open.len() + close.len()));
    let mut runs = matched.runs().peekable();
    for (index, c) in text.chars().enumerate() {
        if runs.peek().is_some_and(|run| run.start == index) {
            out.push_str(open);
        }
        out.push(c);
        if runs.peek().is_some_and(|run| run.end == index + 1) {
            out.push_str(close);
            runs.next();
        }
    }
    out
}

/// One line per result, best first.
pub(crate) fn lines(results: &SearchResults<'_>, style: HighlightStyle) -> Vec<String> {
    results
        .hits()
        .map(|(candidate, matched)| highlight(candidate.as_str(), matched, style))
        .collect()
}

pub(crate) fn to_json(query: &str, results: &SearchResults<'_>) -> Value {
    let hits: Vec<Value> = results
        .iter()
        .zip(results.hits())
        .map(|(entry, (candidate, matched))| {
            json!({
                "id": entry.id,
                "text": candidate.as_str(),
                "positions": matched,
                "longest_run": entry.score.longest_run,
                "first_match_offset": entry.score.first_match_offset,
            })
        })
        .collect();

    json!({
        "query": query,
        "generation": results.generation(),
        "results": hits,
    })
}
