//! Candidate loading for the command line.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Used when no candidate file is given.
pub(crate) const DEMO_CANDIDATES: [&str; 20] = [
    "0123", "1234", "2345", "3456", "4567", "5678", "6789", "7890", "8901", "9012", "0246",
    "2468", "4680", "6802", "8024", "1357", "3579", "5791", "7913", "9135",
];

/// Loads candidates from `path`, stdin for `-`, or the demo list for `None`.
pub(crate) fn load(path: Option<&Path>) -> Result<Vec<String>> {
    let Some(path) = path else {
        return Ok(DEMO_CANDIDATES.iter().map(ToString::to_string).collect());
    };

    if path == Path::new("-") {
        return read_lines(io::stdin().lock()).context("failed to read candidates from stdin");
    }

    let file = File::open(path)
        .with_context(|| format!("failed to open candidate file {}", path.display()))?;
    read_lines(BufReader::new(file))
        .with_context(|| format!("failed to read candidate file {}", path.display()))
}

/// One candidate per line. Blank lines are skipped, line endings stripped.
fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut candidates = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if !line.is_empty() {
            candidates.push(line.to_string());
        }
    }
    Ok(candidates)
}
