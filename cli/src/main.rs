mod render;
mod source;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use fuzzy_completer_core::types::{CaseMatching, CompleterConfig, HighlightStyle};
use fuzzy_completer_search::{SearchConfig, SearchEngine};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fuzzy-complete")]
#[command(about = "Rank candidates by fuzzy subsequence match", long_about = None)]
struct Cli {
    /// Query to match against every candidate
    query: String,

    /// Candidate file, one per line ("-" reads stdin)
    #[arg(short, long)]
    candidates: Option<PathBuf>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum results
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Case matching mode
    #[arg(long, value_enum)]
    case: Option<CaseArg>,

    /// How matched characters are marked
    #[arg(long, value_enum)]
    highlight: Option<HighlightArg>,

    /// Replay the query one keystroke at a time
    #[arg(long)]
    incremental: bool,

    /// Print results as JSON lines
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CaseArg {
    Insensitive,
    Sensitive,
    Smart,
}

impl From<CaseArg> for CaseMatching {
    fn from(arg: CaseArg) -> Self {
        match arg {
            CaseArg::Insensitive => CaseMatching::Insensitive,
            CaseArg::Sensitive => CaseMatching::Sensitive,
            CaseArg::Smart => CaseMatching::Smart,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum HighlightArg {
    Bold,
    Brackets,
    Plain,
}

impl From<HighlightArg> for HighlightStyle {
    fn from(arg: HighlightArg) -> Self {
        match arg {
            HighlightArg::Bold => HighlightStyle::Bold,
            HighlightArg::Brackets => HighlightStyle::Brackets,
            HighlightArg::Plain => HighlightStyle::Plain,
        }
    }
}

fn load_config(cli: &Cli) -> Result<CompleterConfig> {
    let mut config = match &cli.config {
        Some(path) => CompleterConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CompleterConfig::default(),
    };

    for problem in config.validate() {
        tracing::warn!("invalid config value replaced by default: {problem}");
    }
    config = config.with_defaults_for_invalid();

    if let Some(limit) = cli.limit {
        config.search.result_limit = Some(limit);
    }
    if let Some(case) = cli.case {
        config.search.case_matching = case.into();
    }
    if let Some(highlight) = cli.highlight {
        config.display.highlight = highlight.into();
    }

    Ok(config)
}

/// Every prefix of `query` ending on a char boundary, shortest first.
fn keystrokes(query: &str) -> Vec<&str> {
    query
        .char_indices()
        .map(|(start, c)| &query[..start + c.len_utf8()])
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let candidates = source::load(cli.candidates.as_deref())?;
    tracing::debug!(count = candidates.len(), "loaded candidates");

    let mut engine = SearchEngine::new(candidates, SearchConfig::from(&config.search));

    let queries = if cli.incremental {
        keystrokes(&cli.query)
    } else {
        vec![cli.query.as_str()]
    };

    let mut out = io::stdout().lock();
    for query in queries {
        engine.set_query(query);
        let results = engine.results();

        if cli.json {
            serde_json::to_writer(&mut out, &render::to_json(query, &results))?;
            writeln!(out)?;
            continue;
        }

        if cli.incremental {
            writeln!(out, "> {query} ({} matches)", results.len())?;
        }
        for line in render::lines(&results, config.display.highlight) {
            writeln!(out, "{line}")?;
        }
    }

    Ok(())
}
