use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// User-facing completer configuration, persisted as completer.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompleterConfig {
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl CompleterConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> PathBuf {
        dir.join("completer.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.search.result_limit == Some(0) {
            errors.push("result_limit must be at least 1 (omit it for no limit)".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            search: SearchSettings {
                result_limit: match self.search.result_limit {
                    Some(0) => defaults.search.result_limit,
                    limit => limit,
                },
                ..self.search.clone()
            },
            display: self.display.clone(),
        }
    }
}

/// Matching and ranking settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default)]
    pub case_matching: CaseMatching,
    #[serde(default)]
    pub unicode_normalization: bool,
    /// Maximum number of ranked results kept. `None` keeps every match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_limit: Option<usize>,
    #[serde(default)]
    pub tiebreak: Tiebreak,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            case_matching: CaseMatching::default(),
            unicode_normalization: false,
            result_limit: None,
            tiebreak: Tiebreak::default(),
        }
    }
}

/// Case matching behavior for search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMatching {
    /// Always case insensitive.
    #[default]
    Insensitive,
    /// Always case sensitive.
    Sensitive,
    /// Case-insensitive unless query contains uppercase.
    Smart,
}

impl fmt::Display for CaseMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseMatching::Insensitive => write!(f, "insensitive"),
            CaseMatching::Sensitive => write!(f, "sensitive"),
            CaseMatching::Smart => write!(f, "smart"),
        }
    }
}

/// Order applied to results whose scores are identical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tiebreak {
    /// Keep the order of the candidate source.
    #[default]
    #[serde(rename = "input")]
    InputOrder,
    /// Compare candidate text, then fall back to source order.
    Lexical,
}

/// Settings for front-ends rendering the results.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub highlight: HighlightStyle,
}

/// How matched characters are distinguished when printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightStyle {
    #[default]
    Bold,
    Brackets,
    Plain,
}

impl fmt::Display for HighlightStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HighlightStyle::Bold => write!(f, "bold"),
            HighlightStyle::Brackets => write!(f, "brackets"),
            HighlightStyle::Plain => write!(f, "plain"),
        }
    }
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
