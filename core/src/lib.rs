//! Shared types for the fuzzy completer: candidates and file configuration.

pub mod types;
