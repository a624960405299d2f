//! Results returned by a [`Session`](crate::Session).

use minisearch_core::{
    BuildReport, FileStat, IndexSummary, MultiWordSearchResult, PhraseSearchResult,
    WordSearchResult,
};
use serde::{Deserialize, Serialize};

/// Output of a successfully executed [`Command`](crate::Command)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "output", content = "data", rename_all = "snake_case")]
pub enum Output {
    /// Diagnostics of a completed build
    Built(BuildReport),
    /// Result of a word search
    WordMatches(WordSearchResult),
    /// Result of a phrase search
    PhraseMatches(PhraseSearchResult),
    /// Result of a multi-word search
    MultiWordMatches(MultiWordSearchResult),
    /// File and line counts
    Summary(IndexSummary),
    /// Per-file statistics in processing order
    FileStats(Vec<FileStat>),
    /// Total words in the corpus
    TotalWords(usize),
}
