//! Typed convenience API over [`Session::execute`].
//!
//! # Example
//!
//! ```no_run
//! use minisearch_executor::Session;
//!
//! let mut session = Session::default();
//! let report = session.build("data")?;
//! println!("indexed {} file(s)", report.file_count());
//!
//! let hits = session.search_word("cat")?;
//! for m in &hits.matches {
//!     println!("{}", m);
//! }
//! # Ok::<(), minisearch_core::Error>(())
//! ```

use std::path::Path;

use minisearch_core::{
    BuildReport, Error, FileStat, IndexSummary, MultiWordSearchResult, PhraseSearchResult, Result,
    WordSearchResult,
};

use crate::{Command, Output, Session};

fn unexpected(command: &str) -> Error {
    Error::Internal {
        reason: format!("Unexpected output for {}", command),
    }
}

impl Session {
    // =========================================================================
    // Index
    // =========================================================================

    /// Build (or rebuild) the index from `folder`.
    pub fn build(&mut self, folder: impl AsRef<Path>) -> Result<BuildReport> {
        match self.execute(Command::Build {
            folder: folder.as_ref().to_path_buf(),
        })? {
            Output::Built(report) => Ok(report),
            _ => Err(unexpected("Build")),
        }
    }

    /// File and line counts of the current index.
    pub fn summary(&mut self) -> Result<IndexSummary> {
        match self.execute(Command::Summary)? {
            Output::Summary(summary) => Ok(summary),
            _ => Err(unexpected("Summary")),
        }
    }

    /// Per-file statistics of the current index.
    pub fn file_stats(&mut self) -> Result<Vec<FileStat>> {
        match self.execute(Command::FileStats)? {
            Output::FileStats(stats) => Ok(stats),
            _ => Err(unexpected("FileStats")),
        }
    }

    /// Total words in the current index.
    pub fn total_words(&mut self) -> Result<usize> {
        match self.execute(Command::TotalWords)? {
            Output::TotalWords(total) => Ok(total),
            _ => Err(unexpected("TotalWords")),
        }
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Single-word search.
    pub fn search_word(&mut self, query: &str) -> Result<WordSearchResult> {
        match self.execute(Command::SearchWord {
            query: query.to_string(),
        })? {
            Output::WordMatches(result) => Ok(result),
            _ => Err(unexpected("SearchWord")),
        }
    }

    /// Exact phrase search.
    pub fn search_phrase(&mut self, phrase: &str) -> Result<PhraseSearchResult> {
        match self.execute(Command::SearchPhrase {
            phrase: phrase.to_string(),
        })? {
            Output::PhraseMatches(result) => Ok(result),
            _ => Err(unexpected("SearchPhrase")),
        }
    }

    /// Multi-word search.
    pub fn search_multiple_words(&mut self, query: &str) -> Result<MultiWordSearchResult> {
        match self.execute(Command::SearchWords {
            query: query.to_string(),
        })? {
            Output::MultiWordMatches(result) => Ok(result),
            _ => Err(unexpected("SearchWords")),
        }
    }
}
