//! Commands accepted by a [`Session`](crate::Session).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One operation against the session's index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Discard the current index and build a new one from `folder`
    Build {
        /// Folder whose `.txt` files are indexed
        folder: PathBuf,
    },
    /// Single-word search
    SearchWord {
        /// Word to look for
        query: String,
    },
    /// Exact phrase search
    SearchPhrase {
        /// Phrase to look for
        phrase: String,
    },
    /// Whitespace-separated batch of word searches
    SearchWords {
        /// Raw query; split on whitespace
        query: String,
    },
    /// File and line counts
    Summary,
    /// Per-file line and word counts
    FileStats,
    /// Total words in the corpus
    TotalWords,
}

impl Command {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Build { .. } => "Build",
            Command::SearchWord { .. } => "SearchWord",
            Command::SearchPhrase { .. } => "SearchPhrase",
            Command::SearchWords { .. } => "SearchWords",
            Command::Summary => "Summary",
            Command::FileStats => "FileStats",
            Command::TotalWords => "TotalWords",
        }
    }

    /// True for the commands that need a built index
    pub fn requires_index(&self) -> bool {
        !matches!(self, Command::Build { .. })
    }
}
