//! Data model for the line corpus and its query results

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

// ============================================================================
// Corpus records
// ============================================================================

/// One indexed line
///
/// Immutable once created. The text has its trailing CR/LF stripped and is
/// bounded by `IndexLimits::max_line_bytes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    /// Name of the file the line came from (not the full path)
    pub file_name: String,
    /// 1-based line number within that file
    pub line_number: usize,
    /// Line text without its line terminator
    pub text: String,
}

impl LineRecord {
    /// Create a new line record
    pub fn new(file_name: impl Into<String>, line_number: usize, text: impl Into<String>) -> Self {
        LineRecord {
            file_name: file_name.into(),
            line_number,
            text: text.into(),
        }
    }
}

/// Per-file line and word counts
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileStat {
    /// File name, unique within a corpus
    pub file_name: String,
    /// Number of LineRecords produced from the file
    pub lines: usize,
    /// Sum of token counts over those lines
    pub words: usize,
}

impl FileStat {
    /// Create a new file statistic
    pub fn new(file_name: impl Into<String>, lines: usize, words: usize) -> Self {
        FileStat {
            file_name: file_name.into(),
            lines,
            words,
        }
    }
}

/// File and line counts for a built corpus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSummary {
    /// Indexed files
    pub files: usize,
    /// Indexed lines across all files
    pub lines: usize,
}

// ============================================================================
// Query results
// ============================================================================

/// A line returned by a search, carrying the original (unfolded) text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineMatch {
    /// Originating file name
    pub file_name: String,
    /// 1-based line number
    pub line_number: usize,
    /// Original line text
    pub text: String,
}

impl From<&LineRecord> for LineMatch {
    fn from(record: &LineRecord) -> Self {
        LineMatch {
            file_name: record.file_name.clone(),
            line_number: record.line_number,
            text: record.text.clone(),
        }
    }
}

impl fmt::Display for LineMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<20} (Line {:>3}): {}",
            self.file_name, self.line_number, self.text
        )
    }
}

/// Result of a single-word search
///
/// `matches` holds each matching line once; `total_occurrences` counts every
/// matching token, including repeats within a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSearchResult {
    /// The query as entered
    pub query: String,
    /// Matching lines in corpus order
    pub matches: Vec<LineMatch>,
    /// Token matches across all lines
    pub total_occurrences: usize,
}

impl WordSearchResult {
    /// True if at least one token matched
    pub fn is_found(&self) -> bool {
        self.total_occurrences > 0
    }

    /// Number of distinct matching lines
    pub fn matched_lines(&self) -> usize {
        self.matches.len()
    }
}

/// Result of a phrase search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseSearchResult {
    /// The phrase as entered
    pub phrase: String,
    /// Matching lines in corpus order
    pub matches: Vec<LineMatch>,
    /// Lines containing the phrase (a line counts once)
    pub matched_line_count: usize,
}

impl PhraseSearchResult {
    /// True if at least one line contained the phrase
    pub fn is_found(&self) -> bool {
        self.matched_line_count > 0
    }
}

/// Result of a multi-word search: one word result per query word, in query order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiWordSearchResult {
    /// Per-word results, duplicates included
    pub results: Vec<WordSearchResult>,
    /// Words dropped because the query exceeded `max_query_words`
    pub ignored_words: usize,
}

impl MultiWordSearchResult {
    /// Number of words actually searched
    pub fn word_count(&self) -> usize {
        self.results.len()
    }

    /// True if words beyond the cap were dropped
    pub fn was_truncated(&self) -> bool {
        self.ignored_words > 0
    }
}

// ============================================================================
// Build report
// ============================================================================

/// Why an eligible `.txt` entry was not indexed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Opening or reading the file failed
    Unreadable(String),
    /// The file name exceeds `max_file_name_bytes`
    NameTooLong {
        /// Name length in bytes
        len: usize,
        /// Configured maximum
        max: usize,
    },
    /// The entry is a directory or another non-file object
    NotAFile,
    /// Another file with the same (lossily decoded) name was already indexed
    DuplicateName,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unreadable(reason) => write!(f, "could not open file: {}", reason),
            SkipReason::NameTooLong { len, max } => {
                write!(f, "file name is {} bytes, limit is {}", len, max)
            }
            SkipReason::NotAFile => write!(f, "not a regular file"),
            SkipReason::DuplicateName => write!(f, "a file with this name is already indexed"),
        }
    }
}

/// A `.txt` entry the builder skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    /// Entry name
    pub file_name: String,
    /// Why it was skipped
    pub reason: SkipReason,
}

/// Diagnostics from one build pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// Folder that was scanned
    pub folder: PathBuf,
    /// Statistics of indexed files, in processing order
    pub files: Vec<FileStat>,
    /// Eligible entries that could not be indexed
    pub skipped: Vec<SkippedFile>,
    /// Lines cut to `max_line_bytes`
    pub truncated_lines: usize,
    /// Lines indexed across all files
    pub total_lines: usize,
    /// Words indexed across all files
    pub total_words: usize,
}

impl BuildReport {
    /// Number of files indexed
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// True when no `.txt` file was indexed. Not an error.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
