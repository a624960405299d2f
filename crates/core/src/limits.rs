//! Size bounds applied while indexing and querying.
//!
//! There is no configuration file. Limits are set by library callers or by
//! CLI flags, and default to the values below.

use serde::{Deserialize, Serialize};

/// Folder indexed when the caller supplies none.
pub const DEFAULT_FOLDER: &str = "data";

/// Longest stored line, in bytes. Longer lines are truncated and reported.
pub const DEFAULT_MAX_LINE_BYTES: usize = 4096;

/// Longest accepted file name, in bytes. Longer names are skipped.
pub const DEFAULT_MAX_FILE_NAME_BYTES: usize = 260;

/// Most words honoured by a single multi-word query.
pub const DEFAULT_MAX_QUERY_WORDS: usize = 50;

/// Bounds applied by the corpus builder and the multi-word search.
///
/// ```
/// use minisearch_core::IndexLimits;
///
/// let limits = IndexLimits::default().with_max_query_words(10);
/// assert_eq!(limits.max_query_words, 10);
/// assert_eq!(limits.max_line_bytes, 4096);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexLimits {
    /// Maximum stored bytes per line
    pub max_line_bytes: usize,
    /// Maximum bytes in an indexed file name
    pub max_file_name_bytes: usize,
    /// Maximum words searched by one multi-word query
    pub max_query_words: usize,
}

impl IndexLimits {
    /// Limits with every bound at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum stored line length. Zero is clamped to one byte.
    pub fn with_max_line_bytes(mut self, bytes: usize) -> Self {
        self.max_line_bytes = bytes.max(1);
        self
    }

    /// Set the maximum file name length. Zero is clamped to one byte.
    pub fn with_max_file_name_bytes(mut self, bytes: usize) -> Self {
        self.max_file_name_bytes = bytes.max(1);
        self
    }

    /// Set the multi-word cap. Zero is clamped to one word.
    pub fn with_max_query_words(mut self, words: usize) -> Self {
        self.max_query_words = words.max(1);
        self
    }
}

impl Default for IndexLimits {
    fn default() -> Self {
        Self {
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
            max_file_name_bytes: DEFAULT_MAX_FILE_NAME_BYTES,
            max_query_words: DEFAULT_MAX_QUERY_WORDS,
        }
    }
}
