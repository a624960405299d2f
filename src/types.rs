//! Public types for the minisearch API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Corpus records and statistics
pub use minisearch_core::{FileStat, IndexSummary, LineRecord};

// Query results
pub use minisearch_core::{LineMatch, MultiWordSearchResult, PhraseSearchResult, WordSearchResult};

// Build diagnostics
pub use minisearch_core::{BuildReport, SkipReason, SkippedFile};

// Configuration
pub use minisearch_core::{
    IndexLimits, DEFAULT_FOLDER, DEFAULT_MAX_FILE_NAME_BYTES, DEFAULT_MAX_LINE_BYTES,
    DEFAULT_MAX_QUERY_WORDS,
};
pub use minisearch_engine::BuildOptions;
