//! Core types for minisearch
//!
//! This crate defines the data model shared by the engine, the executor and
//! the CLI:
//! - `types`: LineRecord, FileStat, search results and build reports
//! - `limits`: IndexLimits and the default bounds
//! - `error`: Error taxonomy and the crate-wide Result alias
//!
//! It performs no I/O.

#![warn(missing_docs)]

pub mod error;
pub mod limits;
pub mod types;

pub use error::{Error, Result};
pub use limits::{
    IndexLimits, DEFAULT_FOLDER, DEFAULT_MAX_FILE_NAME_BYTES, DEFAULT_MAX_LINE_BYTES,
    DEFAULT_MAX_QUERY_WORDS,
};
pub use types::{
    BuildReport, FileStat, IndexSummary, LineMatch, LineRecord, MultiWordSearchResult,
    PhraseSearchResult, SkipReason, SkippedFile, WordSearchResult,
};
