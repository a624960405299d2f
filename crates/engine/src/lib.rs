//! Line corpus engine for minisearch
//!
//! Builds an in-memory index of the `.txt` files in one folder and answers
//! word, phrase and multi-word queries against it.
//!
//! ```text
//! caller ──build──▶ CorpusBuilder ──▶ Corpus ──▶ Searcher ──▶ results
//! ```
//!
//! Everything is synchronous and single-threaded. A Corpus is immutable
//! once built; rebuilding produces a new value that replaces the old one.

#![warn(missing_docs)]

pub mod corpus;
pub mod search;

pub use corpus::{build, BuildOptions, Corpus, CorpusBuilder};
pub use search::Searcher;
