//! Search module for word, phrase and multi-word queries
//!
//! This module contains:
//! - `tokenizer`: delimiter-based tokenization and ASCII case folding
//! - `searcher`: the three matching algorithms over a built Corpus

mod searcher;
pub mod tokenizer;

pub use searcher::Searcher;
pub use tokenizer::{count_tokens, fold_case, tokens, Tokens};
