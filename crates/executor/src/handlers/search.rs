//! Search command handlers.
//!
//! Each handler receives a `Searcher`, which only exists for a built,
//! non-empty corpus.

use minisearch_engine::Searcher;

use crate::{Output, Result};

/// Handle SearchWord command.
pub fn search_word(searcher: &Searcher<'_>, query: &str) -> Result<Output> {
    Ok(Output::WordMatches(searcher.search_word(query)?))
}

/// Handle SearchPhrase command.
pub fn search_phrase(searcher: &Searcher<'_>, phrase: &str) -> Result<Output> {
    Ok(Output::PhraseMatches(searcher.search_phrase(phrase)?))
}

/// Handle SearchWords command.
pub fn search_words(searcher: &Searcher<'_>, query: &str) -> Result<Output> {
    Ok(Output::MultiWordMatches(searcher.search_multiple_words(query)?))
}
