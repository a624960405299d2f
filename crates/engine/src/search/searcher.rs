//! Word, phrase and multi-word search over a Corpus
//!
//! All operations are read-only full scans in corpus order.
//!
//! | Operation | Query handling | Line matching |
//! |-----------|----------------|---------------|
//! | word | fold | fold, tokenize, exact token equality |
//! | phrase | fold | fold, substring containment |
//! | multi-word | split on whitespace only, cap | word search per term |

use super::tokenizer::{fold_case, fold_case_into, tokens};
use crate::corpus::Corpus;
use minisearch_core::{
    Error, LineMatch, MultiWordSearchResult, PhraseSearchResult, Result, WordSearchResult,
    DEFAULT_MAX_QUERY_WORDS,
};
use tracing::debug;

/// Query-side whitespace. Punctuation does not split multi-word queries.
#[inline]
fn is_query_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Read-only search handle over a built corpus
///
/// Construction fails with `Error::NotIndexed` when the corpus holds no
/// files, so every search runs against a fully built index.
///
/// # Example
///
/// ```no_run
/// use minisearch_engine::{build, Searcher};
///
/// let (corpus, _) = build("data")?;
/// let searcher = Searcher::new(&corpus)?;
/// let result = searcher.search_word("cat")?;
/// println!("{} occurrences", result.total_occurrences);
/// # Ok::<(), minisearch_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Searcher<'a> {
    corpus: &'a Corpus,
    max_query_words: usize,
}

impl<'a> Searcher<'a> {
    /// Create a searcher with the default multi-word cap
    pub fn new(corpus: &'a Corpus) -> Result<Self> {
        Self::with_max_query_words(corpus, DEFAULT_MAX_QUERY_WORDS)
    }

    /// Create a searcher with a custom multi-word cap (at least one word)
    pub fn with_max_query_words(corpus: &'a Corpus, max_query_words: usize) -> Result<Self> {
        if corpus.is_empty() {
            return Err(Error::NotIndexed);
        }
        Ok(Searcher {
            corpus,
            max_query_words: max_query_words.max(1),
        })
    }

    /// The corpus being searched
    pub fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    /// Case-insensitive exact token search for a single word.
    ///
    /// Each matching line appears once; `total_occurrences` counts every
    /// matching token. A query containing delimiter characters can never
    /// equal a token and therefore finds nothing.
    pub fn search_word(&self, query: &str) -> Result<WordSearchResult> {
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }
        let result = self.scan_word(query);
        debug!(
            target: "minisearch::search",
            query,
            lines = result.matches.len(),
            occurrences = result.total_occurrences,
            "Word search"
        );
        Ok(result)
    }

    /// Case-insensitive substring search over whole lines.
    ///
    /// Punctuation and spacing in the phrase must match the line exactly,
    /// modulo case. A line containing the phrase twice counts once.
    pub fn search_phrase(&self, phrase: &str) -> Result<PhraseSearchResult> {
        if phrase.is_empty() {
            return Err(Error::EmptyPhrase);
        }

        let folded_phrase = fold_case(phrase);
        let mut folded_line = String::new();
        let mut matches = Vec::new();

        for record in self.corpus.lines() {
            fold_case_into(&record.text, &mut folded_line);
            if folded_line.contains(folded_phrase.as_str()) {
                matches.push(LineMatch::from(record));
            }
        }

        debug!(
            target: "minisearch::search",
            phrase,
            lines = matches.len(),
            "Phrase search"
        );
        Ok(PhraseSearchResult {
            phrase: phrase.to_string(),
            matched_line_count: matches.len(),
            matches,
        })
    }

    /// Independent word searches for each whitespace-separated term.
    ///
    /// Results follow query order, duplicates included. Terms beyond the
    /// cap are dropped and counted in `ignored_words`.
    pub fn search_multiple_words(&self, query: &str) -> Result<MultiWordSearchResult> {
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let mut words = query.split(is_query_space).filter(|w| !w.is_empty());
        let selected: Vec<&str> = words.by_ref().take(self.max_query_words).collect();
        if selected.is_empty() {
            return Err(Error::NoValidWords);
        }
        let ignored_words = words.count();
        if ignored_words > 0 {
            debug!(
                target: "minisearch::search",
                ignored = ignored_words,
                max = self.max_query_words,
                "Multi-word query truncated"
            );
        }

        let results = selected.into_iter().map(|w| self.scan_word(w)).collect();
        Ok(MultiWordSearchResult {
            results,
            ignored_words,
        })
    }

    fn scan_word(&self, query: &str) -> WordSearchResult {
        let folded_query = fold_case(query);
        let mut folded_line = String::new();
        let mut matches = Vec::new();
        let mut total_occurrences = 0;

        for record in self.corpus.lines() {
            fold_case_into(&record.text, &mut folded_line);
            let hits = tokens(&folded_line).filter(|t| *t == folded_query).count();
            if hits > 0 {
                matches.push(LineMatch::from(record));
                total_occurrences += hits;
            }
        }

        WordSearchResult {
            query: query.to_string(),
            matches,
            total_occurrences,
        }
    }
}
