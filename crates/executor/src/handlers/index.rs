//! Index command handlers.

use std::path::Path;

use minisearch_engine::{Corpus, CorpusBuilder};

use crate::{Output, Result};

/// Handle Build command: scan `folder` into a new corpus.
pub fn build(builder: &CorpusBuilder, folder: &Path) -> Result<(Corpus, Output)> {
    let (corpus, report) = builder.build(folder)?;
    Ok((corpus, Output::Built(report)))
}

/// Handle Summary command.
pub fn summary(corpus: &Corpus) -> Result<Output> {
    Ok(Output::Summary(corpus.summary()))
}

/// Handle FileStats command: statistics in processing order.
pub fn file_stats(corpus: &Corpus) -> Result<Output> {
    Ok(Output::FileStats(corpus.file_stats().to_vec()))
}

/// Handle TotalWords command.
pub fn total_words(corpus: &Corpus) -> Result<Output> {
    Ok(Output::TotalWords(corpus.total_words()))
}
