//! Session: owner of the current corpus
//!
//! A session starts with no corpus. `Build` replaces it wholesale; every
//! other command reads it. The session is the single writer and runs each
//! command to completion, so no search can observe a half-built corpus.
//!
//! Callers that need concurrent access must wrap the session in their own
//! lock; a session is `Send` but takes `&mut self` for every command.

use minisearch_core::{Error, IndexLimits, Result};
use minisearch_engine::{BuildOptions, Corpus, CorpusBuilder, Searcher};
use tracing::debug;

use crate::handlers;
use crate::{Command, Output};

/// Command executor holding at most one built corpus
#[derive(Debug, Default)]
pub struct Session {
    builder: CorpusBuilder,
    corpus: Option<Corpus>,
}

impl Session {
    /// Create a session with no corpus
    pub fn new(options: BuildOptions) -> Self {
        Session {
            builder: CorpusBuilder::new(options),
            corpus: None,
        }
    }

    /// Limits in effect for builds and multi-word queries
    pub fn limits(&self) -> &IndexLimits {
        &self.builder.options().limits
    }

    /// The current corpus, if a build has completed
    pub fn corpus(&self) -> Option<&Corpus> {
        self.corpus.as_ref()
    }

    /// True when a build has completed and indexed at least one file
    pub fn is_indexed(&self) -> bool {
        self.corpus.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Drop the current corpus
    pub fn clear(&mut self) {
        self.corpus = None;
    }

    /// Execute one command.
    ///
    /// `Build` discards the current corpus before scanning, so a failed
    /// build leaves the session without one. All other commands fail with
    /// `Error::NotIndexed` until a build has indexed at least one file.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        debug!(target: "minisearch::executor", command = cmd.name(), "Executing");

        if let Command::Build { folder } = &cmd {
            self.corpus = None;
            let (corpus, output) = handlers::index::build(&self.builder, folder)?;
            self.corpus = Some(corpus);
            return Ok(output);
        }

        let corpus = self.corpus.as_ref().ok_or(Error::NotIndexed)?;
        let searcher = Searcher::with_max_query_words(corpus, self.limits().max_query_words)?;

        match cmd {
            Command::SearchWord { query } => handlers::search::search_word(&searcher, &query),
            Command::SearchPhrase { phrase } => handlers::search::search_phrase(&searcher, &phrase),
            Command::SearchWords { query } => handlers::search::search_words(&searcher, &query),
            Command::Summary => handlers::index::summary(corpus),
            Command::FileStats => handlers::index::file_stats(corpus),
            Command::TotalWords => handlers::index::total_words(corpus),
            Command::Build { .. } => Err(Error::Internal {
                reason: "Build reached the read-only dispatch".into(),
            }),
        }
    }
}
