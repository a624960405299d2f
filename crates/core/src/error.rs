//! Error taxonomy
//!
//! Every variant is recoverable: the caller always regains control and may
//! try another operation. Not-found outcomes are not errors; they are empty
//! results.
//!
//! Per-file problems during a build are not errors either. They are recorded
//! as `SkippedFile` entries in the `BuildReport`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout minisearch
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the builder, the search operations and the session
#[derive(Debug, Error)]
pub enum Error {
    /// The folder to index could not be opened. The build is aborted.
    #[error("cannot open folder '{}': {source}", path.display())]
    FolderUnreadable {
        /// Folder that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Unexpected I/O failure during a build, outside a single file
    #[error("{context}: {source}")]
    Io {
        /// What was being done
        context: String,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Word search was given an empty query
    #[error("empty query entered")]
    EmptyQuery,

    /// Phrase search was given an empty phrase
    #[error("empty phrase entered")]
    EmptyPhrase,

    /// Multi-word search found no words after splitting on whitespace
    #[error("no valid words entered")]
    NoValidWords,

    /// No corpus has been built, or the last build indexed no files
    #[error("index not built: build the index first")]
    NotIndexed,

    /// A command produced an output of the wrong kind
    #[error("internal error: {reason}")]
    Internal {
        /// Description of the mismatch
        reason: String,
    },
}

impl Error {
    /// True for rejected queries (empty query, empty phrase, no usable words)
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::EmptyQuery | Error::EmptyPhrase | Error::NoValidWords)
    }

    /// True when the folder could not be opened
    pub fn is_folder_error(&self) -> bool {
        matches!(self, Error::FolderUnreadable { .. })
    }
}
