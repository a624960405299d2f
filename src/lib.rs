//! minisearch: an in-memory line index over a folder of `.txt` files
//!
//! Build the index once, then run word, phrase and multi-word queries
//! against it. The index lives only in memory and is rebuilt on demand.
//!
//! ```no_run
//! use minisearch::Session;
//!
//! let mut session = Session::default();
//! session.build("data")?;
//!
//! let result = session.search_phrase("quick, brown")?;
//! println!("{} line(s) matched", result.matched_line_count);
//! # Ok::<(), minisearch::Error>(())
//! ```
//!
//! Lower-level access is available through [`Corpus`], [`CorpusBuilder`]
//! and [`Searcher`].

pub mod types;

pub use minisearch_core::{Error, Result};
pub use minisearch_engine::{build, search::tokenizer, Corpus, CorpusBuilder, Searcher};
pub use minisearch_executor::{Command, Output, Session};
pub use types::*;
