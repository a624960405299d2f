//! In-memory line corpus
//!
//! This module contains:
//! - `Corpus`: the line store, per-file statistics and running word total
//! - `builder`: CorpusBuilder, which scans a folder and produces a Corpus
//!
//! # Invariants
//!
//! - `total_words()` equals the sum of `words` over `file_stats()`
//! - each FileStat's `lines` equals the number of LineRecords with its name
//! - file names are unique
//!
//! Files are added whole through `push_file`, so these hold after every call.
//! A Corpus is never observable half-built: the builder returns it only
//! once the scan has finished.

mod builder;

pub use builder::{build, BuildOptions, CorpusBuilder};

use minisearch_core::{FileStat, IndexSummary, LineRecord};
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

/// The full in-memory index for one build of one folder
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Folder the corpus was built from
    folder: PathBuf,
    /// Lines in file processing order, then on-disk order
    lines: Vec<LineRecord>,
    /// Per-file statistics in processing order
    stats: Vec<FileStat>,
    /// file name -> position in `stats`
    by_name: FxHashMap<String, usize>,
    /// Sum of all FileStat word counts
    total_words: usize,
}

impl Corpus {
    /// Create an empty corpus for `folder`
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Corpus {
            folder: folder.into(),
            ..Default::default()
        }
    }

    /// Add one file's lines and statistics.
    ///
    /// `lines` must all carry `stat.file_name`, and `stat.lines` must equal
    /// `lines.len()`. Adding a name twice replaces nothing and is rejected.
    pub(crate) fn push_file(&mut self, stat: FileStat, lines: Vec<LineRecord>) -> bool {
        debug_assert_eq!(stat.lines, lines.len());
        debug_assert!(lines.iter().all(|l| l.file_name == stat.file_name));

        if self.by_name.contains_key(&stat.file_name) {
            return false;
        }
        self.total_words += stat.words;
        self.by_name.insert(stat.file_name.clone(), self.stats.len());
        self.stats.push(stat);
        self.lines.extend(lines);
        true
    }

    /// Folder the corpus was built from
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// All indexed lines, in corpus order
    pub fn lines(&self) -> &[LineRecord] {
        &self.lines
    }

    /// Per-file statistics in processing order
    pub fn file_stats(&self) -> &[FileStat] {
        &self.stats
    }

    /// Statistics for one file, if it was indexed
    pub fn file_stat(&self, file_name: &str) -> Option<&FileStat> {
        self.by_name.get(file_name).map(|&i| &self.stats[i])
    }

    /// Total words across every indexed file
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Number of indexed files
    pub fn file_count(&self) -> usize {
        self.stats.len()
    }

    /// Number of indexed lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// File and line counts
    pub fn summary(&self) -> IndexSummary {
        IndexSummary {
            files: self.file_count(),
            lines: self.line_count(),
        }
    }

    /// True when no file has been indexed
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
