//! Folder scanner that produces a Corpus
//!
//! Only the immediate `.txt` files of the folder are read (exact,
//! case-sensitive suffix). Entries are processed in the order the file
//! system yields them unless `BuildOptions::sort_entries` is set.
//!
//! Failure handling:
//! - folder cannot be opened: `Error::FolderUnreadable`, nothing is built
//! - one file cannot be opened or read: recorded in the report, skipped
//! - line longer than `max_line_bytes`: truncated, counted, logged
//! - two names that decode to the same string: the later one is skipped

use super::Corpus;
use crate::search::tokenizer::count_tokens;
use minisearch_core::{
    BuildReport, Error, FileStat, IndexLimits, LineRecord, Result, SkipReason, SkippedFile,
};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Extension a file name must end with to be indexed
const TXT_EXTENSION: &str = ".txt";

/// Raw bytes kept past `max_line_bytes`, enough for one UTF-8 sequence to
/// straddle the cut and still decode.
const LINE_SLACK: usize = 3;

/// Options for a build pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Line, file name and query bounds
    pub limits: IndexLimits,
    /// Sort eligible file names before processing, for reproducible order
    pub sort_entries: bool,
}

impl BuildOptions {
    /// Default options: default limits, file system order
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limits
    pub fn limits(mut self, limits: IndexLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Enable or disable sorting of file names
    pub fn sort_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }
}

/// Lines and counts read from one file
struct ScannedFile {
    lines: Vec<LineRecord>,
    words: usize,
    truncated: usize,
}

/// Scans a folder and produces a fresh Corpus
///
/// # Example
///
/// ```no_run
/// use minisearch_engine::{BuildOptions, CorpusBuilder};
///
/// let builder = CorpusBuilder::new(BuildOptions::new().sort_entries(true));
/// let (corpus, report) = builder.build("data")?;
/// println!("{} files, {} words", report.file_count(), corpus.total_words());
/// # Ok::<(), minisearch_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CorpusBuilder {
    options: BuildOptions,
}

impl CorpusBuilder {
    /// Create a builder with the given options
    pub fn new(options: BuildOptions) -> Self {
        CorpusBuilder { options }
    }

    /// Options in effect
    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Scan `folder` and build a corpus from its `.txt` files.
    ///
    /// Returns the corpus together with the diagnostics of the pass. A
    /// folder with no eligible files yields an empty corpus and a report
    /// for which `is_empty()` is true; that is not an error.
    pub fn build(&self, folder: impl AsRef<Path>) -> Result<(Corpus, BuildReport)> {
        let folder = folder.as_ref();
        let started = Instant::now();
        info!(target: "minisearch::build", folder = %folder.display(), "Scanning folder");

        let names = match self.eligible_entries(folder) {
            Ok(names) => names,
            Err(e) => {
                error!(target: "minisearch::build", error = %e, "Build aborted");
                return Err(e);
            }
        };

        let mut corpus = Corpus::new(folder);
        let mut report = BuildReport {
            folder: folder.to_path_buf(),
            ..Default::default()
        };

        for (name, path) in names {
            let limits = &self.options.limits;
            if name.len() > limits.max_file_name_bytes {
                skip(
                    &mut report,
                    name.clone(),
                    SkipReason::NameTooLong {
                        len: name.len(),
                        max: limits.max_file_name_bytes,
                    },
                );
                continue;
            }

            match fs::metadata(&path) {
                Ok(meta) if !meta.is_file() => {
                    skip(&mut report, name, SkipReason::NotAFile);
                    continue;
                }
                Err(e) => {
                    skip(&mut report, name, SkipReason::Unreadable(e.to_string()));
                    continue;
                }
                Ok(_) => {}
            }

            let scanned = match scan_file(&path, &name, limits.max_line_bytes) {
                Ok(scanned) => scanned,
                Err(e) => {
                    skip(&mut report, name, SkipReason::Unreadable(e.to_string()));
                    continue;
                }
            };

            let stat = FileStat::new(name.clone(), scanned.lines.len(), scanned.words);
            if !corpus.push_file(stat.clone(), scanned.lines) {
                skip(&mut report, name, SkipReason::DuplicateName);
                continue;
            }
            info!(
                target: "minisearch::build",
                file = %name,
                lines = stat.lines,
                words = stat.words,
                "Indexed file"
            );
            report.total_lines += stat.lines;
            report.total_words += stat.words;
            report.truncated_lines += scanned.truncated;
            report.files.push(stat);
        }

        if report.is_empty() {
            info!(target: "minisearch::build", folder = %folder.display(), "No .txt files found");
        } else {
            info!(
                target: "minisearch::build",
                files = report.file_count(),
                lines = report.total_lines,
                words = report.total_words,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Index built"
            );
        }

        Ok((corpus, report))
    }

    /// List `.txt` entries of `folder` as (name, path) pairs.
    fn eligible_entries(&self, folder: &Path) -> Result<Vec<(String, PathBuf)>> {
        let entries = fs::read_dir(folder).map_err(|source| Error::FolderUnreadable {
            path: folder.to_path_buf(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| Error::Io {
                context: format!("reading entries of '{}'", folder.display()),
                source,
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !is_eligible(&name) {
                debug!(target: "minisearch::build", entry = %name, "Ignoring entry");
                continue;
            }
            names.push((name, entry.path()));
        }

        if self.options.sort_entries {
            names.sort_by(|a, b| a.0.cmp(&b.0));
        }
        Ok(names)
    }
}

/// Build a corpus from `folder` with default options.
pub fn build(folder: impl AsRef<Path>) -> Result<(Corpus, BuildReport)> {
    CorpusBuilder::default().build(folder)
}

/// True for names ending in exactly `.txt`, excluding the `.`/`..` pseudo-entries.
fn is_eligible(name: &str) -> bool {
    name != "." && name != ".." && name.ends_with(TXT_EXTENSION)
}

fn skip(report: &mut BuildReport, file_name: String, reason: SkipReason) {
    warn!(target: "minisearch::build", file = %file_name, reason = %reason, "Skipping file");
    report.skipped.push(SkippedFile { file_name, reason });
}

/// Read one file line by line.
///
/// Any read error discards the partial result so the file is either
/// indexed whole or not at all. At most `max_line_bytes + LINE_SLACK`
/// bytes of a line are held in memory.
fn scan_file(path: &Path, name: &str, max_line_bytes: usize) -> io::Result<ScannedFile> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut scanned = ScannedFile {
        lines: Vec::new(),
        words: 0,
        truncated: 0,
    };
    let keep = max_line_bytes.saturating_add(LINE_SLACK);
    let mut buf = Vec::new();

    while let Some(dropped) = read_line_bounded(&mut reader, &mut buf, keep)? {
        if !dropped {
            while buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        let line_number = scanned.lines.len() + 1;
        let mut text = String::from_utf8_lossy(&buf).into_owned();
        if truncate_to_boundary(&mut text, max_line_bytes) {
            warn!(
                target: "minisearch::build",
                file = %name,
                line = line_number,
                max_bytes = max_line_bytes,
                "Line truncated"
            );
            scanned.truncated += 1;
        }

        scanned.words += count_tokens(&text);
        scanned.lines.push(LineRecord::new(name, line_number, text));
    }

    Ok(scanned)
}

/// Read the next line into `buf` without its `\n`, keeping at most `keep`
/// bytes and consuming the rest of the line.
///
/// Returns `None` at end of input. Otherwise returns whether any byte other
/// than `\r` was discarded past the limit.
fn read_line_bounded<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    keep: usize,
) -> io::Result<Option<bool>> {
    buf.clear();
    let mut read_any = false;
    let mut dropped = false;

    loop {
        let (used, done) = {
            let available = reader.fill_buf()?;
            if available.is_empty() {
                break;
            }
            read_any = true;
            let (chunk, used, done) = match available.iter().position(|&b| b == b'\n') {
                Some(i) => (&available[..i], i + 1, true),
                None => (available, available.len(), false),
            };
            let take = keep.saturating_sub(buf.len()).min(chunk.len());
            buf.extend_from_slice(&chunk[..take]);
            dropped |= chunk[take..].iter().any(|&b| b != b'\r');
            (used, done)
        };
        reader.consume(used);
        if done {
            break;
        }
    }

    Ok(read_any.then_some(dropped))
}

/// Cut `text` to at most `max` bytes on a char boundary. Returns true if cut.
fn truncate_to_boundary(text: &mut String, max: usize) -> bool {
    if text.len() <= max {
        return false;
    }
    let mut cut = max;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    #[test]
    fn test_is_eligible() {
        assert!(is_eligible("report.txt"));
        assert!(is_eligible(".txt"));
        assert!(!is_eligible("report.TXT"));
        assert!(!is_eligible("report.txt.bak"));
        assert!(!is_eligible("report"));
        assert!(!is_eligible("."));
        assert!(!is_eligible(".."));
    }

    #[test]
    fn test_truncate_to_boundary() {
        let mut s = String::from("hello");
        assert!(!truncate_to_boundary(&mut s, 5));
        assert!(truncate_to_boundary(&mut s, 3));
        assert_eq!(s, "hel");

        // 'é' is two bytes; cutting inside it backs off to the boundary
        let mut s = String::from("aé");
        assert!(truncate_to_boundary(&mut s, 2));
        assert_eq!(s, "a");
    }

    #[test]
    fn test_strips_crlf_and_numbers_lines() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.txt", "first\r\nsecond\n\nlast");

        let (corpus, report) = build(dir.path()).unwrap();
        let texts: Vec<_> = corpus
            .lines()
            .iter()
            .map(|l| (l.line_number, l.text.as_str()))
            .collect();
        assert_eq!(texts, vec![(1, "first"), (2, "second"), (3, ""), (4, "last")]);
        assert_eq!(report.total_lines, 4);
        assert_eq!(report.total_words, 3);
    }

    #[test]
    fn test_long_line_truncated_and_reported() {
        let dir = TempDir::new().unwrap();
        write(&dir, "long.txt", &format!("{}\nshort\n", "word ".repeat(10)));

        let options = BuildOptions::new().limits(IndexLimits::new().with_max_line_bytes(12));
        let (corpus, report) = CorpusBuilder::new(options).build(dir.path()).unwrap();

        assert_eq!(report.truncated_lines, 1);
        assert_eq!(corpus.lines()[0].text, "word word wo");
        assert_eq!(corpus.lines()[1].text, "short");
        assert_eq!(corpus.file_stat("long.txt").unwrap().words, 4);
    }

    #[test]
    fn test_long_file_name_skipped() {
        let dir = TempDir::new().unwrap();
        write(&dir, "abcdefghij.txt", "text");
        write(&dir, "a.txt", "text");

        let options =
            BuildOptions::new().limits(IndexLimits::new().with_max_file_name_bytes(8));
        let (corpus, report) = CorpusBuilder::new(options).build(dir.path()).unwrap();

        assert_eq!(corpus.file_count(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(
            report.skipped[0].reason,
            SkipReason::NameTooLong { len: 14, max: 8 }
        );
    }

    #[test]
    fn test_directory_named_txt_skipped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();
        write(&dir, "real.txt", "one two");

        let (corpus, report) = build(dir.path()).unwrap();
        assert_eq!(corpus.file_count(), 1);
        assert_eq!(report.skipped[0].file_name, "nested.txt");
        assert_eq!(report.skipped[0].reason, SkipReason::NotAFile);
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bin.txt"), b"ok \xff\xfe bytes\n").unwrap();

        let (corpus, _) = build(dir.path()).unwrap();
        assert_eq!(corpus.line_count(), 1);
        assert!(corpus.lines()[0].text.starts_with("ok "));
        assert!(corpus.lines()[0].text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_missing_folder_is_error() {
        let dir = TempDir::new().unwrap();
        let err = build(dir.path().join("missing")).unwrap_err();
        assert!(err.is_folder_error());
    }

    #[test]
    fn test_read_line_bounded_caps_buffer() {
        let data = format!("{}\nnext\r\n", "x".repeat(10_000));
        let mut reader = io::Cursor::new(data.into_bytes());
        let mut buf = Vec::new();

        assert_eq!(read_line_bounded(&mut reader, &mut buf, 8).unwrap(), Some(true));
        assert_eq!(buf, b"xxxxxxxx");
        assert_eq!(read_line_bounded(&mut reader, &mut buf, 8).unwrap(), Some(false));
        assert_eq!(buf, b"next\r");
        assert_eq!(read_line_bounded(&mut reader, &mut buf, 8).unwrap(), None);
    }

    #[test]
    fn test_trailing_carriage_returns_past_limit_not_truncation() {
        let dir = TempDir::new().unwrap();
        write(&dir, "cr.txt", &format!("abc{}\n", "\r".repeat(20)));

        let options = BuildOptions::new().limits(IndexLimits::new().with_max_line_bytes(5));
        let (corpus, report) = CorpusBuilder::new(options).build(dir.path()).unwrap();
        assert_eq!(corpus.lines()[0].text, "abc");
        assert_eq!(report.truncated_lines, 0);
    }

    #[test]
    fn test_huge_line_without_newline_truncated() {
        let dir = TempDir::new().unwrap();
        write(&dir, "huge.txt", &"ab ".repeat(100_000));

        let options = BuildOptions::new().limits(IndexLimits::new().with_max_line_bytes(16));
        let (corpus, report) = CorpusBuilder::new(options).build(dir.path()).unwrap();
        assert_eq!(corpus.line_count(), 1);
        assert_eq!(corpus.lines()[0].text, "ab ab ab ab ab a");
        assert_eq!(report.truncated_lines, 1);
        assert_eq!(corpus.total_words(), 6);
    }

    #[test]
    fn test_multibyte_char_across_limit() {
        let dir = TempDir::new().unwrap();
        // 'é' occupies bytes 3..5; a limit of 4 falls inside it
        write(&dir, "utf.txt", "abcé tail\n");

        let options = BuildOptions::new().limits(IndexLimits::new().with_max_line_bytes(4));
        let (corpus, report) = CorpusBuilder::new(options).build(dir.path()).unwrap();
        assert_eq!(corpus.lines()[0].text, "abc");
        assert_eq!(report.truncated_lines, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_skipped_as_unreadable() {
        let dir = TempDir::new().unwrap();
        write(&dir, "ok.txt", "one two");
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("dangling.txt"))
            .unwrap();

        let (corpus, report) = build(dir.path()).unwrap();
        assert_eq!(corpus.file_count(), 1);
        assert_eq!(report.file_count(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].file_name, "dangling.txt");
        assert!(matches!(report.skipped[0].reason, SkipReason::Unreadable(_)));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_names_colliding_after_lossy_decode() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"a\xff.txt")), "one two").unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"a\xfe.txt")), "three four").unwrap();

        let (corpus, report) = CorpusBuilder::new(BuildOptions::new().sort_entries(true))
            .build(dir.path())
            .unwrap();
        assert_eq!(corpus.file_count(), 1);
        assert_eq!(report.file_count(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].reason, SkipReason::DuplicateName);
        assert_eq!(report.total_words, corpus.total_words());
        assert_eq!(report.total_lines, corpus.line_count());
    }

    #[test]
    fn test_sorted_entries() {
        let dir = TempDir::new().unwrap();
        write(&dir, "c.txt", "c");
        write(&dir, "a.txt", "a");
        write(&dir, "b.txt", "b");

        let (corpus, report) = CorpusBuilder::new(BuildOptions::new().sort_entries(true))
            .build(dir.path())
            .unwrap();
        let names: Vec<_> = report.files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
        let texts: Vec<_> = corpus.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }
}
