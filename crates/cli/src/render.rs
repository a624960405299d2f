//! Plain-text rendering of session outputs.

use std::io::{self, Write};

use minisearch_core::{
    BuildReport, FileStat, IndexSummary, MultiWordSearchResult, PhraseSearchResult,
    WordSearchResult,
};

const RULE: &str = "----------------------------------------------";

pub fn build_report(out: &mut dyn Write, report: &BuildReport) -> io::Result<()> {
    writeln!(out, "\n Scanning folder: {}", report.folder.display())?;
    for stat in &report.files {
        writeln!(
            out,
            " Indexed: {} ({} lines, {} words)",
            stat.file_name, stat.lines, stat.words
        )?;
    }
    for skipped in &report.skipped {
        writeln!(out, "  Skipped: {} ({})", skipped.file_name, skipped.reason)?;
    }
    if report.truncated_lines > 0 {
        writeln!(
            out,
            "  Warning: {} line(s) exceeded the line length limit and were truncated.",
            report.truncated_lines
        )?;
    }

    if report.is_empty() {
        writeln!(out, "  No .txt files found in '{}'.", report.folder.display())?;
    } else {
        writeln!(
            out,
            "\n Indexed {} file(s), {} total lines, {} total words.",
            report.file_count(),
            report.total_lines,
            report.total_words
        )?;
    }
    writeln!(out, "{}\n", RULE)
}

pub fn word(out: &mut dyn Write, result: &WordSearchResult) -> io::Result<()> {
    writeln!(out, "\nSearching for word: \"{}\"", result.query)?;
    writeln!(out, "{}", RULE)?;
    if !result.is_found() {
        return writeln!(out, " Word not found in any file.");
    }
    for m in &result.matches {
        writeln!(out, " {}", m)?;
    }
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Total matches found: {}", result.total_occurrences)
}

pub fn phrase(out: &mut dyn Write, result: &PhraseSearchResult) -> io::Result<()> {
    writeln!(out, "\n Searching for phrase: \"{}\"", result.phrase)?;
    writeln!(out, "{}", RULE)?;
    if !result.is_found() {
        return writeln!(out, " Phrase not found in any file.");
    }
    for m in &result.matches {
        writeln!(out, " {}", m)?;
    }
    writeln!(out, "{}", RULE)?;
    writeln!(out, " Total lines matched: {}", result.matched_line_count)
}

pub fn multi_word(out: &mut dyn Write, result: &MultiWordSearchResult) -> io::Result<()> {
    writeln!(out, "\nSearching for multiple words ({}):", result.word_count())?;
    if result.was_truncated() {
        writeln!(
            out,
            "  Warning: {} word(s) beyond the limit were ignored.",
            result.ignored_words
        )?;
    }
    for word in &result.results {
        writeln!(out, "\n>> Word: \"{}\"", word.query)?;
        writeln!(out, "{}", RULE)?;
        if !word.is_found() {
            writeln!(out, " Not found.")?;
            continue;
        }
        for m in &word.matches {
            writeln!(out, " {}", m)?;
        }
        writeln!(out, "{}", RULE)?;
        writeln!(
            out,
            " Total matches for \"{}\": {}",
            word.query, word.total_occurrences
        )?;
    }
    Ok(())
}

pub fn summary(out: &mut dyn Write, summary: &IndexSummary) -> io::Result<()> {
    writeln!(out, "\nIndex:")?;
    writeln!(out, " - Total files indexed: {}", summary.files)?;
    writeln!(out, " - Total lines indexed: {}", summary.lines)
}

pub fn file_stats(out: &mut dyn Write, stats: &[FileStat]) -> io::Result<()> {
    writeln!(out, "\nFile statistics:")?;
    writeln!(out, "{}", RULE)?;
    for stat in stats {
        writeln!(
            out,
            " {:<30} : {:>4} lines, {:>6} words",
            stat.file_name, stat.lines, stat.words
        )?;
    }
    let lines: usize = stats.iter().map(|s| s.lines).sum();
    let words: usize = stats.iter().map(|s| s.words).sum();
    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        " Total files: {} | Total lines: {} | Total words: {}",
        stats.len(),
        lines,
        words
    )
}

pub fn total_words(out: &mut dyn Write, total: usize) -> io::Result<()> {
    writeln!(out, "\nTotal words in indexed corpus: {}", total)
}
