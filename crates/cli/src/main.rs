//! minisearch: index a folder of `.txt` files and search it
//!
//! Usage:
//!   minisearch                          # Interactive menu over ./data
//!   minisearch --dir notes              # Interactive menu over ./notes
//!   minisearch word cat                 # One-shot word search
//!   minisearch phrase "quick, brown"    # One-shot phrase search
//!   minisearch words cat dog --json     # One-shot multi-word search, JSON output
//!   minisearch stats                    # Per-file statistics

mod menu;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use minisearch_core::{
    IndexLimits, DEFAULT_FOLDER, DEFAULT_MAX_FILE_NAME_BYTES, DEFAULT_MAX_LINE_BYTES,
    DEFAULT_MAX_QUERY_WORDS,
};
use minisearch_engine::BuildOptions;
use minisearch_executor::Session;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "minisearch",
    version,
    about = "Index a folder of .txt files and search it by word or phrase"
)]
struct Cli {
    /// Folder whose .txt files are indexed
    #[arg(short, long, default_value = DEFAULT_FOLDER)]
    dir: PathBuf,

    /// Longest stored line in bytes; longer lines are truncated
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_BYTES)]
    max_line_bytes: usize,

    /// Longest accepted file name in bytes; longer names are skipped
    #[arg(long, default_value_t = DEFAULT_MAX_FILE_NAME_BYTES)]
    max_file_name_bytes: usize,

    /// Most words searched by one multi-word query
    #[arg(long, default_value_t = DEFAULT_MAX_QUERY_WORDS)]
    max_words: usize,

    /// Process files in sorted name order instead of directory order
    #[arg(long)]
    sorted: bool,

    /// Print one-shot results as JSON
    #[arg(long)]
    json: bool,

    /// Log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Search for a single word
    Word { query: String },
    /// Search for an exact phrase
    Phrase { phrase: String },
    /// Search for several words, each independently
    Words {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// Show per-file statistics and totals
    Stats,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "minisearch=error",
        1 => "minisearch=info",
        _ => "minisearch=debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let limits = IndexLimits::new()
        .with_max_line_bytes(cli.max_line_bytes)
        .with_max_file_name_bytes(cli.max_file_name_bytes)
        .with_max_query_words(cli.max_words);
    let options = BuildOptions::new().limits(limits).sort_entries(cli.sorted);
    let mut session = Session::new(options);
    debug!(folder = %cli.dir.display(), ?limits, sorted = cli.sorted, "Starting minisearch");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        None => {
            let mut editor =
                rustyline::DefaultEditor::new().context("failed to initialize line editor")?;
            menu::run(&mut session, &cli.dir, &mut editor, &mut out)
        }
        Some(cmd) => run_once(&mut session, &cli.dir, cmd, cli.json, &mut out),
    }
}

/// Build once, run one query, print the result.
fn run_once(
    session: &mut Session,
    dir: &std::path::Path,
    cmd: Cmd,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let report = session
        .build(dir)
        .with_context(|| format!("failed to index '{}'", dir.display()))?;
    if report.is_empty() {
        bail!("no .txt files found in '{}'", dir.display());
    }
    for skipped in &report.skipped {
        eprintln!("skipped {}: {}", skipped.file_name, skipped.reason);
    }

    match cmd {
        Cmd::Word { query } => {
            let result = session.search_word(&query)?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            } else {
                render::word(out, &result)?;
            }
        }
        Cmd::Phrase { phrase } => {
            let result = session.search_phrase(&phrase)?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            } else {
                render::phrase(out, &result)?;
            }
        }
        Cmd::Words { words } => {
            let result = session.search_multiple_words(&words.join(" "))?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            } else {
                render::multi_word(out, &result)?;
            }
        }
        Cmd::Stats => {
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                render::file_stats(out, &session.file_stats()?)?;
            }
        }
    }
    Ok(())
}
