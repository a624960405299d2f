//! Interactive numbered menu.
//!
//! The menu is a thin dispatcher: it reads a choice, prompts for query
//! text where needed, runs the matching session command and renders the
//! output. Every error is printed and the menu continues.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use minisearch_core::Error;
use minisearch_executor::Session;

use crate::render;

/// Source of interactive input lines. `None` means end of input.
pub trait Prompt {
    fn ask(&mut self, prompt: &str) -> Option<String>;
}

impl Prompt for rustyline::DefaultEditor {
    fn ask(&mut self, prompt: &str) -> Option<String> {
        match self.readline(prompt) {
            Ok(line) => {
                let _ = self.add_history_entry(line.as_str());
                Some(line)
            }
            Err(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Build,
    SearchWord,
    SearchPhrase,
    Summary,
    FileStats,
    SearchWords,
    TotalWords,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<MenuChoice> {
        let choice = match input.trim().parse::<u32>().ok()? {
            1 => MenuChoice::Build,
            2 => MenuChoice::SearchWord,
            3 => MenuChoice::SearchPhrase,
            4 => MenuChoice::Summary,
            5 => MenuChoice::FileStats,
            6 => MenuChoice::SearchWords,
            7 => MenuChoice::TotalWords,
            0 => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

const MENU: &str = "
----------------------------------------------
                 MAIN MENU
----------------------------------------------
1. Build / Rebuild Index
2. Search for a Word
3. Search for a Phrase
4. Show Index summary
5. File statistics (per-file lines/words)
6. Search for multiple words
7. Show total words in corpus
0. Exit
----------------------------------------------";

pub fn print_header(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "==============================================")?;
    writeln!(out, "              MINI SEARCH ENGINE")?;
    writeln!(out, "==============================================")
}

/// Run the menu until the user exits or input ends.
pub fn run(
    session: &mut Session,
    folder: &Path,
    prompt: &mut dyn Prompt,
    out: &mut dyn Write,
) -> Result<()> {
    print_header(out)?;
    loop {
        writeln!(out, "{}", MENU)?;
        out.flush()?;
        let Some(line) = prompt.ask("Enter your choice: ") else {
            writeln!(out, "\nExiting program...")?;
            return Ok(());
        };
        let Some(choice) = MenuChoice::parse(&line) else {
            if line.trim().parse::<u32>().is_ok() {
                writeln!(out, "Invalid choice! Please try again.")?;
            } else {
                writeln!(out, "Invalid input! Please enter a number.")?;
            }
            continue;
        };
        if choice == MenuChoice::Exit {
            writeln!(out, "\nExiting program...")?;
            session.clear();
            return Ok(());
        }
        dispatch(session, folder, choice, prompt, out)?;
    }
}

fn dispatch(
    session: &mut Session,
    folder: &Path,
    choice: MenuChoice,
    prompt: &mut dyn Prompt,
    out: &mut dyn Write,
) -> Result<()> {
    if choice == MenuChoice::Build {
        writeln!(out, "\n Building index from folder: {}", folder.display())?;
        match session.build(folder) {
            Ok(report) => {
                render::build_report(out, &report)?;
                writeln!(out, " Index built successfully!")?;
            }
            Err(e) => report_error(out, &e)?,
        }
        return Ok(());
    }

    if !session.is_indexed() {
        writeln!(out, " Please build the index first (Option 1).")?;
        return Ok(());
    }

    let result = match choice {
        MenuChoice::SearchWord => {
            let query = ask_text(prompt, "Enter a word to search: ");
            session.search_word(&query).map(|r| render::word(out, &r))
        }
        MenuChoice::SearchPhrase => {
            let phrase = ask_text(prompt, "Enter a phrase to search: ");
            session
                .search_phrase(&phrase)
                .map(|r| render::phrase(out, &r))
        }
        MenuChoice::SearchWords => {
            let query = ask_text(prompt, "Enter multiple words (space separated): ");
            session
                .search_multiple_words(&query)
                .map(|r| render::multi_word(out, &r))
        }
        MenuChoice::Summary => session.summary().map(|s| render::summary(out, &s)),
        MenuChoice::FileStats => session.file_stats().map(|s| render::file_stats(out, &s)),
        MenuChoice::TotalWords => session.total_words().map(|t| render::total_words(out, t)),
        MenuChoice::Build | MenuChoice::Exit => return Ok(()),
    };

    match result {
        Ok(written) => written?,
        Err(e) => report_error(out, &e)?,
    }
    Ok(())
}

/// Ask for query text; end of input counts as an empty entry.
fn ask_text(prompt: &mut dyn Prompt, message: &str) -> String {
    prompt.ask(message).unwrap_or_default()
}

fn report_error(out: &mut dyn Write, err: &Error) -> std::io::Result<()> {
    match err {
        Error::NotIndexed => writeln!(out, " Please build the index first (Option 1)."),
        Error::FolderUnreadable { .. } => writeln!(out, " Error: {}", err),
        _ => writeln!(out, "  {}.", capitalize(&err.to_string())),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
