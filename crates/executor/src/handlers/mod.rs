//! Command handlers.
//!
//! - `index`: Build, Summary, FileStats, TotalWords
//! - `search`: SearchWord, SearchPhrase, SearchWords

pub mod index;
pub mod search;
