//! Command execution layer for minisearch
//!
//! A [`Session`] owns the current corpus and executes [`Command`]s against
//! it, returning [`Output`]s. The typed methods in `api` wrap `execute` for
//! library callers; the CLI drives the same commands from its menu.

#![warn(missing_docs)]

mod api;
mod command;
mod handlers;
mod output;
mod session;

pub use command::Command;
pub use minisearch_core::{Error, Result};
pub use output::Output;
pub use session::Session;
