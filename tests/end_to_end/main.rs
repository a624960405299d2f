//! End-to-End Test Suite
//!
//! Drives the public `minisearch` facade against folders written to disk.
//!
//! ## Test Groups
//!
//! - **scenarios**: the documented two-file corpus, empty folders, rebuilds
//! - **errors**: input errors, not-indexed guard, unreadable folders
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test end_to_end
//! ```

mod test_utils;

mod errors;
mod scenarios;
