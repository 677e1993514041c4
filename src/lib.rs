//! # Contributors Library
//!
//! This library collects the people who have authored commits in a git
//! repository and records them in the repository's `package.json`. It backs
//! the `contributors` command-line tool but can be used on its own.
//!
//! ## Quick Example
//!
//! ```
//! use std::collections::BTreeSet;
//! use contributors::collate::Collator;
//! use contributors::extract::collect_contributors;
//!
//! let log = "Bob <bob@x.com>\nann <ann@x.com>\nBob <bob@x.com>\n";
//! let list = collect_contributors(log, &BTreeSet::new(), &Collator::default());
//! assert_eq!(list, vec!["ann <ann@x.com>", "Bob <bob@x.com>"]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Extraction (`extract`, `git`)**: Reads `git log` author lines and
//!   turns them into a unique, filtered, sorted list.
//! - **Collation (`collate`)**: Locale-style ordering that ignores diacritics
//!   and considers case only as a tie-breaker.
//! - **Identities (`identity`)**: Parses the package `author` field, which is
//!   excluded from the list by default.
//! - **Package records (`package`)**: Locates and rewrites `package.json`
//!   without disturbing unrelated properties or formatting.
//! - **Configuration (`config`)**: Layers CLI flags, a config file and the
//!   package's `contributorsConfig` block over built-in defaults.
//! - **Update (`update`)**: Ties the above together and reports what changed.

pub mod collate;
pub mod config;
pub mod defaults;
pub mod error;
pub mod extract;
pub mod git;
pub mod identity;
pub mod output;
pub mod package;
pub mod update;

#[cfg(test)]
mod extract_proptest;
