//! # Contributor Extraction
//!
//! Turns raw `git log` author lines into the list written to the package
//! file: unique, filtered by the exclusion set, and sorted by a [`Collator`].
//!
//! The work is split so that the text processing can be tested without a
//! repository:
//!
//! - [`collect_contributors`] normalizes already-captured log output.
//! - [`extract`] runs git in a directory and then normalizes its output.

use std::collections::BTreeSet;
use std::path::Path;

use log::debug;

use crate::collate::Collator;
use crate::error::Result;
use crate::git;

/// Collect the sorted, unique contributors from `git log` output.
///
/// Lines are split on `\n` or `\r\n` and blank lines are skipped. Entries
/// are deduplicated by exact string equality, any entry present in `exclude`
/// is dropped, and the rest are sorted with `collator`.
pub fn collect_contributors(
    raw: &str,
    exclude: &BTreeSet<String>,
    collator: &Collator,
) -> Vec<String> {
    let unique: BTreeSet<&str> = raw
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .collect();

    let mut contributors: Vec<String> = unique
        .into_iter()
        .filter(|identity| !exclude.contains(*identity))
        .map(str::to_string)
        .collect();

    collator.sort(&mut contributors);
    contributors
}

/// Extract the contributors recorded in the git history at `cwd`.
///
/// Fails with [`crate::error::Error::GitCommand`] if `cwd` is not inside a
/// repository or git cannot be run.
pub fn extract(
    cwd: &Path,
    exclude: &BTreeSet<String>,
    collator: &Collator,
) -> Result<Vec<String>> {
    let raw = git::log_authors(cwd)?;
    let contributors = collect_contributors(&raw, exclude, collator);
    debug!(
        "found {} contributors in {} ({} excluded identities)",
        contributors.len(),
        cwd.display(),
        exclude.len()
    );
    Ok(contributors)
}
