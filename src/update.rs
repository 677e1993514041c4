//! # Contributor Update
//!
//! Reconciles the contributors found in git history with the list recorded in
//! the package file, and writes the file back when the count changed.
//!
//! ## Steps
//!
//! 1. Resolve the package file (explicit path, or nearest `package.json`).
//! 2. Parse it and merge its `contributorsConfig` block under `config`.
//! 3. Count the list currently recorded at the configured property.
//! 4. Resolve exclusions: explicit ones win outright, otherwise the author.
//! 5. Extract contributors from the history at `cwd`, or around the package
//!    file when its path was given explicitly.
//! 6. Compare counts and write the record (or not).
//!
//! Only the count is compared. A history that swaps one contributor for
//! another at the same count is reported as unchanged.

use std::fmt;
use std::path::{Path, PathBuf};

use log::info;

use crate::config::Config;
use crate::error::Result;
use crate::extract::extract;
use crate::identity::default_exclusions;
use crate::package::{self, Package};

/// What an update did to the recorded list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Same number of contributors; nothing written.
    Unchanged,
    /// The list grew by this many entries.
    Added(usize),
    /// The list shrank by this many entries.
    Reduced(usize),
}

impl Outcome {
    pub fn compare(current: usize, new: usize) -> Self {
        if new > current {
            Self::Added(new - current)
        } else if new < current {
            Self::Reduced(current - new)
        } else {
            Self::Unchanged
        }
    }

    /// Whether the outcome calls for rewriting the package file.
    pub fn writes(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Result of [`update`].
#[derive(Debug, Clone)]
pub struct UpdateReport {
    /// Package file the record was read from.
    pub package: PathBuf,
    /// Where the updated record was written, if it was.
    pub written_to: Option<PathBuf>,
    pub outcome: Outcome,
    /// Contributors extracted from history, after exclusions.
    pub contributors: Vec<String>,
    /// Full text of the resulting file.
    pub contents: String,
}

impl fmt::Display for UpdateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Unchanged => write!(f, "No new contributors; nothing to do."),
            Outcome::Reduced(n) => write!(
                f,
                "Reducing contributor count by {}! It's because you're using exclusions or .mailmap, right?",
                n
            ),
            Outcome::Added(n) => {
                let target = self.written_to.as_deref().unwrap_or(&self.package);
                write!(f, "Wrote {} new contributors to {}", n, target.display())
            }
        }
    }
}

/// Update the contributor list of the package file selected by `config`.
///
/// `cwd` is where the upward search for `package.json` starts and what
/// relative paths in `config` are resolved against.
pub fn update(cwd: &Path, config: &Config) -> Result<UpdateReport> {
    let (path, history) = match &config.package {
        Some(path) => (cwd.join(path), None),
        None => (package::find(cwd)?, Some(cwd)),
    };
    info!("updating contributors in {}", path.display());

    let mut package = Package::load(&path)?;
    let config = match Config::from_package(&package)? {
        Some(block) => config.clone().merge(block),
        None => config.clone(),
    };

    let property = config.property();
    let current = package.list_len(property);
    let exclude = config
        .exclude_set()
        .unwrap_or_else(|| default_exclusions(package.record()));

    let collator = config.collator()?;
    let history = history.unwrap_or_else(|| package.dir());
    let contributors = extract(history, &exclude, &collator)?;
    let outcome = Outcome::compare(current, contributors.len());
    info!(
        "{} recorded, {} found in history ({:?})",
        current,
        contributors.len(),
        outcome
    );

    if !outcome.writes() {
        return Ok(UpdateReport {
            package: path,
            written_to: None,
            outcome,
            contributors,
            contents: package.source().to_string(),
        });
    }

    package.set_list(property, &contributors);
    let target = match &config.output_file {
        Some(output) => cwd.join(output),
        None => path.clone(),
    };
    let contents = package.write_to(&target)?;

    Ok(UpdateReport {
        package: path,
        written_to: Some(target),
        outcome,
        contributors,
        contents,
    })
}
