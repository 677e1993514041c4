//! # Error Handling
//!
//! This module defines the centralized error type for the `contributors`
//! library. It uses `thiserror` to describe every failure the tool can hit
//! while locating the package file, querying git history, and writing the
//! result back.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all failure modes. Each variant carries enough
//!   context (paths, commands, stderr) to produce a useful message.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! None of these errors are recovered locally. They propagate to the binary,
//! which prints them and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for contributor operations
#[derive(Error, Debug)]
pub enum Error {
    /// No `package.json` could be found walking up from the start directory.
    #[error("Cannot find package.json (searched upward from {})", start.display())]
    PackageNotFound { start: PathBuf },

    /// The package file exists but is not a JSON object.
    #[error("Failed to parse {}: {message}", path.display())]
    PackageParse { path: PathBuf, message: String },

    /// The git history query could not be run or exited non-zero.
    #[error("Git command failed in {}: {command} - {stderr}", cwd.display())]
    GitCommand {
        command: String,
        cwd: PathBuf,
        stderr: String,
    },

    /// A config file or `contributorsConfig` block could not be understood.
    #[error("Configuration parsing error in {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// A file named by the user or found by the search could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The updated record could not be written to its target.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The collation locale is malformed or has no collation data.
    #[error("Invalid locale '{locale}': {message}")]
    Locale { locale: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
