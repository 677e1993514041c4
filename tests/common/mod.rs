//! Shared test utilities for integration and E2E tests.
//!
//! This module provides a fixture that creates a throwaway git repository
//! with a known commit history and a `package.json`, plus helpers to run the
//! CLI inside it.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new()
//!         .with_commits(&["Ann <ann@x.com>", "Bob <bob@x.com>"])
//!         .with_package(packages::MINIMAL);
//!     fixture.command().assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::packages;
    pub use super::TestFixture;
}

/// Common `package.json` snippets for testing.
#[allow(dead_code)]
pub mod packages {
    /// A package without author or contributors.
    pub const MINIMAL: &str = r#"{
  "name": "demo",
  "version": "1.0.0"
}
"#;

    /// A package whose author appears in the history.
    pub const WITH_AUTHOR: &str = r#"{
  "name": "demo",
  "version": "1.0.0",
  "author": "Ann Author <ann@example.com> (https://ann.example.com)"
}
"#;

    /// Invalid JSON for error testing.
    pub const INVALID_JSON: &str = "{ \"name\": ";
}

/// A temporary git repository with a scripted history.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
    repo: PathBuf,
}

impl TestFixture {
    /// Create a fixture with an initialized, empty repository.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        let repo = temp_dir.path().to_path_buf();
        let fixture = Self { temp_dir, repo };
        fixture.git(&["init", "--quiet"]);
        fixture
    }

    /// Create a fixture whose repository lives in `subdir` of the temp
    /// directory, leaving the temp root outside of it.
    ///
    /// Returns `None` when the temp directory already sits inside another
    /// checkout, since the root would not be outside every repository.
    #[allow(dead_code)]
    pub fn in_subdirectory(subdir: &str) -> Option<Self> {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        let nested = Command::new("git")
            .args(["rev-parse", "--git-dir"])
            .current_dir(temp_dir.path())
            .output()
            .expect("Failed to run git");
        if nested.status.success() {
            return None;
        }

        let repo = temp_dir.path().join(subdir);
        std::fs::create_dir_all(&repo).expect("Failed to create repository directory");
        let fixture = Self { temp_dir, repo };
        fixture.git(&["init", "--quiet"]);
        Some(fixture)
    }

    /// Create one empty commit per author, in order.
    pub fn with_commits(self, authors: &[&str]) -> Self {
        for (i, author) in authors.iter().enumerate() {
            let message = format!("commit {}", i);
            self.git(&[
                "-c",
                "commit.gpgsign=false",
                "commit",
                "--quiet",
                "--allow-empty",
                "-m",
                &message,
                "--author",
                author,
            ]);
        }
        self
    }

    /// Write `package.json` at the repository root.
    pub fn with_package(self, content: &str) -> Self {
        self.with_file("package.json", content)
    }

    /// Write `package.json` with a `contributors` array of the given entries.
    #[allow(dead_code)]
    pub fn with_recorded(self, author: Option<&str>, contributors: &[&str]) -> Self {
        let mut record = serde_json::Map::new();
        record.insert("name".into(), "demo".into());
        if let Some(author) = author {
            record.insert("author".into(), author.into());
        }
        record.insert(
            "contributors".into(),
            contributors.iter().map(|c| c.to_string()).collect(),
        );
        let content = serde_json::to_string_pretty(&record).expect("Failed to serialize package");
        self.with_package(&format!("{}\n", content))
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> &Path {
        &self.repo
    }

    /// Get the path to the temp directory holding the repository.
    #[allow(dead_code)]
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the root `package.json`.
    pub fn package_path(&self) -> PathBuf {
        self.repo.join("package.json")
    }

    /// Read the root `package.json`.
    #[allow(dead_code)]
    pub fn read_package(&self) -> String {
        std::fs::read_to_string(self.package_path()).expect("Failed to read package.json")
    }

    /// Parse the root `package.json`.
    #[allow(dead_code)]
    pub fn package_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_package()).expect("package.json is not valid JSON")
    }

    /// Create a child path in the repository.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        assert_fs::fixture::ChildPath::new(self.repo.join(path))
    }

    /// A CLI command running in the repository root, with colors off.
    #[allow(dead_code)]
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("contributors");
        cmd.current_dir(self.path())
            .env_remove("CONTRIBUTORS_PACKAGE")
            .env_remove("CONTRIBUTORS_PROPERTY")
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never");
        cmd
    }

    fn git(&self, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .env("GIT_COMMITTER_NAME", "Test Committer")
            .env("GIT_COMMITTER_EMAIL", "committer@example.com")
            .status()
            .expect("Failed to run git");
        assert!(status.success(), "git {:?} failed", args);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
