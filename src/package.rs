//! # Package Records
//!
//! Reading, locating and rewriting the `package.json`-style metadata file.
//!
//! The record is held as an order-preserving `serde_json::Map`, so properties
//! this tool knows nothing about survive a rewrite untouched and in their
//! original order. When written back, the file keeps the indentation it was
//! found with and ends in a newline.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value as JsonValue};

use crate::defaults::{DEFAULT_INDENT, PACKAGE_FILE_NAME};
use crate::error::{Error, Result};

/// Find the nearest `package.json`, starting at `start` and walking up to
/// the filesystem root.
pub fn find(start: &Path) -> Result<PathBuf> {
    let start = std::path::absolute(start)?;
    for dir in start.ancestors() {
        let candidate = dir.join(PACKAGE_FILE_NAME);
        if candidate.is_file() {
            debug!("found {}", candidate.display());
            return Ok(candidate);
        }
    }
    Err(Error::PackageNotFound { start })
}

/// A parsed package file plus what is needed to write it back faithfully.
#[derive(Debug, Clone)]
pub struct Package {
    path: PathBuf,
    source: String,
    record: Map<String, JsonValue>,
    indent: String,
}

impl Package {
    /// Read and parse the package file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, source)
    }

    /// Parse `source` as the contents of the package file at `path`.
    pub fn parse(path: &Path, source: String) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(&source).map_err(|e| Error::PackageParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let JsonValue::Object(record) = value else {
            return Err(Error::PackageParse {
                path: path.to_path_buf(),
                message: "top-level value is not an object".to_string(),
            });
        };

        Ok(Self {
            path: path.to_path_buf(),
            indent: detect_indent(&source),
            source,
            record,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the package file.
    pub fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// File contents as they were read.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn record(&self) -> &Map<String, JsonValue> {
        &self.record
    }

    /// Length of the list at `property`, or 0 if it is missing or not a list.
    pub fn list_len(&self, property: &str) -> usize {
        self.record
            .get(property)
            .and_then(JsonValue::as_array)
            .map_or(0, Vec::len)
    }

    /// Replace `property` with `items`, keeping its position if it exists.
    pub fn set_list(&mut self, property: &str, items: &[String]) {
        let list = items.iter().cloned().map(JsonValue::String).collect();
        self.record.insert(property.to_string(), JsonValue::Array(list));
    }

    /// Serialize the record with the detected indent and a trailing newline.
    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(self.indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.record
            .serialize(&mut serializer)
            .map_err(std::io::Error::from)?;

        let mut text = String::from_utf8(buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        text.push('\n');
        Ok(text)
    }

    /// Write the record to `target` and return the text written.
    pub fn write_to(&self, target: &Path) -> Result<String> {
        let text = self.to_json_string()?;
        fs::write(target, &text).map_err(|source| Error::Write {
            path: target.to_path_buf(),
            source,
        })?;
        debug!("wrote {} bytes to {}", text.len(), target.display());
        Ok(text)
    }
}

/// Indentation of the first indented line, or two spaces.
fn detect_indent(source: &str) -> String {
    source
        .lines()
        .find_map(|line| {
            let indent: String = line
                .chars()
                .take_while(|c| *c == ' ' || *c == '\t')
                .collect();
            let is_content = indent.len() < line.len();
            (!indent.is_empty() && is_content).then_some(indent)
        })
        .map(|indent| {
            if indent.starts_with('\t') {
                "\t".to_string()
            } else {
                indent
            }
        })
        .unwrap_or_else(|| DEFAULT_INDENT.to_string())
}
