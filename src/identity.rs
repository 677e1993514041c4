//! # Contributor Identities
//!
//! A contributor identity is the string `Name <email>` exactly as `git log`
//! prints it. This module parses the `author` field of a package record into
//! a [`Person`] and derives the default exclusion set from it.
//!
//! The `author` field may be written either way npm accepts:
//!
//! ```json
//! "author": "Jane Doe <jane@example.com> (https://jane.example.com)"
//! "author": { "name": "Jane Doe", "email": "jane@example.com" }
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value as JsonValue};

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([^(<]+)").unwrap());
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<([^<>]+)>").unwrap());
static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^()]+)\)").unwrap());

/// A person as recorded in a package file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub email: Option<String>,
    pub url: Option<String>,
}

impl Person {
    /// Parse the `Name <email> (url)` shorthand. Email and url are optional.
    ///
    /// Returns `None` if there is no name.
    pub fn parse(s: &str) -> Option<Self> {
        let name = NAME_RE
            .captures(s)
            .map(|c| c[1].trim().to_string())
            .filter(|n| !n.is_empty())?;
        let capture = |re: &Regex| {
            re.captures(s)
                .map(|c| c[1].trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Some(Self {
            name,
            email: capture(&EMAIL_RE),
            url: capture(&URL_RE),
        })
    }

    /// Read a person from either the string or the object form.
    pub fn from_json(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::String(s) => Self::parse(s),
            JsonValue::Object(map) => {
                let field = |key: &str| {
                    map.get(key)
                        .and_then(JsonValue::as_str)
                        .map(str::trim)
                        .filter(|v| !v.is_empty())
                        .map(str::to_string)
                };
                Some(Self {
                    name: field("name")?,
                    email: field("email"),
                    url: field("url"),
                })
            }
            _ => None,
        }
    }

    /// The identity string `git log` would print for this person.
    pub fn identity(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.email {
            Some(email) => write!(f, "{} <{}>", self.name, email),
            None => f.write_str(&self.name),
        }
    }
}

/// Exclusions used when the caller supplies none: the package author, if any.
pub fn default_exclusions(record: &Map<String, JsonValue>) -> BTreeSet<String> {
    record
        .get("author")
        .and_then(Person::from_json)
        .map(|author| author.identity())
        .into_iter()
        .collect()
}
