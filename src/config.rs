//! # Configuration
//!
//! Settings for a contributors run come from up to four places, highest
//! precedence first:
//!
//! 1. Command-line flags.
//! 2. A JSON config file passed with `--config`.
//! 3. The `contributorsConfig` block of the package file being updated.
//! 4. Built-in defaults (see [`crate::defaults`]).
//!
//! Each source is read into a [`Config`] whose fields are all optional, and
//! sources are combined with [`Config::merge`]. Accessors such as
//! [`Config::property`] fill in defaults for anything left unset.
//!
//! ## Example config file
//!
//! ```json
//! {
//!   "exclude": ["Release Bot <bot@example.com>"],
//!   "property": "contributors",
//!   "sensitivity": "accent"
//! }
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::Deserialize;

use crate::collate::{Collator, Sensitivity};
use crate::defaults::{DEFAULT_LOCALE, DEFAULT_PROPERTY, PACKAGE_CONFIG_KEY};
use crate::error::{Error, Result};
use crate::package::Package;

/// One layer of settings. `None` means "not set at this layer".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Identities to leave out. When unset, the package author is excluded.
    #[serde(alias = "blacklist")]
    pub exclude: Option<Vec<String>>,
    /// Package file to update. When unset, the nearest one is used.
    #[serde(alias = "pkg")]
    pub package: Option<PathBuf>,
    /// Property holding the contributor list.
    pub property: Option<String>,
    /// Alternate file to write the updated record to.
    #[serde(alias = "out")]
    pub output_file: Option<PathBuf>,
    pub locale: Option<String>,
    pub sensitivity: Option<Sensitivity>,
}

impl Config {
    /// Load a config file. Relative paths inside it are resolved against the
    /// file's own directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base))
    }

    /// Read the `contributorsConfig` block of a package record, if present.
    ///
    /// A block that is not an object is skipped with a warning. A `package`
    /// entry inside the block is ignored since the block already lives in
    /// the package being updated.
    pub fn from_package(package: &Package) -> Result<Option<Self>> {
        let Some(block) = package.record().get(PACKAGE_CONFIG_KEY) else {
            return Ok(None);
        };
        if !block.is_object() {
            warn!(
                "ignoring non-object \"{}\" in {}",
                PACKAGE_CONFIG_KEY,
                package.path().display()
            );
            return Ok(None);
        }

        let mut config = Self::deserialize(block).map_err(|e| Error::ConfigParse {
            path: package.path().to_path_buf(),
            message: format!("\"{}\": {}", PACKAGE_CONFIG_KEY, e),
        })?;
        if config.package.take().is_some() {
            warn!(
                "ignoring \"package\" in \"{}\" of {}",
                PACKAGE_CONFIG_KEY,
                package.path().display()
            );
        }
        Ok(Some(config.relative_to(package.dir())))
    }

    /// Fill every unset field from `lower`.
    pub fn merge(self, lower: Self) -> Self {
        Self {
            exclude: self.exclude.or(lower.exclude),
            package: self.package.or(lower.package),
            property: self.property.or(lower.property),
            output_file: self.output_file.or(lower.output_file),
            locale: self.locale.or(lower.locale),
            sensitivity: self.sensitivity.or(lower.sensitivity),
        }
    }

    fn relative_to(mut self, base: &Path) -> Self {
        self.package = self.package.map(|p| base.join(p));
        self.output_file = self.output_file.map(|p| base.join(p));
        self
    }

    /// Explicit exclusions, if any layer set them.
    pub fn exclude_set(&self) -> Option<BTreeSet<String>> {
        self.exclude
            .as_ref()
            .map(|list| list.iter().cloned().collect())
    }

    pub fn property(&self) -> &str {
        self.property.as_deref().unwrap_or(DEFAULT_PROPERTY)
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    pub fn sensitivity(&self) -> Sensitivity {
        self.sensitivity.unwrap_or_default()
    }

    /// Collator for the configured locale and sensitivity. Fails on a
    /// malformed locale tag.
    pub fn collator(&self) -> Result<Collator> {
        Collator::new(self.locale(), self.sensitivity())
    }
}
