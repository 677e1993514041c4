//! Default values for contributors configuration.
//!
//! This module provides centralized default values used by the library and
//! the CLI, ensuring consistency and avoiding duplication.

/// File name searched for when no package path is given.
pub const PACKAGE_FILE_NAME: &str = "package.json";

/// Property of the package record that holds the contributor list.
pub const DEFAULT_PROPERTY: &str = "contributors";

/// Collation locale used to sort contributors.
pub const DEFAULT_LOCALE: &str = "en";

/// Key of the configuration block inside `package.json`.
pub const PACKAGE_CONFIG_KEY: &str = "contributorsConfig";

/// `git log` pretty format emitting one `Name <email>` line per commit.
///
/// `%aN`/`%aE` respect `.mailmap`.
pub const GIT_LOG_FORMAT: &str = "%aN <%aE>";

/// Indentation used when the existing package file gives no hint.
pub const DEFAULT_INDENT: &str = "  ";
