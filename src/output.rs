//! # Output Configuration
//!
//! This module controls how the CLI reports an update: a status symbol in
//! front of each message, colored when the terminal supports it and plain
//! text otherwise.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contributors::output::{OutputConfig, Status};
//!
//! let config = OutputConfig::from_env_and_flag("auto");
//! println!("{}", config.line(Status::Success, "Wrote 2 new contributors"));
//! ```

use std::env;

use console::style;

use crate::update::Outcome;

/// Kind of message being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Warning,
    Info,
}

impl Status {
    fn symbol(self) -> &'static str {
        match self {
            Self::Success => "✔",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
        }
    }

    fn plain(self) -> &'static str {
        match self {
            Self::Success => "[OK]",
            Self::Warning => "[WARN]",
            Self::Info => "[INFO]",
        }
    }
}

impl From<Outcome> for Status {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Unchanged => Self::Info,
            Outcome::Added(_) => Self::Success,
            Outcome::Reduced(_) => Self::Warning,
        }
    }
}

/// Output configuration for controlling colors and symbols.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and symbols should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// # Behavior
    /// - `--color=always`: Force colors on (overrides NO_COLOR)
    /// - `--color=never`: Force colors off
    /// - `--color=auto`: Detect based on environment
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    /// Detect whether color output is supported based on environment.
    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Prefix `message` with the marker for `status`.
    pub fn line(&self, status: Status, message: &str) -> String {
        if !self.use_color {
            return format!("{} {}", status.plain(), message);
        }

        let symbol = match status {
            Status::Success => style(status.symbol()).green(),
            Status::Warning => style(status.symbol()).yellow(),
            Status::Info => style(status.symbol()).blue(),
        };
        format!("{} {}", symbol.force_styling(true), message)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}
