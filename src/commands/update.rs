//! # Update Command Implementation
//!
//! Collects contributors from the git history around the package file and
//! records them in it.
//!
//! ## Functionality
//!
//! - **Package Resolution**: `--package` names the file to update. Without
//!   it the nearest `package.json` above the current directory is used.
//!
//! - **Exclusions**: `--exclude` (repeatable) lists identities to leave out.
//!   Without it the package `author` is excluded.
//!
//! - **Configuration**: Flags override a `--config` JSON file, which in turn
//!   overrides the package's `contributorsConfig` block.
//!
//! - **Reporting**: Prints whether contributors were added, the count
//!   shrank, or nothing changed. All three exit successfully.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use contributors::collate::Sensitivity;
use contributors::config::Config;
use contributors::output::OutputConfig;
use contributors::update::update;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Exclude an author/email from the list (repeatable).
    ///
    /// Defaults to the author in package.json. Pass the flag with no value
    /// to exclude nobody.
    #[arg(
        short = 'x',
        long,
        visible_alias = "blacklist",
        visible_short_alias = 'b',
        value_name = "IDENTITY",
        num_args = 0..
    )]
    pub exclude: Option<Vec<String>>,

    /// Path of the package.json to update.
    ///
    /// Defaults to the closest package.json.
    #[arg(
        short,
        long,
        visible_alias = "pkg",
        value_name = "FILE",
        env = "CONTRIBUTORS_PACKAGE"
    )]
    pub package: Option<PathBuf>,

    /// Name of the property to update [default: contributors]
    #[arg(long, value_name = "NAME", env = "CONTRIBUTORS_PROPERTY")]
    pub property: Option<String>,

    /// Write the updated package.json here instead of in place.
    #[arg(short, long, visible_alias = "out", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Locale used to sort contributors, as a BCP 47 tag such as sv or de-DE
    /// [default: en]
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Which differences count when sorting: base, accent or variant
    /// [default: accent]
    #[arg(long, value_name = "LEVEL")]
    pub sensitivity: Option<Sensitivity>,

    /// JSON file with default values for any of these options.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl UpdateArgs {
    fn to_config(&self) -> Config {
        Config {
            exclude: self.exclude.clone(),
            package: self.package.clone(),
            property: self.property.clone(),
            output_file: self.output_file.clone(),
            locale: self.locale.clone(),
            sensitivity: self.sensitivity,
        }
    }
}

/// Execute the update.
pub fn execute(args: UpdateArgs, output: &OutputConfig) -> Result<()> {
    let cwd = env::current_dir().context("Failed to read current directory")?;

    let file_config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    let config = args.to_config().merge(file_config);

    let report = update(&cwd, &config)?;
    println!("{}", output.line(report.outcome.into(), &report.to_string()));

    Ok(())
}
