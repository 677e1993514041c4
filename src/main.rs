//! # Contributors CLI
//!
//! This is the binary entry point for the `contributors` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging and output styling.
//! - Handling top-level errors and translating them into a non-zero exit.
//!
//! The core logic lives in the `contributors` library crate, so the binary
//! stays a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
