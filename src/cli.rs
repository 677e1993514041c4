//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::Parser;

use contributors::output::OutputConfig;

use crate::commands;

/// Write the contributors found in git history to package.json
#[derive(Parser, Debug)]
#[command(name = "contributors")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    update: commands::update::UpdateArgs,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let output = OutputConfig::from_env_and_flag(&self.color);

        commands::update::execute(self.update, &output)
    }
}

/// `RUST_LOG`, when set, takes precedence over `--log-level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
