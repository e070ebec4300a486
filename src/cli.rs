//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::commands;
use multi_git::output::OutputConfig;

/// multi-git - Run one git command across many repositories
///
/// Repositories are the directories named by `--repos` (or `MG_REPOS`)
/// under the base directory given by `--root` (or `MG_ROOT`).
#[derive(Parser, Debug)]
#[command(name = "multi-git")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
pub struct Cli {
    /// Optional subcommand; without one, the command is run in every repository
    #[command(subcommand)]
    subcommand: Option<Commands>,

    #[command(flatten)]
    run: commands::run::RunArgs,

    /// Colorize output (always, never, auto)
    #[arg(
        long,
        global = true,
        value_name = "WHEN",
        default_value = "auto",
        value_parser = ["always", "never", "auto"]
    )]
    color: String,

    /// Set log level (off, error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::new()
            .filter_level(self.log_level)
            .parse_default_env()
            .format_timestamp(None)
            .init();

        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.subcommand {
            Some(Commands::Completions(args)) => commands::completions::execute(args),
            None => commands::run::execute(self.run, &output),
        }
    }
}
