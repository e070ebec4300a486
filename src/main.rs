//! # multi-git CLI
//!
//! This is the binary entry point for the `multi-git` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments and `MG_*` environment variables using `clap`.
//! - Executing the batch run (or a subcommand) based on the parsed arguments.
//! - Handling top-level application errors and translating them into user-friendly
//!   output.
//!
//! The core logic lives in the `multi_git` library crate; the binary is a thin
//! wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
