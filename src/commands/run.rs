//! # Batch Run Implementation
//!
//! This module implements the default mode of `multi-git`: run one command
//! in every configured repository and print each repository's output under
//! a `[<name>]: <tool> <command>` header, followed by `Done.`.
//!
//! Output is printed for every repository that was attempted, even when the
//! run failed. A failure is then reported on stderr and the process exits
//! with status 1.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use log::debug;

use multi_git::defaults::{DEFAULT_TOOL, REPOS_ENV, REPO_SEPARATOR, ROOT_ENV, TOOL_ENV};
use multi_git::output::{done_line, repo_header, OutputConfig};
use multi_git::repo_manager::{ExecReport, RepoManager};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// The command to run, e.g. "status" or 'commit -m "first commit"'
    #[arg(short, long, value_name = "CMD", required = true, allow_hyphen_values = true)]
    pub command: Option<String>,

    /// Keep running the remaining repositories after one fails
    #[arg(long)]
    pub ignore_errors: bool,

    /// Base directory containing the repositories
    #[arg(long, value_name = "DIR", env = ROOT_ENV, required = true)]
    pub root: Option<PathBuf>,

    /// Comma-separated names of the repositories under the base directory
    #[arg(long, value_name = "NAMES", env = REPOS_ENV)]
    pub repos: Option<String>,

    /// Executable to run in each repository
    #[arg(long, value_name = "EXE", env = TOOL_ENV, default_value = DEFAULT_TOOL)]
    pub tool: String,
}

impl RunArgs {
    /// Repository names from `--repos`; an empty value means no repositories.
    pub fn repo_names(&self) -> Vec<String> {
        match self.repos.as_deref() {
            None | Some("") => Vec::new(),
            Some(repos) => repos.split(REPO_SEPARATOR).map(str::to_string).collect(),
        }
    }
}

/// Execute the batch run.
pub fn execute(args: RunArgs, output: &OutputConfig) -> Result<()> {
    let repos = args.repo_names();
    let command = args.command.context("no command given")?;
    let root = args.root.context("no base directory given")?;
    debug!("Base directory {}, repositories {:?}", root.display(), repos);

    let manager = RepoManager::new(&root, &repos, args.ignore_errors)?.with_tool(&args.tool);
    let report = manager.exec(&command)?;

    print_report(&report, manager.tool(), &command, output);

    report.into_result()?;
    Ok(())
}

fn print_report(report: &ExecReport, tool: &str, command: &str, output: &OutputConfig) {
    for entry in report {
        println!("{}", repo_header(output, entry, tool, command));
        println!("{}", entry.output);
    }
    println!("{}", done_line(output));
}
