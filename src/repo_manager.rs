//! # Repository Batch Executor
//!
//! [`RepoManager`] resolves a list of repository names against a base
//! directory and runs one tool command in each of them, in order.
//!
//! ## Execution
//!
//! Each repository gets its own child process with the repository as the
//! child's working directory. The working directory of the calling process
//! is never changed, so a `RepoManager` can be shared between threads and
//! the caller's directory is the same before and after [`RepoManager::exec`].
//!
//! The output of every repository that was attempted ends up in the
//! returned [`ExecReport`], failures included. What happens after a failure
//! depends on the ignore-errors policy:
//!
//! - `false`: stop at the first failure. The report holds the repositories
//!   processed so far and a [`Error::ToolInvocation`] for the failed one.
//! - `true`: keep going. If any repository failed, the report carries a
//!   [`Error::RepositoriesFailed`] naming all of them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, info, warn};

use crate::command::CommandLine;
use crate::defaults::DEFAULT_TOOL;
use crate::error::{Error, Result};

/// Runs a command across a fixed, ordered set of repositories.
#[derive(Debug, Clone)]
pub struct RepoManager {
    repos: Vec<PathBuf>,
    ignore_errors: bool,
    tool: String,
}

impl RepoManager {
    /// Validate `base_dir` and `repo_names` and resolve the repository paths.
    ///
    /// Fails with [`Error::BaseDirNotFound`] when `base_dir` does not exist,
    /// [`Error::EmptyRepoList`] when no names are given and
    /// [`Error::EmptyRepoName`] when any name is empty. Nothing is spawned
    /// and no directory is touched on failure.
    pub fn new<S: AsRef<str>>(
        base_dir: impl AsRef<Path>,
        repo_names: &[S],
        ignore_errors: bool,
    ) -> Result<Self> {
        let base_dir = base_dir.as_ref();

        if let Err(e) = fs::metadata(base_dir) {
            return Err(match e.kind() {
                io::ErrorKind::NotFound => Error::BaseDirNotFound {
                    path: base_dir.to_path_buf(),
                },
                _ => Error::Io(e),
            });
        }

        let base_dir = std::path::absolute(base_dir)?;

        if repo_names.is_empty() {
            return Err(Error::EmptyRepoList);
        }

        let repos = repo_names
            .iter()
            .map(|name| match name.as_ref() {
                "" => Err(Error::EmptyRepoName),
                name => Ok(repo_path(&base_dir, name)),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            repos,
            ignore_errors,
            tool: DEFAULT_TOOL.to_string(),
        })
    }

    /// Use `tool` instead of `git` as the executable.
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    /// The resolved repository paths, in the order they will be visited.
    pub fn repos(&self) -> &[PathBuf] {
        &self.repos
    }

    pub fn ignore_errors(&self) -> bool {
        self.ignore_errors
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Run `command` in every repository.
    ///
    /// Returns `Err` only when `command` cannot be tokenized, before any
    /// process is started. Failures of the tool itself are reported through
    /// [`ExecReport::error`] alongside the output collected so far.
    pub fn exec(&self, command: &str) -> Result<ExecReport> {
        let command = CommandLine::parse(command)?;
        let mut report = ExecReport::default();
        let mut failed = Vec::new();

        for repo in &self.repos {
            debug!("Running `{} {}` in {}", self.tool, command, repo.display());

            let (output, failure) = self.run_in(repo, &command);
            let success = failure.is_none();
            report.entries.push(RepoOutput {
                repo: repo.clone(),
                output,
                success,
            });

            let Some(message) = failure else {
                continue;
            };
            warn!(
                "`{} {}` failed in {}: {}",
                self.tool,
                command,
                repo.display(),
                message
            );

            if !self.ignore_errors {
                report.error = Some(Error::ToolInvocation {
                    tool: self.tool.clone(),
                    repo: repo.clone(),
                    message,
                });
                return Ok(report);
            }
            failed.push(repo.clone());
        }

        info!(
            "Ran `{} {}` in {} repositories ({} failed)",
            self.tool,
            command,
            report.len(),
            failed.len()
        );

        if !failed.is_empty() {
            report.error = Some(Error::RepositoriesFailed { repos: failed });
        }

        Ok(report)
    }

    /// Run the tool once inside `repo`, returning the combined output and a
    /// failure message when the run did not succeed.
    fn run_in(&self, repo: &Path, command: &CommandLine) -> (String, Option<String>) {
        let output = match Command::new(&self.tool)
            .args(command.args())
            .current_dir(repo)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                let message = format!("could not run {}: {}", self.tool, e);
                return (message.clone(), Some(message));
            }
        };

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        let failure = (!output.status.success()).then(|| output.status.to_string());
        (combined, failure)
    }
}

/// Append `name` under `base`, even when `name` is absolute.
fn repo_path(base: &Path, name: &str) -> PathBuf {
    let mut path = base.as_os_str().to_os_string();
    if !base.as_os_str().to_string_lossy().ends_with(std::path::is_separator) {
        path.push(std::path::MAIN_SEPARATOR_STR);
    }
    path.push(name.trim_start_matches(std::path::is_separator));
    PathBuf::from(path)
}

/// The captured output of one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoOutput {
    /// Absolute path of the repository.
    pub repo: PathBuf,
    /// Standard output followed by standard error; the two streams are not interleaved.
    pub output: String,
    /// Whether the tool started and exited successfully.
    pub success: bool,
}

/// Output of a batch run, in the order the repositories were visited.
#[derive(Debug, Default)]
pub struct ExecReport {
    entries: Vec<RepoOutput>,
    error: Option<Error>,
}

impl ExecReport {
    /// Number of repositories that were attempted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RepoOutput> {
        self.entries.iter()
    }

    /// Output captured for `repo`, if it was attempted. A repository listed
    /// more than once yields the output of its last run.
    pub fn get(&self, repo: impl AsRef<Path>) -> Option<&str> {
        let repo = repo.as_ref();
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.repo == repo)
            .map(|entry| entry.output.as_str())
    }

    /// Paths of the attempted repositories.
    pub fn repos(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|entry| entry.repo.as_path())
    }

    /// Paths of the repositories where the tool failed.
    pub fn failed(&self) -> impl Iterator<Item = &Path> {
        self.entries
            .iter()
            .filter(|entry| !entry.success)
            .map(|entry| entry.repo.as_path())
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Split the report into its outputs, or the error if there was one.
    pub fn into_result(self) -> Result<Vec<RepoOutput>> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.entries),
        }
    }
}

impl<'a> IntoIterator for &'a ExecReport {
    type Item = &'a RepoOutput;
    type IntoIter = std::slice::Iter<'a, RepoOutput>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
