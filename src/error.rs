//! # Error Handling
//!
//! This module defines the centralized error type for `multi-git`. It uses
//! the `thiserror` library to create an `Error` enum that covers every
//! failure mode of the library, from input validation to running the
//! external tool.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. Construction errors (`BaseDirNotFound`,
//!   `EmptyRepoList`, `EmptyRepoName`) are raised before any process is
//!   spawned. `UnbalancedQuotes` is raised while tokenizing a command.
//!   `ToolInvocation` and `RepositoriesFailed` describe failures of the
//!   external tool during a batch run.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for multi-git operations
#[derive(Error, Debug)]
pub enum Error {
    /// The base directory holding the repositories does not exist.
    #[error("base dir: '{}' does not exist", path.display())]
    BaseDirNotFound { path: PathBuf },

    /// No repository names were supplied.
    #[error("repo list cannot be empty")]
    EmptyRepoList,

    /// One of the supplied repository names is the empty string.
    #[error("repo name cannot be empty")]
    EmptyRepoName,

    /// The command string opens a double-quoted span that is never closed.
    #[error("unbalanced quotes in command: {command}")]
    UnbalancedQuotes { command: String },

    /// The external tool could not be started, or exited unsuccessfully,
    /// inside a repository.
    #[error("{tool} failed in '{}': {message}", repo.display())]
    ToolInvocation {
        tool: String,
        repo: PathBuf,
        message: String,
    },

    /// One or more repositories failed while errors were being ignored.
    #[error("command failed in {} of the repositories: {}", repos.len(), display_paths(repos))]
    RepositoriesFailed { repos: Vec<PathBuf> },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
