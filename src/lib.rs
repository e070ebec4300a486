//! # multi-git Library
//!
//! This library runs a single version-control command across a set of local
//! repositories that live under one base directory. It backs the `multi-git`
//! command-line tool but can be used directly by other applications.
//!
//! ## Quick Example
//!
//! ```no_run
//! use multi_git::repo_manager::RepoManager;
//!
//! let manager = RepoManager::new("/home/me/src", &["api", "web"], true)?;
//! let report = manager.exec("pull --ff-only")?;
//!
//! for entry in &report {
//!     println!("{}:\n{}", entry.repo.display(), entry.output);
//! }
//! if let Some(error) = report.error() {
//!     eprintln!("{}", error);
//! }
//! # Ok::<(), multi_git::error::Error>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Tokenizer (`command`)**: Splits the command string into arguments,
//!   keeping double-quoted spans together.
//! - **Batch executor (`repo_manager`)**: Validates the base directory and
//!   repository names, then runs the tool in each repository in order,
//!   stopping at the first failure unless errors are ignored.
//! - **Errors (`error`)**: One error enum for validation, tokenizing and
//!   tool failures.
//! - **Presentation (`output`, `defaults`)**: Terminal color handling and
//!   the defaults shared with the CLI.
//!
//! Repositories are visited one at a time. Each run gets the repository as
//! its own working directory; the working directory of the calling process
//! is never changed.

pub mod command;
pub mod defaults;
pub mod error;
pub mod output;
pub mod repo_manager;

#[cfg(test)]
mod command_proptest;
