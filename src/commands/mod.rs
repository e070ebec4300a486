//! # CLI Command Implementations
//!
//! This module contains the implementation of each mode of the `multi-git`
//! command-line tool, one file per mode.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and calls into the
//!   `multi_git` library to do the work.

pub mod completions;
pub mod run;
