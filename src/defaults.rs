//! Default values and environment variable names for multi-git.
//!
//! This module provides centralized defaults used by the library and the
//! command-line front end, ensuring consistency and avoiding duplication.

/// Executable run in each repository unless overridden.
pub const DEFAULT_TOOL: &str = "git";

/// Environment variable holding the base directory of the repositories.
pub const ROOT_ENV: &str = "MG_ROOT";

/// Environment variable holding the comma-separated repository names.
pub const REPOS_ENV: &str = "MG_REPOS";

/// Environment variable overriding the executable.
pub const TOOL_ENV: &str = "MG_TOOL";

/// Separator between repository names in `MG_REPOS` and `--repos`.
pub const REPO_SEPARATOR: char = ',';
