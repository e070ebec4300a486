//! # Output Configuration
//!
//! This module controls how a batch report is printed: whether colors and
//! emojis are used, and how the per-repository header line looks.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ## Usage
//!
//! ```rust,ignore
//! use multi_git::output::{repo_header, OutputConfig};
//!
//! let config = OutputConfig::from_env_and_flag("auto");
//! for entry in &report {
//!     println!("{}", repo_header(&config, entry, "git", "status"));
//!     println!("{}", entry.output);
//! }
//! ```

use std::env;
use std::path::Path;

use console::style;

use crate::repo_manager::RepoOutput;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// # Arguments
    /// * `color_flag` - The value of the --color CLI flag: "always", "never", or "auto"
    ///
    /// In auto mode, colors are disabled if:
    /// - `NO_COLOR` environment variable is set (any value, including empty)
    /// - `CLICOLOR=0` is set
    /// - `TERM=dumb` is set
    /// - stdout is not a TTY (unless `CLICOLOR_FORCE=1`)
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns the emoji when colors are enabled, otherwise the plain text.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

/// Short name shown for a repository: the last path component.
pub fn repo_name(repo: &Path) -> String {
    repo.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| repo.display().to_string())
}

/// Header printed above the output of one repository.
///
/// Without color this is `[<name>]: <tool> <command>`. With color the name
/// is green or red depending on the outcome and a status emoji follows.
pub fn repo_header(config: &OutputConfig, entry: &RepoOutput, tool: &str, command: &str) -> String {
    let name = format!("[{}]", repo_name(&entry.repo));
    if !config.use_color {
        return format!("{}: {} {}", name, tool, command);
    }

    let (name, mark) = if entry.success {
        (style(name).green().bold(), "✅")
    } else {
        (style(name).red().bold(), "❌")
    };
    format!(
        "{}: {} {} {}",
        name.force_styling(true),
        style(tool).dim().force_styling(true),
        command,
        mark
    )
}

/// Final line printed once every repository has been reported.
pub fn done_line(config: &OutputConfig) -> String {
    format!("{}Done.", emoji(config, "🏁 ", ""))
}
