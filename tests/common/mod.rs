//! Shared test utilities for the E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_git_repo("dir-1").with_dir("dir-2");
//!     fixture.command(&["dir-1", "dir-2"]).arg("--command").arg("status");
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::TestFixture;
}

/// Run git in `dir`, panicking when it fails.
fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// A temporary base directory holding repository directories.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty base directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a plain directory that is not under version control.
    pub fn with_dir(self, name: &str) -> Self {
        self.temp_dir
            .child(name)
            .create_dir_all()
            .expect("Failed to create directory");
        self
    }

    /// Add a git repository with "main" as its initial branch.
    pub fn with_git_repo(self, name: &str) -> Self {
        let fixture = self.with_dir(name);
        let dir = fixture.path().join(name);
        git(&dir, &["init", "-b", "main"]);
        git(&dir, &["config", "user.email", "test@example.com"]);
        git(&dir, &["config", "user.name", "Test User"]);
        git(&dir, &["config", "commit.gpgsign", "false"]);
        fixture
    }

    /// Write a file inside one of the repositories.
    #[allow(dead_code)]
    pub fn with_file(self, repo: &str, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(repo)
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the base directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a `multi-git` command for `repos` under this base directory.
    ///
    /// `MG_*` variables from the surrounding environment are cleared so the
    /// command only sees what the test passes.
    pub fn command(&self, repos: &[&str]) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("multi-git");
        cmd.env_remove("MG_ROOT")
            .env_remove("MG_REPOS")
            .env_remove("MG_TOOL")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .env("MG_ROOT", self.path())
            .env("MG_REPOS", repos.join(","));
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
