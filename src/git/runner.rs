//! Git command execution
//!
//! Every git operation in this crate goes through [`GitRunner`], so the
//! pull request workflow can be exercised without a real repository.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Runs `git` with the given arguments and returns its standard output
pub trait GitRunner: Send + Sync {
    fn run(&self, args: &[&str]) -> Result<String>;
}

/// [`GitRunner`] backed by the system `git` binary
#[derive(Debug, Clone)]
pub struct SystemGit {
    repo_path: PathBuf,
}

impl SystemGit {
    /// Run git inside `repo_path`
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
        }
    }

    /// Run git in the process working directory
    pub fn current_dir() -> Self {
        Self::new(".")
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str]) -> Result<String> {
        debug!("git {} (in {})", args.join(" "), self.repo_path.display());

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .with_context(|| format!("Failed to execute git {}", args.first().unwrap_or(&"")))?;

        if !output.status.success() {
            anyhow::bail!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        decode_stdout(args, output.stdout)
    }
}

/// Decode git's standard output, refusing invalid UTF-8
fn decode_stdout(args: &[&str], stdout: Vec<u8>) -> Result<String> {
    String::from_utf8(stdout).with_context(|| {
        format!(
            "git {} produced output that is not valid UTF-8",
            args.join(" ")
        )
    })
}
