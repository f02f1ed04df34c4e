//! Git operations for pull request workflows
//!
//! ## Typical PR Workflow
//!
//! 1. [`remote_url`] - Find the repository on the server
//! 2. [`push_head`] - Push the local `HEAD` to a branch on `origin`
//! 3. [`last_commit_subject`] / [`last_commit_body`] - Title and description
//! 4. [`target_branch`] - Branch the pull request goes into

use super::runner::GitRunner;
use crate::constants::git::{REMOTE, REMOTE_PREFIX};
use anyhow::{Context, Result};
use tracing::info;

/// Get the URL of the `origin` remote
pub fn remote_url(git: &dyn GitRunner) -> Result<String> {
    let output = git
        .run(&["config", "--get", "remote.origin.url"])
        .context("Failed to read the origin remote URL")?;
    Ok(output.trim().to_string())
}

/// Push the current `HEAD` to `branch_name` on `origin`
pub fn push_head(git: &dyn GitRunner, branch_name: &str) -> Result<()> {
    let refspec = format!("HEAD:{}", branch_name);
    git.run(&["push", REMOTE, &refspec, "--quiet"])
        .with_context(|| format!("Failed to push branch '{}'", branch_name))?;
    info!("Pushed HEAD to {}/{}", REMOTE, branch_name);
    Ok(())
}

/// Subject line of the most recent commit
pub fn last_commit_subject(git: &dyn GitRunner) -> Result<String> {
    Ok(git.run(&["log", "-1", "--format=%s"])?.trim().to_string())
}

/// Body of the most recent commit
pub fn last_commit_body(git: &dyn GitRunner) -> Result<String> {
    Ok(git.run(&["log", "-1", "--format=%b"])?.trim().to_string())
}

/// Branch the current branch tracks on `origin`
///
/// Uses the upstream of the current branch (`@{u}`) with the leading
/// `origin/` removed.
pub fn target_branch(git: &dyn GitRunner) -> Result<String> {
    let upstream = git
        .run(&["rev-parse", "--abbrev-ref", "--symbolic", "@{u}"])
        .context("Failed to determine the upstream branch")?;
    let upstream = upstream.trim();

    match upstream.strip_prefix(REMOTE_PREFIX) {
        Some(branch) if !branch.is_empty() => Ok(branch.to_string()),
        _ => anyhow::bail!("Upstream '{}' is not a branch on {}", upstream, REMOTE),
    }
}
