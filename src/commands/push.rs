//! Push command implementation

use super::{Command, CommandContext};
use crate::bitbucket;
use crate::git::SystemGit;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use std::path::PathBuf;

/// Push the current `HEAD` to a branch and open a pull request for it
pub struct PushCommand {
    pub branch_name: String,
    pub target_branch: Option<String>,
    /// Working copy to push from
    pub repo_path: PathBuf,
}

#[async_trait]
impl Command for PushCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        println!(
            "{}",
            format!("Pushing HEAD to '{}'...", self.branch_name).green()
        );

        let git = SystemGit::new(&self.repo_path);
        bitbucket::push_from(
            &context.settings,
            &git,
            &self.branch_name,
            self.target_branch.as_deref(),
        )
        .await?;

        Ok(())
    }
}
