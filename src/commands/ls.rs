//! List command implementation

use super::{Command, CommandContext};
use crate::bitbucket;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// List command for displaying the repositories a server knows about
pub struct ListCommand {
    /// Output in JSON format
    pub json: bool,
}

#[async_trait]
impl Command for ListCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let repositories = bitbucket::list_repos(&context.settings).await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&repositories)?);
            return Ok(());
        }

        if repositories.is_empty() {
            let scope = match context.settings.project() {
                Some(project) => format!("in project {project}"),
                None => format!("on {}", context.settings.base_url()),
            };
            println!("{}", format!("No repositories found {scope}").yellow());
            return Ok(());
        }

        for (name, url) in &repositories {
            println!("{} {}", "•".blue(), name.bold());
            println!("  URL: {}", url);
        }
        println!();

        println!(
            "{}",
            format!("Total: {} repositories", repositories.len()).green()
        );

        Ok(())
    }
}
