//! Clone command implementation

use super::{Command, CommandContext};
use crate::{bitbucket, git};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use std::path::PathBuf;

/// Clone command for cloning every listed repository
pub struct CloneCommand {
    /// Directory the `<project>/<repo>` tree is created under
    pub output_dir: PathBuf,
}

#[async_trait]
impl Command for CloneCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let repositories = bitbucket::list_repos(&context.settings).await?;

        if repositories.is_empty() {
            println!("{}", "No repositories found".yellow());
            return Ok(());
        }

        println!(
            "{}",
            format!("Cloning {} repositories...", repositories.len()).green()
        );

        let mut errors = Vec::new();
        let mut successful = 0;

        if context.parallel {
            let tasks: Vec<_> = repositories
                .into_iter()
                .map(|(name, url)| {
                    let target = self.output_dir.join(&name);
                    tokio::spawn(async move {
                        let result = tokio::task::spawn_blocking({
                            let name = name.clone();
                            move || git::clone_repository(&name, &url, &target)
                        })
                        .await?;
                        Ok::<_, anyhow::Error>((name, result))
                    })
                })
                .collect();

            for task in tasks {
                match task.await? {
                    Ok((_, Ok(_))) => successful += 1,
                    Ok((name, Err(e))) => {
                        git::Logger.error(&name, &format!("Error: {e}"));
                        errors.push((name, e));
                    }
                    Err(e) => {
                        eprintln!("{}", format!("Task error: {e}").red());
                        errors.push(("unknown".to_string(), e));
                    }
                }
            }
        } else {
            for (name, url) in repositories {
                let target = self.output_dir.join(&name);
                match tokio::task::spawn_blocking({
                    let name = name.clone();
                    move || git::clone_repository(&name, &url, &target)
                })
                .await?
                {
                    Ok(_) => successful += 1,
                    Err(e) => {
                        git::Logger.error(&name, &format!("Error: {e}"));
                        errors.push((name, e));
                    }
                }
            }
        }

        // Report summary
        if errors.is_empty() {
            println!("{}", "Done cloning repositories".green());
        } else {
            println!(
                "{}",
                format!(
                    "Completed with {} successful, {} failed",
                    successful,
                    errors.len()
                )
                .yellow()
            );

            // If all operations failed, return an error to propagate to main
            if successful == 0 {
                return Err(anyhow::anyhow!(
                    "All clone operations failed. First error: {}",
                    errors[0].1
                ));
            }
        }

        Ok(())
    }
}
