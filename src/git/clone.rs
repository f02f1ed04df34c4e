//! Git clone operations
//!
//! Clones repositories reported by the server into a local directory tree.

use super::common::Logger;
use super::runner::{GitRunner, SystemGit};
use anyhow::{Context, Result};
use std::path::Path;

/// Clone `url` into `target_dir`, skipping directories that already exist
pub fn clone_repository(name: &str, url: &str, target_dir: &Path) -> Result<()> {
    let logger = Logger;

    // Check if directory already exists
    if target_dir.exists() {
        logger.warn(name, "Repository directory already exists, skipping");
        return Ok(());
    }

    if let Some(parent) = target_dir.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    logger.info(name, &format!("Cloning from {}", url));

    let target = target_dir.to_string_lossy();
    SystemGit::current_dir()
        .run(&["clone", "--quiet", url, &target])
        .context("Failed to clone repository")?;

    logger.success(name, "Successfully cloned");
    Ok(())
}
