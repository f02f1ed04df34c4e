//! Common git utilities and shared helpers

use colored::*;

/// Logger for per-repository operator output
///
/// Each message is prefixed with the repository name in cyan/bold.
///
/// ## Example
///
/// ```rust,no_run
/// use bbs_repos::git::Logger;
///
/// let logger = Logger::default();
/// logger.info("PRJ/my-repo", "Starting operation");
/// logger.success("PRJ/my-repo", "Operation completed");
/// ```
#[derive(Default)]
pub struct Logger;

impl Logger {
    pub fn info(&self, name: &str, msg: &str) {
        println!("{} | {}", name.cyan().bold(), msg);
    }

    pub fn success(&self, name: &str, msg: &str) {
        println!("{} | {}", name.cyan().bold(), msg.green());
    }

    pub fn warn(&self, name: &str, msg: &str) {
        println!("{} | {}", name.cyan().bold(), msg.yellow());
    }

    pub fn error(&self, name: &str, msg: &str) {
        eprintln!("{} | {}", name.cyan().bold(), msg.red());
    }
}
