//! bbs-repos - Repository listing and pull request automation for Bitbucket Server

pub mod bitbucket;
pub mod commands;
pub mod config;
pub mod constants;
pub mod git;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::{Config, Settings};
