//! Git operations using system git commands
//!
//! ## Sub-modules
//!
//! - [`runner`]: The [`GitRunner`] seam and its system implementation
//! - [`pull_request`]: Operations the pull request workflow needs
//!   - `remote_url()` - URL of the `origin` remote
//!   - `push_head()` - Push `HEAD` to a named branch
//!   - `last_commit_subject()` / `last_commit_body()` - Latest commit message
//!   - `target_branch()` - Upstream branch of the current branch
//! - [`clone`]: Cloning listed repositories
//! - [`common`]: `Logger` for consistent per-repository output

pub mod clone;
pub mod common;
pub mod pull_request;
pub mod runner;

pub use clone::clone_repository;
pub use common::Logger;
pub use pull_request::{
    last_commit_body, last_commit_subject, push_head, remote_url, target_branch,
};
pub use runner::{GitRunner, SystemGit};
