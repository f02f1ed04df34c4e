//! Bitbucket Server workflows
//!
//! - [`source`]: List the repositories a server knows about
//! - [`push`]: Push a branch and open a pull request for it
//!
//! The HTTP side lives in the `repos-bitbucket` crate; these modules combine
//! it with [`Settings`](crate::config::Settings) and the local git checkout.

pub mod push;
pub mod source;

pub use push::{PullRequestPublisher, push, push_from, resolve_default_reviewers};
pub use source::{list_repos, list_repos_with};
