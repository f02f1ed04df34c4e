//! Bitbucket Server API client library
//!
//! This library provides the HTTP plumbing shared by the repos tooling for
//! Bitbucket Server: repository listing, default reviewer lookup and pull
//! request creation.
//!
//! ## Modules
//!
//! - [`transport`]: Narrow HTTP transport trait and its reqwest implementation
//! - [`client`]: Bitbucket Server client built on a transport
//! - [`repositories`]: Repository listing and lookup
//! - [`reviewers`]: Default reviewer lookup
//! - [`pull_requests`]: Pull request payloads and creation
//! - [`util`]: Authorization header and remote URL helpers

mod client;
mod pull_requests;
mod repositories;
mod reviewers;
mod transport;
mod util;

// Re-export public API
pub use client::{BitbucketClient, Response};
pub use pull_requests::{
    CreatePullRequestPayload, ProjectKey, PullRequestRef, RefRepository, ReviewerEntry,
    ReviewerUser,
};
pub use repositories::RepositoryInfo;
pub use reviewers::DefaultReviewer;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, ReqwestTransport};
pub use util::{auth_header, parse_remote_url};

/// REST prefix of the core API
pub const API_PREFIX: &str = "/rest/api/1.0";

/// REST prefix of the default reviewers plugin API
pub const DEFAULT_REVIEWERS_PREFIX: &str = "/rest/default-reviewers/1.0";

/// Page size requested when listing repositories
pub const LIST_LIMIT: u32 = 1000;
