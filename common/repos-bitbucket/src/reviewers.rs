//! Default reviewers lookup

use crate::DEFAULT_REVIEWERS_PREFIX;
use crate::client::BitbucketClient;
use crate::transport::HttpTransport;
use anyhow::{Context, Result};
use serde::Deserialize;

/// A user the server's default reviewer conditions would assign
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DefaultReviewer {
    pub name: String,
}

impl<T: HttpTransport> BitbucketClient<T> {
    /// Get the default reviewers for a pull request from `branch` into itself
    ///
    /// Source and target repository are both `repo_id`; source and target ref
    /// are both `branch`.
    pub async fn get_default_reviewers(
        &self,
        project: &str,
        repo_slug: &str,
        repo_id: u64,
        branch: &str,
    ) -> Result<Vec<DefaultReviewer>> {
        let path = format!(
            "{prefix}/projects/{project}/repos/{repo_slug}/reviewers\
             ?sourceRepoId={repo_id}&sourceRefId={branch}\
             &targetRepoId={repo_id}&targetRefId={branch}",
            prefix = DEFAULT_REVIEWERS_PREFIX,
        );

        let response = self.get(&path).await?;
        serde_json::from_value(response.json).context("Failed to parse default reviewers")
    }
}
