//! Pull request operations

use crate::API_PREFIX;
use crate::client::{BitbucketClient, Response};
use crate::transport::HttpTransport;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Body of `POST /projects/{project}/repos/{slug}/pull-requests`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePullRequestPayload {
    pub title: String,
    pub description: String,
    pub state: String,
    pub open: bool,
    pub closed: bool,
    pub draft: bool,
    pub from_ref: PullRequestRef,
    pub to_ref: PullRequestRef,
    pub locked: bool,
    pub reviewers: Vec<ReviewerEntry>,
}

impl CreatePullRequestPayload {
    /// An open, unlocked pull request from `from_ref` into `to_ref`
    pub fn open(
        title: impl Into<String>,
        description: impl Into<String>,
        draft: bool,
        from_ref: PullRequestRef,
        to_ref: PullRequestRef,
        reviewers: Vec<ReviewerEntry>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            state: "OPEN".to_string(),
            open: true,
            closed: false,
            draft,
            from_ref,
            to_ref,
            locked: false,
            reviewers,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PullRequestRef {
    pub id: String,
    pub repository: RefRepository,
}

impl PullRequestRef {
    pub fn new(id: impl Into<String>, project: &str, repo_slug: &str) -> Self {
        Self {
            id: id.into(),
            repository: RefRepository {
                slug: repo_slug.to_string(),
                project: ProjectKey {
                    key: project.to_string(),
                },
            },
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RefRepository {
    pub slug: String,
    pub project: ProjectKey,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectKey {
    pub key: String,
}

/// Reviewer as the pull request endpoint expects it: `{"user": {"name": ...}}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewerEntry {
    pub user: ReviewerUser,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewerUser {
    pub name: String,
}

impl ReviewerEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            user: ReviewerUser { name: name.into() },
        }
    }
}

impl<T: HttpTransport> BitbucketClient<T> {
    /// Create a pull request in `project/repo_slug`
    ///
    /// # Errors
    /// Returns an error if the request fails or the server answers with a
    /// non-success status.
    pub async fn create_pull_request(
        &self,
        project: &str,
        repo_slug: &str,
        payload: &CreatePullRequestPayload,
    ) -> Result<Response> {
        let path = format!(
            "{}/projects/{}/repos/{}/pull-requests",
            API_PREFIX, project, repo_slug
        );
        let response = self.post_json(&path, payload).await?;
        info!(
            "Created pull request '{}' in {}/{}",
            payload.title, project, repo_slug
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_shape() {
        let payload = CreatePullRequestPayload::open(
            "Fix things",
            "Longer text",
            true,
            PullRequestRef::new("my-branch", "PRJ", "repo"),
            PullRequestRef::new("main", "PRJ", "repo"),
            vec![ReviewerEntry::new("alice")],
        );

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Fix things",
                "description": "Longer text",
                "state": "OPEN",
                "open": true,
                "closed": false,
                "draft": true,
                "fromRef": {
                    "id": "my-branch",
                    "repository": {"slug": "repo", "project": {"key": "PRJ"}}
                },
                "toRef": {
                    "id": "main",
                    "repository": {"slug": "repo", "project": {"key": "PRJ"}}
                },
                "locked": false,
                "reviewers": [{"user": {"name": "alice"}}]
            })
        );
    }

    #[test]
    fn test_payload_field_order() {
        let payload = CreatePullRequestPayload::open(
            "t",
            "d",
            false,
            PullRequestRef::new("a", "P", "r"),
            PullRequestRef::new("b", "P", "r"),
            vec![],
        );
        let text = serde_json::to_string(&payload).unwrap();
        let title = text.find("\"title\"").unwrap();
        let from_ref = text.find("\"fromRef\"").unwrap();
        let reviewers = text.find("\"reviewers\"").unwrap();
        assert!(title < from_ref && from_ref < reviewers);
    }
}
