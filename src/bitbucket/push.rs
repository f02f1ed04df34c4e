//! Push a branch and open a pull request for it
//!
//! The flow, one step after the other:
//! 1. Locate `project/repo` from the `origin` remote
//! 2. Push `HEAD` to the requested branch
//! 3. Use the latest commit's subject and body as title and description
//! 4. Optionally look up the default reviewers
//! 5. Create the pull request into the target branch

use crate::config::Settings;
use crate::git::{self, GitRunner, SystemGit};
use anyhow::Result;
use colored::*;
use repos_bitbucket::{
    BitbucketClient, CreatePullRequestPayload, HttpTransport, PullRequestRef, Response,
    ReviewerEntry, parse_remote_url,
};
use tracing::debug;

/// Look up the default reviewers for a pull request from `branch`
///
/// Returns an empty list without contacting the server when `enabled` is
/// false.
pub async fn resolve_default_reviewers<T: HttpTransport>(
    client: &BitbucketClient<T>,
    project: &str,
    repo_slug: &str,
    branch: &str,
    enabled: bool,
) -> Result<Vec<ReviewerEntry>> {
    if !enabled {
        return Ok(Vec::new());
    }

    let repo = client.get_repository(project, repo_slug).await?;
    let reviewers = client
        .get_default_reviewers(project, repo_slug, repo.id, branch)
        .await?;
    debug!(
        "Resolved {} default reviewers for {}/{}",
        reviewers.len(),
        project,
        repo_slug
    );

    Ok(reviewers
        .into_iter()
        .map(|reviewer| ReviewerEntry::new(reviewer.name))
        .collect())
}

/// Pushes branches from a working copy and opens pull requests for them
pub struct PullRequestPublisher<'a, T: HttpTransport> {
    client: &'a BitbucketClient<T>,
    git: &'a dyn GitRunner,
    target_branch: Option<String>,
}

impl<'a, T: HttpTransport> PullRequestPublisher<'a, T> {
    pub fn new(client: &'a BitbucketClient<T>, git: &'a dyn GitRunner) -> Self {
        Self {
            client,
            git,
            target_branch: None,
        }
    }

    /// Open pull requests into `branch` instead of the upstream branch
    pub fn with_target_branch(mut self, branch: impl Into<String>) -> Self {
        self.target_branch = Some(branch.into());
        self
    }

    /// Push `HEAD` to `branch_name` and create a pull request for it
    ///
    /// Returns the server's response to the creation request.
    pub async fn make_pull_request(
        &self,
        draft: bool,
        default_reviewers: bool,
        branch_name: &str,
    ) -> Result<Response> {
        let remote = git::remote_url(self.git)?;
        let (project, repo_slug) = parse_remote_url(&remote)?;

        git::push_head(self.git, branch_name)?;

        let title = git::last_commit_subject(self.git)?;
        let description = git::last_commit_body(self.git)?;

        let reviewers = resolve_default_reviewers(
            self.client,
            &project,
            &repo_slug,
            branch_name,
            default_reviewers,
        )
        .await?;

        let target = match &self.target_branch {
            Some(branch) => branch.clone(),
            None => git::target_branch(self.git)?,
        };

        let payload = CreatePullRequestPayload::open(
            title,
            description,
            draft,
            PullRequestRef::new(branch_name, &project, &repo_slug),
            PullRequestRef::new(target, &project, &repo_slug),
            reviewers,
        );

        self.client
            .create_pull_request(&project, &repo_slug, &payload)
            .await
    }

    /// [`make_pull_request`](Self::make_pull_request), then report the URL
    ///
    /// A response without a `self` link reports (and returns) an empty URL.
    pub async fn push_and_create_pr(
        &self,
        draft: bool,
        default_reviewers: bool,
        branch_name: &str,
    ) -> Result<String> {
        let response = self
            .make_pull_request(draft, default_reviewers, branch_name)
            .await?;
        let url = response.self_link().unwrap_or_default().to_string();
        println!("{} {}", "Pull request created at".green(), url);
        Ok(url)
    }
}

/// Push `branch_name` from the current directory and open a pull request
pub async fn push(
    settings: &Settings,
    branch_name: &str,
    target_branch: Option<&str>,
) -> Result<String> {
    push_from(settings, &SystemGit::current_dir(), branch_name, target_branch).await
}

/// [`push`] from the working copy `git` operates on
pub async fn push_from(
    settings: &Settings,
    git: &dyn GitRunner,
    branch_name: &str,
    target_branch: Option<&str>,
) -> Result<String> {
    let client = BitbucketClient::new(settings.base_url(), settings.auth_header());

    let mut publisher = PullRequestPublisher::new(&client, git);
    if let Some(target) = target_branch {
        publisher = publisher.with_target_branch(target);
    }

    publisher
        .push_and_create_pr(settings.draft(), settings.default_reviewers(), branch_name)
        .await
}
