//! Repository-related operations

use crate::client::BitbucketClient;
use crate::transport::HttpTransport;
use crate::{API_PREFIX, LIST_LIMIT};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Repository as returned by `GET /projects/{project}/repos/{slug}`
#[derive(Deserialize, Debug, Clone)]
pub struct RepositoryInfo {
    pub id: u64,
}

#[derive(Deserialize, Debug)]
struct RepositoryPage {
    #[serde(default)]
    values: Vec<ListedRepository>,
}

#[derive(Deserialize, Debug)]
struct ListedRepository {
    slug: String,
    project: ListedProject,
    #[serde(default)]
    links: ListedLinks,
}

#[derive(Deserialize, Debug)]
struct ListedProject {
    key: String,
}

#[derive(Deserialize, Debug, Default)]
struct ListedLinks {
    #[serde(default)]
    clone: Vec<CloneLink>,
}

#[derive(Deserialize, Debug)]
struct CloneLink {
    href: String,
    name: String,
}

impl ListedRepository {
    fn ssh_url(&self) -> Option<&str> {
        self.links
            .clone
            .iter()
            .find(|link| link.name == "ssh")
            .map(|link| link.href.as_str())
    }
}

impl<T: HttpTransport> BitbucketClient<T> {
    /// List repositories visible to the configured user
    ///
    /// When `project` is given only that project's repositories are requested.
    /// Returns a map from `"<project>/<repo>"` to the SSH clone URL.
    pub async fn list_repos(&self, project: Option<&str>) -> Result<BTreeMap<String, String>> {
        let path = match project {
            Some(project) => format!(
                "{}/projects/{}/repos?limit={}",
                API_PREFIX, project, LIST_LIMIT
            ),
            None => format!("{}/repos?limit={}", API_PREFIX, LIST_LIMIT),
        };

        let response = self.get(&path).await?;
        let page: RepositoryPage = serde_json::from_value(response.json)
            .context("Failed to parse repository listing")?;

        let mut repos = BTreeMap::new();
        for repo in &page.values {
            let name = format!("{}/{}", repo.project.key, repo.slug);
            match repo.ssh_url() {
                Some(url) => {
                    repos.insert(name, url.to_string());
                }
                None => debug!("Skipping {}: no ssh clone link", name),
            }
        }

        Ok(repos)
    }

    /// Fetch a single repository, mainly for its internal numeric id
    pub async fn get_repository(&self, project: &str, repo_slug: &str) -> Result<RepositoryInfo> {
        let path = format!("{}/projects/{}/repos/{}", API_PREFIX, project, repo_slug);
        let response = self.get(&path).await?;
        serde_json::from_value(response.json)
            .with_context(|| format!("Failed to parse repository {}/{}", project, repo_slug))
    }
}
