//! Repository listing
//!
//! Turns [`Settings`] into the map of repositories the server knows about.

use crate::config::Settings;
use anyhow::Result;
use repos_bitbucket::{BitbucketClient, HttpTransport};
use std::collections::BTreeMap;

/// List repositories on the configured server
///
/// Keys are `"<project>/<repo>"`, values the SSH clone URL. When the settings
/// name a project only that project is listed.
pub async fn list_repos(settings: &Settings) -> Result<BTreeMap<String, String>> {
    let client = BitbucketClient::new(settings.base_url(), settings.auth_header());
    list_repos_with(&client, settings).await
}

/// [`list_repos`] over an existing client
pub async fn list_repos_with<T: HttpTransport>(
    client: &BitbucketClient<T>,
    settings: &Settings,
) -> Result<BTreeMap<String, String>> {
    client.list_repos(settings.project()).await
}
