//! Bitbucket Server connection settings

use crate::constants::config::REDACTED;
use serde::Deserialize;
use std::fmt;

/// Connection settings for one Bitbucket Server instance
///
/// Settings are built once and only read afterwards. The `Debug`
/// representation never shows the app password.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    username: String,
    #[serde(default)]
    app_password: String,
    base_url: String,
    #[serde(default)]
    project: Option<String>,
    #[serde(default)]
    draft: bool,
    #[serde(default)]
    default_reviewers: bool,
}

impl Settings {
    pub fn new(
        username: impl Into<String>,
        app_password: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            app_password: app_password.into(),
            base_url: base_url.into(),
            project: None,
            draft: false,
            default_reviewers: false,
        }
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_app_password(mut self, app_password: impl Into<String>) -> Self {
        self.app_password = app_password.into();
        self
    }

    pub fn as_draft(mut self) -> Self {
        self.draft = true;
        self
    }

    pub fn with_default_reviewers(mut self) -> Self {
        self.default_reviewers = true;
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    pub fn draft(&self) -> bool {
        self.draft
    }

    pub fn default_reviewers(&self) -> bool {
        self.default_reviewers
    }

    pub fn has_app_password(&self) -> bool {
        !self.app_password.is_empty()
    }

    /// Value of the `Authorization` header for these credentials
    pub fn auth_header(&self) -> String {
        repos_bitbucket::auth_header(&self.username, &self.app_password)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("username", &self.username)
            .field("app_password", &format_args!("{}", REDACTED))
            .field("base_url", &self.base_url)
            .field("project", &self.project)
            .field("draft", &self.draft)
            .field("default_reviewers", &self.default_reviewers)
            .finish()
    }
}
