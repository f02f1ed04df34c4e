//! Central constants for the bbs-repos application

/// Default values for Git operations
pub mod git {
    /// Remote that branches are pushed to
    pub const REMOTE: &str = "origin";

    /// Prefix stripped from the upstream name to get the target branch
    pub const REMOTE_PREFIX: &str = "origin/";
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "bitbucket.yaml";

    /// Environment variable consulted when the config has no app password
    pub const APP_PASSWORD_ENV: &str = "BITBUCKET_APP_PASSWORD";

    /// Marker shown instead of the app password
    pub const REDACTED: &str = "...";

    /// Default directory repositories are cloned into
    pub const DEFAULT_CLONE_DIR: &str = "repos";
}
