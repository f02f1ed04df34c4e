//! Utility functions for Bitbucket Server operations

use anyhow::{Result, anyhow};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Compute the `Authorization` header value for `username:password`
///
/// The value is the bare base64 encoding, without a `Basic ` scheme prefix.
/// Servers this tool talks to accept it in that exact form.
pub fn auth_header(username: &str, password: &str) -> String {
    STANDARD.encode(format!("{}:{}", username, password))
}

/// Parse a Bitbucket Server remote URL into `(project, repo_slug)`
///
/// A trailing `.git` is removed, then the last two `/`-separated segments are
/// taken. Everything before them (scheme, host, port, `scm/` prefix) is
/// ignored:
/// - SSH: `ssh://git@bitbucket.domain.com:7999/prj/repo.git`
/// - HTTPS: `https://bitbucket.domain.com/scm/prj/repo.git`
///
/// # Errors
/// Returns an error if fewer than two non-empty segments remain
pub fn parse_remote_url(url: &str) -> Result<(String, String)> {
    let url = url.trim();
    let url = url.strip_suffix(".git").unwrap_or(url);

    let mut segments = url.rsplit('/');
    match (segments.next(), segments.next()) {
        (Some(repo), Some(project)) if !repo.is_empty() && !project.is_empty() => {
            Ok((project.to_string(), repo.to_string()))
        }
        _ => Err(anyhow!("Invalid Bitbucket remote URL format: {}", url)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header_has_no_scheme() {
        assert_eq!(auth_header("cool_user", "app_password"), "Y29vbF91c2VyOmFwcF9wYXNzd29yZA==");
    }

    #[test]
    fn test_parse_ssh_url() {
        let (project, repo) =
            parse_remote_url("ssh://git@bitbucket.domain.com:7999/prj/repo.git").unwrap();
        assert_eq!(project, "prj");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn test_parse_https_url() {
        let (project, repo) =
            parse_remote_url("https://bitbucket.domain.com/scm/prj/repo.git").unwrap();
        assert_eq!(project, "prj");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn test_git_suffix_is_optional() {
        assert_eq!(
            parse_remote_url("ssh://git@bb/prj/repo.git").unwrap(),
            parse_remote_url("ssh://git@bb/prj/repo").unwrap()
        );
    }

    #[test]
    fn test_only_one_git_suffix_removed() {
        let (_, repo) = parse_remote_url("ssh://git@bb/prj/repo.git.git").unwrap();
        assert_eq!(repo, "repo.git");
    }

    #[test]
    fn test_parse_invalid_url() {
        assert!(parse_remote_url("repo").is_err());
        assert!(parse_remote_url("ssh://git@bb/prj/").is_err());
    }
}
