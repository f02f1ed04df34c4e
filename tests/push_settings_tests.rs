//! `push_from` tests: a real working copy against a local bare remote, with
//! the REST API served by mockito

use bbs_repos::Settings;
use bbs_repos::bitbucket::push_from;
use bbs_repos::git::{GitRunner, SystemGit};
use mockito::Matcher;
use serde_json::json;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PR_PATH: &str = "/rest/api/1.0/projects/prj/repos/repo/pull-requests";
const REPO_PATH: &str = "/rest/api/1.0/projects/prj/repos/repo";
const REVIEWERS_PATH: &str = "/rest/default-reviewers/1.0/projects/prj/repos/repo/reviewers";

/// Working copy on `main`, tracking `origin/main` of a bare `prj/repo.git`
fn working_copy(dir: &Path) -> (SystemGit, PathBuf) {
    let remote = dir.join("remote").join("prj").join("repo.git");
    std::fs::create_dir_all(&remote).unwrap();
    SystemGit::new(&remote)
        .run(&["init", "--bare", "--quiet"])
        .unwrap();

    let work = dir.join("work");
    std::fs::create_dir_all(&work).unwrap();
    let git = SystemGit::new(&work);
    git.run(&["init", "--quiet"]).unwrap();
    git.run(&["symbolic-ref", "HEAD", "refs/heads/main"]).unwrap();
    git.run(&["config", "user.name", "Test User"]).unwrap();
    git.run(&["config", "user.email", "test@example.com"]).unwrap();
    git.run(&["config", "commit.gpgsign", "false"]).unwrap();
    git.run(&["remote", "add", "origin", remote.to_str().unwrap()])
        .unwrap();
    git.run(&["commit", "--allow-empty", "--quiet", "-m", "Initial"])
        .unwrap();
    git.run(&["push", "--quiet", "-u", "origin", "main"]).unwrap();
    git.run(&[
        "commit",
        "--allow-empty",
        "--quiet",
        "-m",
        "Bump the widget",
        "-m",
        "Because it was old.",
    ])
    .unwrap();

    (git, remote)
}

fn created_body(server: &mockito::ServerGuard) -> String {
    json!({
        "id": 1,
        "links": {"self": [{"href": format!("{}/projects/prj/repos/repo/pull-requests/1", server.url())}]}
    })
    .to_string()
}

#[tokio::test]
async fn test_push_from_uses_draft_and_default_reviewers_settings() {
    let dir = TempDir::new().unwrap();
    let (git, remote) = working_copy(dir.path());

    let mut server = mockito::Server::new_async().await;
    let created = created_body(&server);
    let repo_mock = server
        .mock("GET", REPO_PATH)
        .with_status(200)
        .with_body(json!({"id": 7, "slug": "repo"}).to_string())
        .create_async()
        .await;
    let reviewers_mock = server
        .mock("GET", REVIEWERS_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("sourceRepoId".into(), "7".into()),
            Matcher::UrlEncoded("sourceRefId".into(), "feature".into()),
        ]))
        .with_status(200)
        .with_body(json!([{"name": "alice"}, {"name": "bob"}]).to_string())
        .create_async()
        .await;
    let pr_mock = server
        .mock("POST", PR_PATH)
        .match_body(Matcher::PartialJson(json!({
            "title": "Bump the widget",
            "description": "Because it was old.",
            "draft": true,
            "fromRef": {"id": "feature"},
            "toRef": {"id": "main"},
            "reviewers": [{"user": {"name": "alice"}}, {"user": {"name": "bob"}}]
        })))
        .with_status(201)
        .with_body(created)
        .create_async()
        .await;

    let settings = Settings::new("cool_user", "hunter2", server.url())
        .as_draft()
        .with_default_reviewers();
    let url = push_from(&settings, &git, "feature", None).await.unwrap();

    repo_mock.assert_async().await;
    reviewers_mock.assert_async().await;
    pr_mock.assert_async().await;
    assert_eq!(
        url,
        format!("{}/projects/prj/repos/repo/pull-requests/1", server.url())
    );

    // The branch reached the remote
    SystemGit::new(&remote)
        .run(&["rev-parse", "--verify", "--quiet", "refs/heads/feature"])
        .unwrap();
}

#[tokio::test]
async fn test_push_from_without_flags_skips_reviewer_lookup() {
    let dir = TempDir::new().unwrap();
    let (git, _remote) = working_copy(dir.path());

    let mut server = mockito::Server::new_async().await;
    let created = created_body(&server);
    let repo_mock = server
        .mock("GET", REPO_PATH)
        .expect(0)
        .create_async()
        .await;
    let reviewers_mock = server
        .mock("GET", REVIEWERS_PATH)
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let pr_mock = server
        .mock("POST", PR_PATH)
        .match_body(Matcher::PartialJson(json!({
            "draft": false,
            "reviewers": []
        })))
        .with_status(201)
        .with_body(created)
        .create_async()
        .await;

    let settings = Settings::new("cool_user", "hunter2", server.url());
    push_from(&settings, &git, "feature", None).await.unwrap();

    repo_mock.assert_async().await;
    reviewers_mock.assert_async().await;
    pr_mock.assert_async().await;
}
