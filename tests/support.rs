//! Common test support utilities and fakes
//!
//! [`FakeServer`] and [`FakeGit`] write into one shared [`EventLog`], so tests
//! can assert on the order of HTTP requests and git invocations.

#![allow(dead_code)]

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use bbs_repos::git::GitRunner;
use repos_bitbucket::{HttpRequest, HttpResponse, HttpTransport, Method};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Shared, ordered record of everything the fakes were asked to do
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    pub fn push(&self, event: String) {
        self.0.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn position(&self, prefix: &str) -> Option<usize> {
        self.events().iter().position(|e| e.starts_with(prefix))
    }
}

/// In-memory HTTP transport answering by method and path
pub struct FakeServer {
    log: EventLog,
    routes: HashMap<(Method, String), (u16, String)>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeServer {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            routes: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer requests for `path` (query string excluded)
    pub fn route(mut self, method: Method, path: &str, status: u16, body: Value) -> Self {
        self.routes
            .insert((method, path.to_string()), (status, body.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// JSON body of the first POST request
    pub fn posted_json(&self) -> Value {
        let request = self
            .requests()
            .into_iter()
            .find(|r| r.method == Method::Post)
            .expect("no POST request was sent");
        serde_json::from_slice(request.body.as_deref().unwrap_or_default()).unwrap()
    }
}

fn path_of(url: &str) -> &str {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let path_start = without_scheme.find('/').unwrap_or(without_scheme.len());
    let path = &without_scheme[path_start..];
    path.split('?').next().unwrap_or(path)
}

#[async_trait]
impl HttpTransport for FakeServer {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let path = path_of(&request.url).to_string();
        self.log.push(format!("{} {}", request.method, request.url));
        self.requests.lock().unwrap().push(request.clone());

        let (status, body) = self
            .routes
            .get(&(request.method, path.clone()))
            .cloned()
            .ok_or_else(|| anyhow!("no route for {} {}", request.method, path))?;

        Ok(HttpResponse {
            status,
            body: body.into_bytes(),
        })
    }
}

/// Git runner answering from a table of `args joined by spaces -> stdout`
pub struct FakeGit {
    log: EventLog,
    answers: HashMap<String, String>,
}

impl FakeGit {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            answers: HashMap::new(),
        }
    }

    pub fn answer(mut self, args: &str, stdout: &str) -> Self {
        self.answers.insert(args.to_string(), stdout.to_string());
        self
    }

    /// A working copy on `remote` whose last commit is `subject`/`body`,
    /// tracking `origin/<upstream>`
    pub fn working_copy(log: EventLog, remote: &str, subject: &str, body: &str, upstream: &str) -> Self {
        Self::new(log)
            .answer("config --get remote.origin.url", &format!("{remote}\n"))
            .answer("log -1 --format=%s", &format!("{subject}\n"))
            .answer("log -1 --format=%b", &format!("{body}\n"))
            .answer(
                "rev-parse --abbrev-ref --symbolic @{u}",
                &format!("origin/{upstream}\n"),
            )
    }

    /// Accept `git push origin HEAD:<branch> --quiet`
    pub fn accept_push(self, branch: &str) -> Self {
        self.answer(&format!("push origin HEAD:{branch} --quiet"), "")
    }
}

impl GitRunner for FakeGit {
    fn run(&self, args: &[&str]) -> Result<String> {
        let key = args.join(" ");
        self.log.push(format!("git {key}"));
        self.answers
            .get(&key)
            .cloned()
            .ok_or_else(|| anyhow!("git {key} failed: unexpected invocation"))
    }
}
