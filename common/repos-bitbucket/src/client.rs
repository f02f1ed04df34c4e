//! Bitbucket Server client implementation

use crate::transport::{HttpRequest, HttpTransport, Method, ReqwestTransport};
use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

/// Bitbucket Server API client
///
/// Holds the server coordinates and the precomputed `Authorization` header
/// value. Every request goes through the injected [`HttpTransport`]; endpoint
/// groups extend the client from their own modules.
pub struct BitbucketClient<T = ReqwestTransport> {
    pub(crate) transport: T,
    pub(crate) base_url: String,
    pub(crate) auth_header: String,
}

impl BitbucketClient<ReqwestTransport> {
    /// Create a client talking to `base_url` over the network
    pub fn new(base_url: impl Into<String>, auth_header: impl Into<String>) -> Self {
        Self::with_transport(ReqwestTransport::new(), base_url, auth_header)
    }
}

impl<T: HttpTransport> BitbucketClient<T> {
    pub fn with_transport(
        transport: T,
        base_url: impl Into<String>,
        auth_header: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            auth_header: auth_header.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build an absolute URL for `path`
    ///
    /// A bare host gets `https://` prepended; a base URL that already carries
    /// a scheme is used as given.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.starts_with("https://") || base.starts_with("http://") {
            format!("{}{}", base, path)
        } else {
            format!("https://{}{}", base, path)
        }
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Response> {
        let request = HttpRequest::new(Method::Get, self.url(path))
            .header("Authorization", self.auth_header.as_str());
        self.execute(request).await
    }

    pub(crate) async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Response> {
        let data = serde_json::to_vec(body).context("Failed to serialize request body")?;
        let request = HttpRequest::new(Method::Post, self.url(path))
            .header("Content-Type", "application/json")
            .header("Authorization", self.auth_header.as_str())
            .body(data);
        self.execute(request).await
    }

    async fn execute(&self, request: HttpRequest) -> Result<Response> {
        let method = request.method;
        let url = request.url.clone();
        debug!("{} {}", method, url);

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            let error_text = String::from_utf8_lossy(&response.body);
            return Err(anyhow!(
                "{} {} failed ({}): {}",
                method,
                url,
                response.status,
                error_text.trim()
            ));
        }

        trace!("Response body: {}", String::from_utf8_lossy(&response.body));

        let json = if response.body.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(&response.body)
                .with_context(|| format!("Failed to parse response from {}", url))?
        };

        Ok(Response {
            status: response.status,
            json,
        })
    }
}

/// Successful API response with its decoded JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub json: Value,
}

impl Response {
    /// The `links` collection of the body, when the server sent one
    pub fn links(&self) -> Option<&serde_json::Map<String, Value>> {
        self.json.get("links").and_then(Value::as_object)
    }

    /// First `self` link of the body
    pub fn self_link(&self) -> Option<&str> {
        self.links()?
            .get("self")?
            .as_array()?
            .first()?
            .get("href")?
            .as_str()
    }
}
