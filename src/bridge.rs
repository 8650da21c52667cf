//! HTTP client for the upstream bridge hierarchy service.
//!
//! One fixed endpoint, one attempt per call: no retry, no caching. The
//! service declares `text/plain` but the body is JSON.

use async_trait::async_trait;
use url::Url;

use crate::types::{AccountKind, UserResponse};

/// Production endpoint of the bridge hierarchy service.
pub const DEFAULT_BASE_URL: &str = "https://bridge.747lc.com";

/// Errors from bridge lookups. Callers treat all variants the same way:
/// the request did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("HTTP: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to fetch user data (HTTP {0})")]
    Status(reqwest::StatusCode),
    #[error("Invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Directory of agent/player accounts keyed by username.
///
/// Trait seam so the search orchestrator can run against an in-memory
/// fake in tests.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn fetch_user_data(
        &self,
        username: &str,
        kind: AccountKind,
    ) -> Result<UserResponse, BridgeError>;
}

/// reqwest-backed client for the bridge service.
pub struct BridgeClient {
    http: reqwest::Client,
    base_url: String,
}

impl BridgeClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a non-default base URL (tests, staging).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for BridgeClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the GetHierarchy request URL with encoded query parameters.
fn hierarchy_url(base: &str, username: &str, kind: AccountKind) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base)?;
    url.set_path("/Default/GetHierarchy");
    url.query_pairs_mut()
        .append_pair("username", username)
        .append_pair("isAgent", if kind.is_agent() { "true" } else { "false" });
    Ok(url)
}

#[async_trait]
impl UserDirectory for BridgeClient {
    /// Fetch one namespace's lookup result. `username` is expected to be
    /// non-empty and already trimmed by the caller.
    async fn fetch_user_data(
        &self,
        username: &str,
        kind: AccountKind,
    ) -> Result<UserResponse, BridgeError> {
        let url = hierarchy_url(&self.base_url, username, kind)?;
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "text/plain")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BridgeError::Status(status));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| BridgeError::Parse(e.to_string()))
    }
}
