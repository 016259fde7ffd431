//! HTTP client shared foundation
//!
//! This module provides a thin HTTP client with:
//! - A fixed User-Agent (required by the GitHub API)
//! - Optional bearer authentication
//! - Status code mapping into `ReleaseError`
//!
//! Requests are issued exactly once. No timeout is configured, so the
//! transport default applies.

use crate::error::ReleaseError;
use reqwest::{Client, Response, StatusCode};

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("upstream-bump/", env!("CARGO_PKG_VERSION"));

/// GitHub API media type
const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";

/// Header carrying the remaining request quota
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// HTTP client wrapper with optional bearer credentials
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new anonymous HTTP client
    pub fn new() -> Result<Self, ReleaseError> {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with a custom User-Agent
    pub fn with_user_agent(user_agent: &str) -> Result<Self, ReleaseError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| ReleaseError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            token: None,
        })
    }

    /// Attach a bearer token; empty tokens are ignored
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Returns true if requests carry an Authorization header
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Perform a single GET request and map error statuses
    pub async fn get(&self, url: &str, repo: &str) -> Result<Response, ReleaseError> {
        let mut request = self.client.get(url).header("Accept", ACCEPT_GITHUB_JSON);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ReleaseError::network_error(repo, e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ReleaseError::NotFound {
                repo: repo.to_string(),
            });
        }

        // Primary limit: 403 with an exhausted quota. Secondary limits: 429.
        let exhausted = rate_limit_remaining(&response) == Some(0);
        if status == StatusCode::TOO_MANY_REQUESTS || (status == StatusCode::FORBIDDEN && exhausted)
        {
            return Err(ReleaseError::rate_limit_exceeded(repo));
        }

        Err(ReleaseError::HttpStatus {
            repo: repo.to_string(),
            status: status.as_u16(),
        })
    }

    /// Perform a GET request and return the body as text
    ///
    /// Also returns the remaining rate limit quota when the server reports it.
    pub async fn get_text(
        &self,
        url: &str,
        repo: &str,
    ) -> Result<(String, Option<u32>), ReleaseError> {
        let response = self.get(url, repo).await?;
        let remaining = rate_limit_remaining(&response);
        let body = response.text().await.map_err(|e| {
            ReleaseError::network_error(repo, format!("failed to read body: {}", e))
        })?;
        Ok((body, remaining))
    }
}

/// Read the remaining rate limit quota from a response
pub fn rate_limit_remaining(response: &Response) -> Option<u32> {
    response
        .headers()
        .get(RATE_LIMIT_REMAINING_HEADER)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}
