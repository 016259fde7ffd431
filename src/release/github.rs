//! GitHub releases API adapter
//!
//! Fetches the latest published release of a repository.
//! API endpoint: {api}/repos/{owner}/{repo}/releases/latest

use crate::domain::ReleaseTag;
use crate::error::ReleaseError;
use crate::release::{HttpClient, LatestRelease, ReleaseSource, UpstreamRepo};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Public GitHub API base URL
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// GitHub release adapter
pub struct GithubReleaseSource {
    client: HttpClient,
    api_url: String,
    repo: UpstreamRepo,
}

/// Subset of the GitHub release payload
#[derive(Debug, Deserialize)]
struct GithubRelease {
    /// Release tag, e.g. "v7.1.1"
    tag_name: Option<String>,
    /// Web page of the release
    html_url: Option<String>,
    /// Publication timestamp (null for drafts)
    published_at: Option<DateTime<Utc>>,
}

impl GithubReleaseSource {
    /// Create a new adapter against the public GitHub API
    pub fn new(client: HttpClient, repo: UpstreamRepo) -> Self {
        Self::with_api_url(client, GITHUB_API_URL, repo)
    }

    /// Create a new adapter against a custom API base URL
    pub fn with_api_url(
        client: HttpClient,
        api_url: impl Into<String>,
        repo: UpstreamRepo,
    ) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            api_url,
            repo,
        }
    }

    /// Build the latest release URL
    pub fn build_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_url, self.repo.owner, self.repo.name
        )
    }
}

/// Parse a release payload into a `LatestRelease`
fn parse_release(body: &str, repo: &str) -> Result<LatestRelease, ReleaseError> {
    let release: GithubRelease = serde_json::from_str(body).map_err(|e| {
        ReleaseError::invalid_response(repo, format!("failed to parse JSON: {}", e))
    })?;

    let tag = release
        .tag_name
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ReleaseError::MissingTag {
            repo: repo.to_string(),
        })?;

    Ok(LatestRelease {
        tag: ReleaseTag::new(tag),
        html_url: release.html_url,
        published_at: release.published_at,
        rate_limit_remaining: None,
    })
}

#[async_trait]
impl ReleaseSource for GithubReleaseSource {
    fn repo(&self) -> &UpstreamRepo {
        &self.repo
    }

    fn endpoint(&self) -> String {
        self.build_url()
    }

    fn is_authenticated(&self) -> bool {
        self.client.is_authenticated()
    }

    async fn latest_release(&self) -> Result<LatestRelease, ReleaseError> {
        let repo = self.repo.to_string();
        let (body, remaining) = self.client.get_text(&self.build_url(), &repo).await?;

        let mut release = parse_release(&body, &repo)?;
        release.rate_limit_remaining = remaining;
        Ok(release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;

    const LATEST_PATH: &str = "/repos/OffchainLabs/prysm/releases/latest";

    fn adapter(api_url: &str, token: Option<&str>) -> GithubReleaseSource {
        let client = HttpClient::new()
            .unwrap()
            .with_token(token.map(str::to_string));
        GithubReleaseSource::with_api_url(client, api_url, UpstreamRepo::prysm())
    }

    #[test]
    fn test_build_url() {
        let source = GithubReleaseSource::new(HttpClient::new().unwrap(), UpstreamRepo::prysm());
        assert_eq!(
            source.build_url(),
            "https://api.github.com/repos/OffchainLabs/prysm/releases/latest"
        );
    }

    #[test]
    fn test_build_url_trims_trailing_slash() {
        let source = adapter("http://localhost:1234/", None);
        assert_eq!(
            source.build_url(),
            "http://localhost:1234/repos/OffchainLabs/prysm/releases/latest"
        );
    }

    #[test]
    fn test_parse_release() {
        let body = json!({
            "tag_name": "v7.1.1",
            "html_url": "https://github.com/OffchainLabs/prysm/releases/tag/v7.1.1",
            "published_at": "2025-10-01T12:00:00Z",
            "assets": []
        })
        .to_string();

        let release = parse_release(&body, "OffchainLabs/prysm").unwrap();
        assert_eq!(release.tag.as_str(), "v7.1.1");
        assert!(release.html_url.unwrap().ends_with("v7.1.1"));
        assert_eq!(
            release.published_at.unwrap().to_rfc3339(),
            "2025-10-01T12:00:00+00:00"
        );
    }

    #[test]
    fn test_parse_release_missing_tag() {
        let result = parse_release(r#"{"name": "Prysm"}"#, "OffchainLabs/prysm");
        assert!(matches!(result, Err(ReleaseError::MissingTag { .. })));

        let result = parse_release(r#"{"tag_name": ""}"#, "OffchainLabs/prysm");
        assert!(matches!(result, Err(ReleaseError::MissingTag { .. })));
    }

    #[test]
    fn test_parse_release_malformed_json() {
        let result = parse_release("<html>oops</html>", "OffchainLabs/prysm");
        assert!(matches!(result, Err(ReleaseError::InvalidResponse { .. })));
    }

    #[test]
    fn test_parse_release_null_published_at() {
        let release =
            parse_release(r#"{"tag_name": "v7.1.1", "published_at": null}"#, "r").unwrap();
        assert!(release.published_at.is_none());
    }

    #[tokio::test]
    async fn test_latest_release_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", LATEST_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_header("x-ratelimit-remaining", "59")
            .with_body(json!({"tag_name": "v7.1.1"}).to_string())
            .create_async()
            .await;

        let release = adapter(&server.url(), None).latest_release().await.unwrap();
        assert_eq!(release.tag.as_str(), "v7.1.1");
        assert_eq!(release.rate_limit_remaining, Some(59));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_latest_release_with_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", LATEST_PATH)
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_body(json!({"tag_name": "v7.1.1"}).to_string())
            .create_async()
            .await;

        let source = adapter(&server.url(), Some("test-token"));
        assert!(source.is_authenticated());
        assert!(source.latest_release().await.is_ok());

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_latest_release_server_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", LATEST_PATH)
            .with_status(500)
            .with_body("boom")
            .expect(1)
            .create_async()
            .await;

        let result = adapter(&server.url(), None).latest_release().await;
        assert!(matches!(
            result,
            Err(ReleaseError::HttpStatus { status: 500, .. })
        ));

        // Exactly one request, no retries
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_latest_release_no_releases() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", LATEST_PATH)
            .with_status(404)
            .with_body(json!({"message": "Not Found"}).to_string())
            .create_async()
            .await;

        let result = adapter(&server.url(), None).latest_release().await;
        assert!(matches!(result, Err(ReleaseError::NotFound { .. })));
    }
}
