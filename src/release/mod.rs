//! Release feed access for the tracked upstream project
//!
//! This module provides:
//! - HTTP client foundation with optional bearer authentication
//! - The `ReleaseSource` seam used by the orchestrator
//! - GitHub latest release adapter

mod client;
mod github;

pub use client::{rate_limit_remaining, HttpClient};
pub use github::{GithubReleaseSource, GITHUB_API_URL};

use crate::domain::ReleaseTag;
use crate::error::ReleaseError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

/// Identity of the upstream repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRepo {
    pub owner: String,
    pub name: String,
}

impl UpstreamRepo {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// The Prysm Ethereum consensus client
    pub fn prysm() -> Self {
        Self::new("OffchainLabs", "prysm")
    }
}

impl fmt::Display for UpstreamRepo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Latest published release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestRelease {
    pub tag: ReleaseTag,
    pub html_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    /// Remaining API quota reported with the response
    pub rate_limit_remaining: Option<u32>,
}

impl LatestRelease {
    /// A release carrying only a tag
    pub fn from_tag(tag: impl Into<String>) -> Self {
        Self {
            tag: ReleaseTag::new(tag),
            html_url: None,
            published_at: None,
            rate_limit_remaining: None,
        }
    }
}

/// Trait for release feeds
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Repository this source reads
    fn repo(&self) -> &UpstreamRepo;

    /// Endpoint description for diagnostics
    fn endpoint(&self) -> String;

    /// Whether requests carry credentials
    fn is_authenticated(&self) -> bool {
        false
    }

    /// Fetch the latest published release
    async fn latest_release(&self) -> Result<LatestRelease, ReleaseError>;
}
