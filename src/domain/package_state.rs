//! Current package state and upstream release tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Versions recorded in the package manifest
///
/// Fields are kept verbatim; a missing or non-string field is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageState {
    /// Local package release number (expected `major.minor.patch`)
    pub version: Option<String>,
    /// Tracked upstream release tag
    pub upstream: Option<String>,
}

impl PackageState {
    /// Create a state with both fields present
    pub fn new(version: impl Into<String>, upstream: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            upstream: Some(upstream.into()),
        }
    }

    /// Upstream for display and automation output (empty when absent)
    pub fn upstream_or_empty(&self) -> &str {
        self.upstream.as_deref().unwrap_or_default()
    }
}

/// A release tag published upstream, e.g. `v7.1.1`
///
/// Compared by exact string equality only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseTag(String);

impl ReleaseTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this tag is exactly the recorded upstream
    pub fn matches(&self, upstream: Option<&str>) -> bool {
        upstream == Some(self.0.as_str())
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_tag_matches_exactly() {
        let tag = ReleaseTag::new("v7.1.0");
        assert!(tag.matches(Some("v7.1.0")));
        assert!(!tag.matches(Some("7.1.0")));
        assert!(!tag.matches(Some("v7.1.0 ")));
        assert!(!tag.matches(None));
    }

    #[test]
    fn test_package_state_upstream_fallback() {
        let state = PackageState::default();
        assert_eq!(state.upstream_or_empty(), "");

        let state = PackageState::new("0.0.68", "v7.1.0");
        assert_eq!(state.upstream_or_empty(), "v7.1.0");
    }

    #[test]
    fn test_release_tag_serde_transparent() {
        let tag: ReleaseTag = serde_json::from_str(r#""v7.1.1""#).unwrap();
        assert_eq!(tag.as_str(), "v7.1.1");
        assert_eq!(serde_json::to_string(&tag).unwrap(), r#""v7.1.1""#);
    }
}
