//! Update decision derived from the current state and the latest tag

use crate::domain::{increment_patch, PackageState, ReleaseTag};
use crate::error::VersionError;

/// Planned changes when the upstream tag moved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedUpdate {
    pub old_version: String,
    pub new_version: String,
    pub old_upstream: String,
    pub new_upstream: String,
}

/// Outcome of comparing the recorded upstream with the latest release
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateDecision {
    /// Recorded upstream equals the latest tag
    UpToDate { tag: ReleaseTag },
    /// Tag differs; bump the package patch version
    Update(PlannedUpdate),
}

impl UpdateDecision {
    /// Decide whether an update is needed
    ///
    /// Any difference in the tag string triggers an update, including a tag
    /// that is older than the recorded one.
    pub fn decide(state: &PackageState, latest: &ReleaseTag) -> Result<Self, VersionError> {
        if latest.matches(state.upstream.as_deref()) {
            return Ok(UpdateDecision::UpToDate {
                tag: latest.clone(),
            });
        }

        let current = state.version.as_deref().ok_or(VersionError::Missing)?;
        let new_version = increment_patch(current)?;

        Ok(UpdateDecision::Update(PlannedUpdate {
            old_version: current.to_string(),
            new_version,
            old_upstream: state.upstream_or_empty().to_string(),
            new_upstream: latest.as_str().to_string(),
        }))
    }

    pub fn needs_update(&self) -> bool {
        matches!(self, UpdateDecision::Update(_))
    }

    pub fn planned(&self) -> Option<&PlannedUpdate> {
        match self {
            UpdateDecision::Update(plan) => Some(plan),
            UpdateDecision::UpToDate { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decide_up_to_date() {
        let state = PackageState::new("0.0.68", "v7.1.0");
        let decision = UpdateDecision::decide(&state, &ReleaseTag::new("v7.1.0")).unwrap();
        assert!(!decision.needs_update());
        assert!(decision.planned().is_none());
    }

    #[test]
    fn test_decide_update() {
        let state = PackageState::new("0.0.68", "v7.1.0");
        let decision = UpdateDecision::decide(&state, &ReleaseTag::new("v7.1.1")).unwrap();
        assert!(decision.needs_update());
        assert_eq!(
            decision.planned().unwrap(),
            &PlannedUpdate {
                old_version: "0.0.68".to_string(),
                new_version: "0.0.69".to_string(),
                old_upstream: "v7.1.0".to_string(),
                new_upstream: "v7.1.1".to_string(),
            }
        );
    }

    #[test]
    fn test_decide_has_no_downgrade_protection() {
        let state = PackageState::new("0.0.68", "v7.1.0");
        let decision = UpdateDecision::decide(&state, &ReleaseTag::new("v6.0.0")).unwrap();
        assert_eq!(decision.planned().unwrap().new_version, "0.0.69");
    }

    #[test]
    fn test_decide_missing_upstream_triggers_update() {
        let state = PackageState {
            version: Some("1.0.0".to_string()),
            upstream: None,
        };
        let decision = UpdateDecision::decide(&state, &ReleaseTag::new("v7.1.1")).unwrap();
        let plan = decision.planned().unwrap();
        assert_eq!(plan.old_upstream, "");
        assert_eq!(plan.new_version, "1.0.1");
    }

    #[test]
    fn test_decide_missing_version() {
        let state = PackageState {
            version: None,
            upstream: Some("v7.1.0".to_string()),
        };
        let result = UpdateDecision::decide(&state, &ReleaseTag::new("v7.1.1"));
        assert_eq!(result, Err(VersionError::Missing));
    }

    #[test]
    fn test_decide_malformed_version_only_matters_on_update() {
        let state = PackageState::new("1.2", "v7.1.0");
        assert!(UpdateDecision::decide(&state, &ReleaseTag::new("v7.1.0")).is_ok());
        assert!(matches!(
            UpdateDecision::decide(&state, &ReleaseTag::new("v7.1.1")),
            Err(VersionError::WrongPartCount { .. })
        ));
    }
}
