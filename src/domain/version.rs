//! Package version parsing and patch increments
//!
//! Package versions are strict `major.minor.patch` triples. Upstream tags
//! are never parsed here; they are compared as opaque strings.

use crate::error::VersionError;
use std::fmt;
use std::str::FromStr;

/// A `major.minor.patch` package version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackageVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl PackageVersion {
    /// Create a new version triple
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Return the next patch release; major and minor are unchanged
    pub fn bump_patch(&self) -> Option<Self> {
        Some(Self {
            patch: self.patch.checked_add(1)?,
            ..*self
        })
    }
}

impl FromStr for PackageVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(VersionError::WrongPartCount {
                version: s.to_string(),
                parts: parts.len(),
            });
        }

        // Digits only: u64::from_str alone would accept a leading '+'
        let component = |part: &str| {
            let invalid = || VersionError::InvalidComponent {
                version: s.to_string(),
                component: part.to_string(),
            };
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<u64>().map_err(|_| invalid())
        };

        Ok(Self::new(
            component(parts[0])?,
            component(parts[1])?,
            component(parts[2])?,
        ))
    }
}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Parse a version string like `0.0.68` into `(major, minor, patch)`
pub fn parse_version(version: &str) -> Result<(u64, u64, u64), VersionError> {
    let parsed: PackageVersion = version.parse()?;
    Ok((parsed.major, parsed.minor, parsed.patch))
}

/// Increment the patch component: `0.0.68` becomes `0.0.69`
pub fn increment_patch(version: &str) -> Result<String, VersionError> {
    let parsed: PackageVersion = version.parse()?;
    parsed
        .bump_patch()
        .map(|next| next.to_string())
        .ok_or_else(|| VersionError::Overflow {
            version: version.to_string(),
        })
}
