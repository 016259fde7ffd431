//! Core domain models for upstream-bump
//!
//! This module contains the fundamental types used throughout the application:
//! - Package version triples with patch increments
//! - Package state recorded in the manifest
//! - Upstream release tags
//! - Update decisions

mod decision;
mod package_state;
mod version;

pub use decision::{PlannedUpdate, UpdateDecision};
pub use package_state::{PackageState, ReleaseTag};
pub use version::{increment_patch, parse_version, PackageVersion};
