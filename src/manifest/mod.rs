//! Package file reading and patching
//!
//! This module provides functionality to:
//! - Read the current package state from the DAppNode manifest
//! - Rewrite the manifest `version`/`upstream` fields
//! - Rewrite the compose image tag and VERSION build argument

mod compose;
mod package_manifest;
mod writer;

pub use compose::{patch_compose_content, ComposePatch, DEFAULT_COMPOSE_PATH};
pub use package_manifest::{parse_state, read_state, update_manifest_content, DEFAULT_MANIFEST_PATH};
pub use writer::{PatchOutcome, PatchWriter};
