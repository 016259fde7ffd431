//! File patch operations
//!
//! This module provides:
//! - PatchWriter for applying a planned update to the manifest and compose file
//! - Dry-run mode support (no actual file modifications)
//! - Per-file outcomes so one failed file never blocks the other

use crate::domain::PlannedUpdate;
use crate::error::{ManifestError, PatchError};
use crate::manifest::{patch_compose_content, update_manifest_content};
use std::fs;
use std::path::{Path, PathBuf};

/// Writer that applies a planned update to the package files
pub struct PatchWriter {
    /// Whether to run in dry-run mode (no file modifications)
    dry_run: bool,
}

/// Result of patching one file
#[derive(Debug)]
pub struct PatchOutcome {
    /// Path to the patched file
    pub path: PathBuf,
    /// Whether the file was actually written
    pub file_modified: bool,
    /// Non-fatal findings
    pub warnings: Vec<String>,
    /// Failure reason, if the patch failed
    pub error: Option<String>,
}

impl PatchOutcome {
    fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_modified: false,
            warnings: Vec::new(),
            error: None,
        }
    }

    fn failed(path: impl Into<PathBuf>, error: impl ToString) -> Self {
        let mut outcome = Self::new(path);
        outcome.error = Some(error.to_string());
        outcome
    }

    /// Returns true if the patch succeeded
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

impl PatchWriter {
    /// Create a new PatchWriter
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Create a PatchWriter in dry-run mode
    pub fn dry_run() -> Self {
        Self { dry_run: true }
    }

    /// Check if this writer is in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Rewrite `version` and `upstream` in the manifest
    pub fn patch_manifest(&self, path: &Path, plan: &PlannedUpdate) -> PatchOutcome {
        match self.try_patch_manifest(path, plan) {
            Ok(modified) => {
                let mut outcome = PatchOutcome::new(path);
                outcome.file_modified = modified;
                outcome
            }
            Err(e) => PatchOutcome::failed(path, e),
        }
    }

    fn try_patch_manifest(&self, path: &Path, plan: &PlannedUpdate) -> Result<bool, ManifestError> {
        let content = fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;
        let updated =
            update_manifest_content(&content, path, &plan.new_version, &plan.new_upstream)?;

        if self.dry_run {
            return Ok(false);
        }

        fs::write(path, updated).map_err(|e| ManifestError::write_error(path, e))?;
        Ok(true)
    }

    /// Rewrite the image tag and VERSION build argument in the compose file
    ///
    /// Fails with `PatchError::NoEffect` when the content would not change.
    pub fn patch_compose(&self, path: &Path, plan: &PlannedUpdate) -> PatchOutcome {
        let mut outcome = PatchOutcome::new(path);
        if let Err(e) = self.try_patch_compose(path, plan, &mut outcome) {
            outcome.error = Some(e.to_string());
        }
        outcome
    }

    fn try_patch_compose(
        &self,
        path: &Path,
        plan: &PlannedUpdate,
        outcome: &mut PatchOutcome,
    ) -> Result<(), PatchError> {
        let content = fs::read_to_string(path).map_err(|e| PatchError::read_error(path, e))?;
        let patch = patch_compose_content(&content, &plan.new_version, &plan.new_upstream);

        if !patch.changed(&content) {
            return Err(PatchError::NoEffect {
                path: path.to_path_buf(),
            });
        }

        for target in patch.missing_targets() {
            outcome
                .warnings
                .push(format!("{} not found in {}", target, path.display()));
        }

        if self.dry_run {
            return Ok(());
        }

        fs::write(path, &patch.content).map_err(|e| PatchError::write_error(path, e))?;
        outcome.file_modified = true;
        Ok(())
    }
}
