//! Automation outputs for CI workflows
//!
//! Two append-only files are supported:
//! - structured output (`GITHUB_OUTPUT`): lowercase `key=value` lines
//! - environment export (`GITHUB_ENV`): uppercase `KEY=value` lines

use crate::domain::PlannedUpdate;
use crate::error::OutputError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Destinations for automation outputs; either may be unset
#[derive(Debug, Clone, Default)]
pub struct AutomationOutputs {
    /// Structured output file
    pub output_file: Option<PathBuf>,
    /// Environment export file
    pub env_file: Option<PathBuf>,
}

impl AutomationOutputs {
    pub fn new(output_file: Option<PathBuf>, env_file: Option<PathBuf>) -> Self {
        Self {
            output_file,
            env_file,
        }
    }

    /// Returns true if no destination is configured
    pub fn is_empty(&self) -> bool {
        self.output_file.is_none() && self.env_file.is_none()
    }

    /// Signal that no update is available (structured output only)
    pub fn publish_up_to_date(&self) -> Result<(), OutputError> {
        if let Some(ref path) = self.output_file {
            append_pairs(path, &[("update_available", "false".to_string())])?;
        }
        Ok(())
    }

    /// Publish the applied update to both destinations
    pub fn publish_update(&self, plan: &PlannedUpdate) -> Result<(), OutputError> {
        let pairs = update_pairs(plan);

        if let Some(ref path) = self.output_file {
            append_pairs(path, &pairs)?;
        }

        if let Some(ref path) = self.env_file {
            let upper: Vec<(String, String)> = pairs
                .iter()
                .map(|(key, value)| (key.to_uppercase(), value.clone()))
                .collect();
            append_pairs(path, &upper)?;
        }

        Ok(())
    }
}

/// Key/value pairs describing an applied update
pub fn update_pairs(plan: &PlannedUpdate) -> Vec<(&'static str, String)> {
    vec![
        ("update_available", "true".to_string()),
        ("old_version", plan.old_version.clone()),
        ("new_version", plan.new_version.clone()),
        ("old_upstream", plan.old_upstream.clone()),
        ("new_upstream", plan.new_upstream.clone()),
    ]
}

fn append_pairs<K: AsRef<str>>(path: &Path, pairs: &[(K, String)]) -> Result<(), OutputError> {
    let to_error = |source| OutputError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let mut lines = String::new();
    for (key, value) in pairs {
        lines.push_str(key.as_ref());
        lines.push('=');
        lines.push_str(value);
        lines.push('\n');
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_error)?;
    file.write_all(lines.as_bytes()).map_err(to_error)
}
