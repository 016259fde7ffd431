//! CLI argument parsing module for upstream-bump
//!
//! Every ambient input (environment variables included) is read here once
//! and handed to the pipeline as explicit configuration.

use crate::manifest::{DEFAULT_COMPOSE_PATH, DEFAULT_MANIFEST_PATH};
use crate::release::GITHUB_API_URL;
use clap::Parser;
use std::path::PathBuf;

/// Check the upstream Prysm release and bump the package files
#[derive(Parser, Debug, Clone)]
#[command(
    name = "upstream-bump",
    version,
    about = "Check the upstream release feed and bump the package manifest and compose file"
)]
pub struct CliArgs {
    /// Package manifest to read and update
    #[arg(long, default_value = DEFAULT_MANIFEST_PATH)]
    pub manifest: PathBuf,

    /// Compose file whose image tag and VERSION argument are updated
    #[arg(long, default_value = DEFAULT_COMPOSE_PATH)]
    pub compose: PathBuf,

    // Release feed options
    /// Token for authenticated GitHub API requests
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = GITHUB_API_URL)]
    pub api_url: String,

    // Automation outputs
    /// Structured output file receiving key=value lines
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub github_output: Option<String>,

    /// Environment export file receiving KEY=value lines
    #[arg(long, env = "GITHUB_ENV")]
    pub github_env: Option<String>,

    // General options
    /// Dry run mode - show what would be updated without writing any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Enable quiet mode - warnings and errors only
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Token with blank values treated as absent
    pub fn token(&self) -> Option<String> {
        self.github_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    }

    /// Output file path with blank values treated as absent
    pub fn output_file(&self) -> Option<PathBuf> {
        non_empty_path(&self.github_output)
    }

    /// Env export file path with blank values treated as absent
    pub fn env_file(&self) -> Option<PathBuf> {
        non_empty_path(&self.github_env)
    }
}

fn non_empty_path(path: &Option<String>) -> Option<PathBuf> {
    path.as_deref()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}
