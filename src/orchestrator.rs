//! Update orchestrator for coordinating the entire update workflow
//!
//! This module provides:
//! - Workflow coordination: read → fetch → decide → patch
//! - Dry-run mode support
//! - Fatal errors for read/fetch/version problems, isolated per-file patch failures

use crate::cli::CliArgs;
use crate::domain::{PackageState, UpdateDecision};
use crate::error::AppError;
use crate::manifest::{read_state, PatchOutcome, PatchWriter};
use crate::output::{Console, Verbosity};
use crate::progress::Progress;
use crate::release::{GithubReleaseSource, HttpClient, LatestRelease, ReleaseSource, UpstreamRepo};
use std::path::PathBuf;

/// Rate limit quota below which a warning is shown in verbose mode
const LOW_RATE_LIMIT: u32 = 10;

/// Configuration for a single run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Package manifest path
    pub manifest_path: PathBuf,
    /// Compose file path
    pub compose_path: PathBuf,
    /// Whether to skip all file writes
    pub dry_run: bool,
    /// Console verbosity
    pub verbosity: Verbosity,
}

impl RunConfig {
    pub fn new(manifest_path: impl Into<PathBuf>, compose_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            compose_path: compose_path.into(),
            dry_run: false,
            verbosity: Verbosity::Normal,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Build configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Self {
        Self::new(&args.manifest, &args.compose)
            .with_dry_run(args.dry_run)
            .with_verbosity(Verbosity::from_cli(args.verbose, args.quiet))
    }
}

/// Result of a completed run
#[derive(Debug)]
pub struct RunReport {
    /// State read from the manifest before any change
    pub state: PackageState,
    /// Latest upstream release
    pub latest: LatestRelease,
    /// Update decision
    pub decision: UpdateDecision,
    /// Manifest patch outcome (absent when up to date)
    pub manifest: Option<PatchOutcome>,
    /// Compose patch outcome (absent when up to date)
    pub compose: Option<PatchOutcome>,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl RunReport {
    /// Returns true if every attempted patch succeeded
    pub fn is_success(&self) -> bool {
        [&self.manifest, &self.compose]
            .into_iter()
            .flatten()
            .all(PatchOutcome::is_success)
    }

    /// Returns true if the upstream tag moved
    pub fn needs_update(&self) -> bool {
        self.decision.needs_update()
    }
}

/// Orchestrator for coordinating the update workflow
pub struct Orchestrator {
    config: RunConfig,
    source: Box<dyn ReleaseSource>,
    console: Console,
}

impl Orchestrator {
    /// Create an orchestrator reading the Prysm GitHub release feed
    pub fn new(args: &CliArgs) -> Result<Self, AppError> {
        let client = HttpClient::new()?.with_token(args.token());
        let source =
            GithubReleaseSource::with_api_url(client, &args.api_url, UpstreamRepo::prysm());
        Ok(Self::with_source(RunConfig::from_cli(args), Box::new(source)))
    }

    /// Create an orchestrator with a custom release source (for testing)
    pub fn with_source(config: RunConfig, source: Box<dyn ReleaseSource>) -> Self {
        let console = Console::new(config.verbosity);
        Self {
            config,
            source,
            console,
        }
    }

    /// Run the update workflow
    ///
    /// Read, fetch and version errors abort before any write. Patch failures
    /// are recorded per file in the report.
    pub async fn run(&self) -> Result<RunReport, AppError> {
        // Step 1: Read current state
        let state = read_state(&self.config.manifest_path)?;
        self.console.info(format!(
            "Current package version: {}",
            state.version.as_deref().unwrap_or("<missing>")
        ));
        self.console.info(format!(
            "Current upstream version: {}",
            state.upstream.as_deref().unwrap_or("<missing>")
        ));

        // Step 2: Fetch latest release
        let latest = self.fetch_latest().await?;
        self.console
            .info(format!("Latest upstream version: {}", latest.tag));

        // Step 3: Decide
        let decision = UpdateDecision::decide(&state, &latest.tag)?;
        let Some(plan) = decision.planned() else {
            self.console.success("Already up to date!");
            return Ok(RunReport {
                state,
                latest,
                decision,
                manifest: None,
                compose: None,
                dry_run: self.config.dry_run,
            });
        };

        if self.config.dry_run {
            self.console.info("Would update to (dry run):");
        } else {
            self.console.info("Updating to:");
        }
        self.console
            .info(format!("  Package version: {}", plan.new_version));
        self.console
            .info(format!("  Upstream version: {}", plan.new_upstream));

        // Step 4: Patch both files independently
        let writer = PatchWriter::new(self.config.dry_run);
        let manifest = writer.patch_manifest(&self.config.manifest_path, plan);
        self.report_outcome(&manifest);
        let compose = writer.patch_compose(&self.config.compose_path, plan);
        self.report_outcome(&compose);

        let report = RunReport {
            state,
            latest,
            decision,
            manifest: Some(manifest),
            compose: Some(compose),
            dry_run: self.config.dry_run,
        };

        if !report.is_success() {
            self.console.error("Failed to update files");
        } else if self.config.dry_run {
            self.console.success("Dry run: no files were written");
        } else {
            self.console.success("Files updated successfully!");
        }

        Ok(report)
    }

    async fn fetch_latest(&self) -> Result<LatestRelease, AppError> {
        self.console
            .detail(format!("Fetching {}", self.source.endpoint()));
        if self.source.is_authenticated() {
            self.console.detail("Using authenticated request");
        } else {
            self.console.detail("Using anonymous request (rate limited)");
        }

        let mut progress = Progress::new(self.console.verbosity() != Verbosity::Quiet);
        progress.spinner(&format!("Fetching latest release of {}...", self.source.repo()));
        let result = self.source.latest_release().await;
        progress.finish_and_clear();

        let latest = result?;

        if let Some(published_at) = latest.published_at {
            self.console.detail(format!(
                "Published at {}",
                published_at.format("%Y-%m-%d %H:%M UTC")
            ));
        }
        if let Some(ref url) = latest.html_url {
            self.console.detail(format!("Release page: {}", url));
        }
        if let Some(remaining) = latest.rate_limit_remaining {
            if remaining < LOW_RATE_LIMIT && self.console.verbosity() == Verbosity::Verbose {
                self.console
                    .warn(format!("GitHub rate limit low: {} remaining", remaining));
            }
        }

        Ok(latest)
    }

    fn report_outcome(&self, outcome: &PatchOutcome) {
        for warning in &outcome.warnings {
            self.console.warn(warning);
        }
        match outcome.error {
            Some(ref error) => self.console.error(error),
            None if outcome.file_modified => self
                .console
                .detail(format!("Updated {}", outcome.path.display())),
            None => {}
        }
    }
}
