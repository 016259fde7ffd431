//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues reading or rewriting the package manifest
//! - ReleaseError: Issues talking to the upstream release feed
//! - VersionError: Malformed package version strings
//! - PatchError: Compose file substitution failures
//! - OutputError: Automation output file failures

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Release feed related errors
    #[error(transparent)]
    Release(#[from] ReleaseError),

    /// Version format errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Compose file patch errors
    #[error(transparent)]
    Patch(#[from] PatchError),

    /// Automation output errors
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write manifest file
    #[error("failed to write manifest file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// Top-level JSON value is not an object
    #[error("manifest {path} is not a JSON object")]
    NotAnObject { path: PathBuf },

    /// JSON serialization error
    #[error("failed to serialize manifest {path}: {message}")]
    SerializeError { path: PathBuf, message: String },
}

/// Errors related to the upstream release feed
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// HTTP client could not be constructed
    #[error("failed to create HTTP client: {message}")]
    ClientBuild { message: String },

    /// Network request failed
    #[error("failed to fetch latest release of {repo}: {message}")]
    NetworkError { repo: String, message: String },

    /// Repository or release not found
    #[error("no published release found for {repo}")]
    NotFound { repo: String },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {repo} (set GITHUB_TOKEN to raise the limit)")]
    RateLimitExceeded { repo: String },

    /// Non-success HTTP status
    #[error("release feed for {repo} returned HTTP {status}")]
    HttpStatus { repo: String, status: u16 },

    /// Response body is not the expected JSON
    #[error("invalid release response for {repo}: {message}")]
    InvalidResponse { repo: String, message: String },

    /// Response has no usable tag_name
    #[error("release response for {repo} has no tag_name")]
    MissingTag { repo: String },
}

/// Errors related to package version strings
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VersionError {
    /// Manifest has no usable version field
    #[error("manifest has no string 'version' field")]
    Missing,

    /// Not exactly three dot-separated components
    #[error("invalid version string '{version}': version must have 3 parts (major.minor.patch), got {parts}")]
    WrongPartCount { version: String, parts: usize },

    /// A component is not an unsigned integer
    #[error("invalid version string '{version}': component '{component}' is not a number")]
    InvalidComponent { version: String, component: String },

    /// Patch component cannot be incremented
    #[error("invalid version string '{version}': patch component overflows")]
    Overflow { version: String },
}

/// Errors related to compose file patching
#[derive(Error, Debug)]
pub enum PatchError {
    /// Failed to read compose file
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write compose file
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Substitution left the content unchanged
    #[error("no changes made to {path}, pattern may not match")]
    NoEffect { path: PathBuf },
}

/// Errors related to automation output files
#[derive(Error, Debug)]
pub enum OutputError {
    /// Failed to append to an output file
    #[error("failed to write automation output {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError, mapping a missing file to NotFound
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return ManifestError::NotFound { path };
        }
        ManifestError::ReadError { path, source }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl ReleaseError {
    /// Creates a new NetworkError
    pub fn network_error(repo: impl Into<String>, message: impl Into<String>) -> Self {
        ReleaseError::NetworkError {
            repo: repo.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(repo: impl Into<String>, message: impl Into<String>) -> Self {
        ReleaseError::InvalidResponse {
            repo: repo.into(),
            message: message.into(),
        }
    }

    /// Creates a new RateLimitExceeded error
    pub fn rate_limit_exceeded(repo: impl Into<String>) -> Self {
        ReleaseError::RateLimitExceeded { repo: repo.into() }
    }
}

impl PatchError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PatchError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PatchError::WriteError {
            path: path.into(),
            source,
        }
    }
}
