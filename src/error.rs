//! Error types for ember-lift
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::domain::ports::FsError;
use crate::domain::value_objects::FailureReport;

/// Result type alias for ember-lift operations
pub type EmberResult<T> = Result<T, EmberError>;

/// A build reported through the error sentinel file.
///
/// The message names the target and the first line of the report; the full
/// report is kept as `trace` for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{name:?} has failed to build: {summary}")]
pub struct BuildError {
    name: String,
    summary: String,
    trace: Vec<String>,
}

impl BuildError {
    pub fn new(name: impl Into<String>, report: FailureReport) -> Self {
        let (summary, trace) = report.into_parts();
        Self {
            name: name.into(),
            summary,
            trace,
        }
    }

    /// Name of the build target that failed
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First non-blank line of the sentinel file
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Every non-blank line of the sentinel file, in order
    pub fn trace(&self) -> &[String] {
        &self.trace
    }
}

/// Main error type for ember-lift operations
#[derive(Error, Debug)]
pub enum EmberError {
    /// The external build wrote a non-empty error sentinel
    #[error(transparent)]
    Build(#[from] BuildError),

    /// `wait` gave up before the lockfile disappeared
    #[error("gave up waiting for {name:?} to finish building after {}ms", waited.as_millis())]
    WaitTimeout { name: String, waited: Duration },

    /// File system error (kind-discriminated)
    #[error(transparent)]
    Fs(#[from] FsError),

    /// A subprocess could not be started or exited unsuccessfully
    #[error("{command} failed for {name:?}: {message}")]
    Process {
        name: String,
        command: String,
        message: String,
    },

    /// The build tool is not installed where the paths say it should be
    #[error("{name:?} is missing ember-cli at {path} - run `ember-lift install {name}` first")]
    MissingDependency { name: String, path: PathBuf },

    /// package.json could not be read or has no usable `name`
    #[error("invalid package manifest {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// No `[apps.<name>]` section for the requested app
    #[error("unknown app '{name}' - add an [apps.{name}] section to ember-lift.toml")]
    UnknownApp { name: String },

    /// IO error outside the file system port
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EmberError {
    /// Returns the build failure if this error came from the sentinel file
    pub fn as_build_error(&self) -> Option<&BuildError> {
        match self {
            EmberError::Build(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_build_failure(&self) -> bool {
        matches!(self, EmberError::Build(_))
    }

    pub fn is_wait_timeout(&self) -> bool {
        matches!(self, EmberError::WaitTimeout { .. })
    }
}
