//! Error sentinel protocol
//!
//! The external build writes a file when it fails. A build has failed exactly
//! when that file exists and is non-empty; an empty (freshly truncated) file
//! is not a failure.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::FailureReport;
use crate::error::{BuildError, EmberResult};

/// Reader for one target's error sentinel
pub(crate) struct ErrorSentinel<'a, FS: FileSystem> {
    fs: &'a FS,
    path: PathBuf,
}

impl<'a, FS: FileSystem> ErrorSentinel<'a, FS> {
    pub(crate) fn new(fs: &'a FS, path: PathBuf) -> Self {
        Self { fs, path }
    }

    /// Exists and has a non-zero size
    pub(crate) fn has_build_error(&self) -> EmberResult<bool> {
        Ok(matches!(self.fs.size(&self.path)?, Some(size) if size > 0))
    }

    /// Raise a `BuildError` if the sentinel reports a failure
    pub(crate) fn check(&self, name: &str) -> EmberResult<()> {
        if !self.has_build_error()? {
            return Ok(());
        }

        // ember writes whatever bytes the failing tool printed
        let content = match self.fs.read_bytes(&self.path) {
            Ok(content) => content,
            // Reset by another worker between the size check and the read.
            Err(err) if err.is_not_found() => return Ok(()),
            Err(err) => return Err(err.into()),
        };

        let content = String::from_utf8_lossy(&content);
        let error = BuildError::new(name, FailureReport::parse(&content));
        warn!(app = name, summary = error.summary(), "build failed");
        Err(error.into())
    }

    /// Delete a sentinel left over from a previous build
    ///
    /// Returns whether this call removed it.
    pub(crate) fn reset(&self) -> EmberResult<bool> {
        if !self.has_build_error()? {
            return Ok(false);
        }

        match self.fs.remove(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "cleared stale build error");
                Ok(true)
            }
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
