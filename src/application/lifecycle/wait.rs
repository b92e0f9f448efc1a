//! Lockfile wait loop
//!
//! Blocks while the external build holds its lockfile. The error sentinel is
//! checked on every iteration so a failure surfaces before the lock is
//! released.

use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::domain::ports::FileSystem;
use crate::error::{EmberError, EmberResult};

use super::sentinel::ErrorSentinel;

/// Poll interval used unless configured otherwise
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// How `wait` polls the lockfile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    /// Sleep between polls
    pub poll_interval: Duration,
    /// Give up after this long; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl WaitOptions {
    pub fn new() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            timeout: None,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn wait_for_build<FS: FileSystem>(
    fs: &FS,
    sentinel: &ErrorSentinel<'_, FS>,
    lockfile: &Path,
    name: &str,
    options: WaitOptions,
) -> EmberResult<()> {
    let started = Instant::now();
    let mut polls: u64 = 0;

    loop {
        sentinel.check(name)?;

        if !fs.exists(lockfile) {
            debug!(app = name, polls, "build lock released");
            return Ok(());
        }

        let waited = started.elapsed();
        let pause = match options.timeout {
            Some(timeout) if waited >= timeout => {
                return Err(EmberError::WaitTimeout {
                    name: name.to_string(),
                    waited,
                });
            }
            Some(timeout) => options.poll_interval.min(timeout - waited),
            None => options.poll_interval,
        };

        if polls == 0 {
            info!(app = name, lockfile = %lockfile.display(), "waiting for build to finish");
        }
        polls += 1;
        thread::sleep(pause);
    }
}
