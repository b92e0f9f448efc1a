//! ProcessRunner port - drives the external build tool
//!
//! Failures of the tool itself are reported through the error sentinel, not
//! through these results. An `Err` here means the process could not be run.

use crate::domain::value_objects::BuildEnv;
use crate::error::EmberResult;

pub trait ProcessRunner: Send + Sync {
    /// Install front-end dependencies
    fn install(&self, env: &BuildEnv) -> EmberResult<()>;

    /// Run a one-shot build, blocking until the tool exits
    fn compile(&self, env: &BuildEnv) -> EmberResult<()>;

    /// Ensure the dev server is running; no-op when it already is
    fn run(&self, env: &BuildEnv) -> EmberResult<()>;

    /// Whether the dev server is alive
    fn is_running(&self) -> bool;

    /// Run the front-end test suite
    fn test(&self, env: &BuildEnv) -> EmberResult<()>;
}
