//! PathResolver port - where a build target's files live
//!
//! Pure lookup. Implementations must not create directories or touch disk.

use std::path::PathBuf;

/// Resolves every location the lifecycle reads or writes for one target
pub trait PathResolver: Send + Sync {
    /// Front-end project root
    fn root(&self) -> PathBuf;

    /// Build output directory
    fn dist(&self) -> PathBuf;

    /// Namespaced path the host pipeline reads; symlinked to `dist`
    fn app_assets(&self) -> PathBuf;

    /// Shared directory holding cached `<name>.html` files
    fn applications(&self) -> PathBuf;

    /// Error sentinel written by the external build on failure
    fn build_error_file(&self) -> PathBuf;

    /// Present while the external build is running
    fn lockfile(&self) -> PathBuf;

    /// package.json of the front-end project
    fn package_json_file(&self) -> PathBuf;

    /// Optional environment manifest propagated to the subprocess when it exists
    fn gemfile(&self) -> PathBuf;
}
