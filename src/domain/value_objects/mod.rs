//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_pattern;
mod build_env;
mod config_warning;
mod environment;
mod failure_report;
mod host_config;

pub use asset_pattern::AssetPattern;
pub use build_env::{BuildEnv, EXCLUDE_ASSETS_VAR, HOST_ENV_VAR, MANIFEST_VAR};
pub use config_warning::ConfigWarning;
pub use environment::{Environment, PRODUCTION};
pub use failure_report::FailureReport;
pub use host_config::HostConfig;
