//! Configuration module for ember-lift
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (EMBER_LIFT_*, RAILS_ENV)
//! 3. Host config (`ember-lift.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{with_env_overrides_from, ENV_VAR, HOST_ENV_VAR, ROOT_VAR, WAIT_TIMEOUT_VAR};
pub use types::{CommandsConfig, Config, HostSection, WaitConfig, CONFIG_FILE_NAME};
