//! Ember Lift - build-lifecycle controller for ember-cli front ends
//!
//! A host web application embeds one or more ember-cli apps. Ember Lift
//! prepares the host's asset tree for each app, drives the external build
//! (one-shot or watching), reports build failures written to an error file,
//! waits for in-progress builds and serves the built `index.html` with
//! per-request head/body fragments.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildController, ControllerPorts, WaitOptions};
pub use config::Config;
pub use domain::entities::{BuildTarget, TargetOptions};
pub use domain::value_objects::{Environment, HostConfig};
pub use error::{BuildError, EmberError, EmberResult};
pub use presentation::{create_app, create_controller, AppHandle};
