//! Application Layer
//!
//! Use cases that orchestrate the build lifecycle.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildController` - prepare, compile, run, test and wait for one build target

pub mod lifecycle;

pub use lifecycle::{BuildController, ControllerPorts, WaitOptions, DEFAULT_POLL_INTERVAL};
