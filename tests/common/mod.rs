//! Common test utilities for ember-lift contract and CLI tests.
//!
//! This module provides:
//! - `TestHost`: a host root in a temp directory with controllers wired to a fake build
//! - `FakeBuild`: a `ProcessRunner` that plays the external build tool
//! - `TestEnv`: runs the `ember-lift` binary against an isolated host root
//! - Fixtures: reusable config and HTML content

#![allow(dead_code)]

pub mod env;
pub mod host;

pub use env::*;
pub use fixtures::*;
pub use host::*;
