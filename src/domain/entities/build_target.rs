//! Build target entity
//!
//! One logical front-end application managed by a controller, plus the
//! per-process memoization state of its lifecycle.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AssetPattern, BuildEnv};

/// Per-target options, as written under `[apps.<name>]`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TargetOptions {
    /// Front-end project root; relative paths resolve against the host root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Overrides the app name taken from package.json
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Dependencies left out of the asset bundle
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_ember_deps: Vec<String>,
}

/// A named front-end application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
    name: String,
    options: TargetOptions,
}

impl BuildTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_options(name, TargetOptions::default())
    }

    pub fn with_options(name: impl Into<String>, options: TargetOptions) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &TargetOptions {
        &self.options
    }

    /// Pattern registered with the host asset pipeline
    pub fn asset_pattern(&self) -> AssetPattern {
        AssetPattern::namespace(&self.name)
    }

    /// `<name>/assets/vendor`
    pub fn vendor_assets(&self) -> String {
        format!("{}/assets/vendor", self.name)
    }

    /// `<name>/assets/<app_name>`
    pub fn application_assets(&self, app_name: &str) -> String {
        format!("{}/assets/{}", self.name, app_name)
    }

    /// File name of the cached index under the shared applications directory
    pub fn index_file_name(&self) -> String {
        format!("{}.html", self.name)
    }

    /// Environment handed to the build subprocess
    pub fn build_env(&self, environment: &str, manifest: Option<PathBuf>) -> BuildEnv {
        BuildEnv::new(environment, &self.options.exclude_ember_deps, manifest)
    }
}

/// In-process memoization of the lifecycle
///
/// Invariant: `compiled` implies `prepared`. Neither flag survives a restart
/// or coordinates with other processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildState {
    prepared: bool,
    compiled: bool,
}

impl BuildState {
    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    pub fn is_compiled(&self) -> bool {
        self.compiled
    }

    pub fn mark_prepared(&mut self) {
        self.prepared = true;
    }

    pub fn mark_compiled(&mut self) {
        debug_assert!(self.prepared, "compiled without prepare");
        self.compiled = true;
    }
}
