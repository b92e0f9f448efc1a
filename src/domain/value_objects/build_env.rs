//! Subprocess environment value object
//!
//! Variables layered on top of the inherited process environment whenever
//! the external build tool is spawned.

use std::path::PathBuf;

/// Host environment name, read by the ember-cli addon
pub const HOST_ENV_VAR: &str = "RAILS_ENV";
/// Comma-joined dependency names excluded from the asset bundle
pub const EXCLUDE_ASSETS_VAR: &str = "EXCLUDE_EMBER_ASSETS";
/// Environment manifest override, only set when the manifest exists
pub const MANIFEST_VAR: &str = "BUNDLE_GEMFILE";

/// Environment overrides for a build subprocess
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BuildEnv {
    vars: Vec<(String, String)>,
}

impl BuildEnv {
    pub fn new(environment: &str, excluded_deps: &[String], manifest: Option<PathBuf>) -> Self {
        let mut vars = vec![
            (HOST_ENV_VAR.to_string(), environment.to_string()),
            (EXCLUDE_ASSETS_VAR.to_string(), excluded_deps.join(",")),
        ];
        if let Some(manifest) = manifest {
            vars.push((MANIFEST_VAR.to_string(), manifest.display().to_string()));
        }
        Self { vars }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
