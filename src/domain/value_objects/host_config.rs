//! Host configuration value object
//!
//! Everything the controller would otherwise read from ambient process
//! state, passed explicitly at construction.

use std::path::{Path, PathBuf};

use super::Environment;

/// Host application settings shared by every build target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    environment: Environment,
    root_path: PathBuf,
    tool_root: PathBuf,
}

impl HostConfig {
    /// Tool root defaults to `<root_path>/tmp/ember-cli`
    pub fn new(environment: Environment, root_path: impl Into<PathBuf>) -> Self {
        let root_path = root_path.into();
        let tool_root = root_path.join("tmp").join("ember-cli");
        Self {
            environment,
            root_path,
            tool_root,
        }
    }

    pub fn with_tool_root(mut self, tool_root: impl Into<PathBuf>) -> Self {
        self.tool_root = tool_root.into();
        self
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn tool_root(&self) -> &Path {
        &self.tool_root
    }
}
