//! Path Set
//!
//! Default PathResolver. Layout, with `root_path` the host root:
//!
//! - `root` - `[apps.<name>] path`, else `<root_path>/<name>`
//! - `dist` - `<tool_root>/apps/<name>`
//! - `app_assets` - `<tool_root>/assets/<name>`
//! - `applications` - `<root_path>/public/_apps`
//! - `lockfile` / `build_error_file` - `<root>/tmp/build.lock`, `<root>/tmp/error.txt`

use std::path::{Path, PathBuf};

use crate::domain::entities::BuildTarget;
use crate::domain::ports::PathResolver;
use crate::domain::value_objects::HostConfig;

/// Resolved locations for one build target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSet {
    name: String,
    environment: String,
    root_path: PathBuf,
    tool_root: PathBuf,
    root: PathBuf,
}

impl PathSet {
    pub fn new(host: &HostConfig, target: &BuildTarget) -> Self {
        let root = match &target.options().path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => host.root_path().join(path),
            None => host.root_path().join(target.name()),
        };

        Self {
            name: target.name().to_string(),
            environment: host.environment().name().to_string(),
            root_path: host.root_path().to_path_buf(),
            tool_root: host.tool_root().to_path_buf(),
            root,
        }
    }

    pub fn tool_root(&self) -> &Path {
        &self.tool_root
    }

    /// Scratch directory the ember-cli addon writes its lock and error files into
    pub fn tmp(&self) -> PathBuf {
        self.root.join("tmp")
    }

    /// Build output log, appended to by every subprocess
    pub fn log(&self) -> PathBuf {
        self.root_path
            .join("log")
            .join(format!("ember-{}.{}.log", self.name, self.environment))
    }

    /// The project-local ember-cli executable
    pub fn ember(&self) -> PathBuf {
        self.root
            .join("node_modules")
            .join("ember-cli")
            .join("bin")
            .join("ember")
    }
}

impl PathResolver for PathSet {
    fn root(&self) -> PathBuf {
        self.root.clone()
    }

    fn dist(&self) -> PathBuf {
        self.tool_root.join("apps").join(&self.name)
    }

    fn app_assets(&self) -> PathBuf {
        self.tool_root.join("assets").join(&self.name)
    }

    fn applications(&self) -> PathBuf {
        self.root_path.join("public").join("_apps")
    }

    fn build_error_file(&self) -> PathBuf {
        self.tmp().join("error.txt")
    }

    fn lockfile(&self) -> PathBuf {
        self.tmp().join("build.lock")
    }

    fn package_json_file(&self) -> PathBuf {
        self.root.join("package.json")
    }

    fn gemfile(&self) -> PathBuf {
        self.root.join("Gemfile")
    }
}
