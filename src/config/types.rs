//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::{WaitOptions, DEFAULT_POLL_INTERVAL};
use crate::domain::entities::{BuildTarget, TargetOptions};
use crate::domain::value_objects::{ConfigWarning, Environment, HostConfig};
use crate::error::{EmberError, EmberResult};
use crate::infrastructure::{ShellCommands, DEFAULT_INSTALL_COMMAND};

use super::loader;

/// Config file looked up in the host root
pub const CONFIG_FILE_NAME: &str = "ember-lift.toml";

/// Host application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSection {
    /// Environment name (`development` when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    /// Host root; relative paths resolve against the working directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Where build output and asset links live (`<root>/tmp/ember-cli` when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_root: Option<PathBuf>,

    /// Extra environment names treated like production
    #[serde(default)]
    pub production_like: Vec<String>,
}

/// Lockfile polling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Unset waits indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            timeout_ms: None,
        }
    }
}

impl WaitConfig {
    pub fn to_options(&self) -> WaitOptions {
        let options =
            WaitOptions::new().with_poll_interval(Duration::from_millis(self.poll_interval_ms));
        match self.timeout_ms {
            Some(ms) => options.with_timeout(Duration::from_millis(ms)),
            None => options,
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL.as_millis() as u64
}

/// Subprocess commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandsConfig {
    #[serde(default = "default_install_command")]
    pub install: String,

    /// Overrides `<app root>/node_modules/ember-cli/bin/ember`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ember: Option<PathBuf>,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            install: default_install_command(),
            ember: None,
        }
    }
}

impl CommandsConfig {
    pub fn to_shell_commands(&self) -> ShellCommands {
        ShellCommands {
            install: self.install.clone(),
            ember: self.ember.clone(),
        }
    }
}

fn default_install_command() -> String {
    DEFAULT_INSTALL_COMMAND.to_string()
}

/// Complete `ember-lift.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub host: HostSection,

    #[serde(default)]
    pub wait: WaitConfig,

    #[serde(default)]
    pub commands: CommandsConfig,

    /// One entry per front-end app, keyed by target name
    #[serde(default)]
    pub apps: BTreeMap<String, TargetOptions>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> EmberResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> EmberResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `ember-lift.toml` from `dir` (defaults if absent), then apply env overrides
    pub fn load_from_dir(dir: &Path) -> EmberResult<(Self, Vec<ConfigWarning>)> {
        loader::load_from_dir(dir)
    }

    /// Apply environment variable overrides (EMBER_LIFT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn environment(&self) -> Environment {
        let name = self.host.environment.as_deref().unwrap_or("development");
        Environment::with_production_like(name, &self.host.production_like)
    }

    /// Host settings, resolving a relative root against `cwd`
    pub fn host_config(&self, cwd: &Path) -> HostConfig {
        let root = match &self.host.root {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => cwd.join(root),
            None => cwd.to_path_buf(),
        };

        let host = HostConfig::new(self.environment(), &root);
        match &self.host.tool_root {
            Some(tool_root) if tool_root.is_absolute() => host.with_tool_root(tool_root),
            Some(tool_root) => host.with_tool_root(root.join(tool_root)),
            None => host,
        }
    }

    /// The build target configured under `[apps.<name>]`
    pub fn target(&self, name: &str) -> EmberResult<BuildTarget> {
        self.apps
            .get(name)
            .map(|options| BuildTarget::with_options(name, options.clone()))
            .ok_or_else(|| EmberError::UnknownApp {
                name: name.to_string(),
            })
    }

    pub fn app_names(&self) -> impl Iterator<Item = &str> {
        self.apps.keys().map(String::as_str)
    }
}
