//! Command handlers
//!
//! Every handler receives a [`CommandContext`] built once from the global flags.

pub mod inspect;
pub mod lifecycle;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use ember_lift::config::Config;
use ember_lift::error::EmberResult;
use ember_lift::infrastructure::PrecompileRegistry;
use ember_lift::presentation::output::render_config_warnings;
use ember_lift::presentation::{create_app, AppHandle, OutputFormat};

use crate::cli::Cli;

/// Loaded configuration plus the state shared by every app of one host
pub struct CommandContext {
    pub config: Config,
    pub cwd: PathBuf,
    pub format: OutputFormat,
    pub registry: Arc<PrecompileRegistry>,
}

impl CommandContext {
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = match &cli.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("could not determine current directory")?,
        };

        let (config, warnings) = match &cli.config {
            Some(path) => {
                let (config, warnings) = Config::load_with_warnings(path)?;
                (config.with_env_overrides(), warnings)
            }
            None => Config::load_from_dir(&cwd)?,
        };
        render_config_warnings(&warnings);

        Ok(Self {
            config,
            cwd,
            format: OutputFormat::from_json_flag(cli.json),
            registry: Arc::new(PrecompileRegistry::new()),
        })
    }

    /// The requested apps, or every configured app when none are named
    pub fn select_apps(&self, apps: &[String]) -> Result<Vec<String>> {
        if !apps.is_empty() {
            return Ok(apps.to_vec());
        }

        let all: Vec<String> = self.config.app_names().map(str::to_string).collect();
        if all.is_empty() {
            bail!("no apps configured - add an [apps.<name>] section to ember-lift.toml");
        }
        Ok(all)
    }

    pub fn app(&self, name: &str) -> EmberResult<AppHandle> {
        create_app(&self.config, &self.cwd, name, self.registry.clone())
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
