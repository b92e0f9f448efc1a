//! Build Lifecycle Controller
//!
//! Owns `prepare → build/run → ready-or-failed` for one build target:
//! 1. `prepare` clears a stale error sentinel, links the build output into
//!    the host's asset tree and registers the target's namespace
//! 2. `compile` runs a one-shot build and checks the sentinel
//! 3. `run` keeps a dev server alive
//! 4. `wait` blocks until the external build releases its lockfile
//!
//! `prepared` and `compiled` are memoized per controller instance only.
//! Workers in other processes race on the same files; those races are
//! absorbed by the sentinel and symlink handling, not by a shared lock.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::Instant;

use tracing::{debug, info};

use crate::domain::entities::{BuildState, BuildTarget};
use crate::domain::ports::{
    AssetRegistry, FileSystem, HtmlTemplater, ManifestReader, PathResolver, ProcessRunner,
};
use crate::domain::value_objects::{BuildEnv, HostConfig};
use crate::error::EmberResult;

use super::sentinel::ErrorSentinel;
use super::wait::{wait_for_build, WaitOptions};

/// Collaborators the controller delegates to
#[derive(Clone)]
pub struct ControllerPorts {
    pub paths: Arc<dyn PathResolver>,
    pub runner: Arc<dyn ProcessRunner>,
    pub templater: Arc<dyn HtmlTemplater>,
    pub registry: Arc<dyn AssetRegistry>,
    pub manifest: Arc<dyn ManifestReader>,
}

/// Lifecycle controller for a single build target
///
/// Safe to share between threads of one process; `compile` holds the
/// lifecycle lock for the duration of the build so concurrent callers in
/// the same process build once.
pub struct BuildController<FS: FileSystem> {
    target: BuildTarget,
    host: HostConfig,
    ports: ControllerPorts,
    fs: FS,
    wait_options: WaitOptions,
    state: Mutex<BuildState>,
    app_name: OnceLock<String>,
}

impl<FS: FileSystem> BuildController<FS> {
    pub fn new(target: BuildTarget, host: HostConfig, ports: ControllerPorts, fs: FS) -> Self {
        Self {
            target,
            host,
            ports,
            fs,
            wait_options: WaitOptions::default(),
            state: Mutex::new(BuildState::default()),
            app_name: OnceLock::new(),
        }
    }

    /// Default options used by [`wait`](Self::wait)
    pub fn with_wait_options(mut self, wait_options: WaitOptions) -> Self {
        self.wait_options = wait_options;
        self
    }

    pub fn target(&self) -> &BuildTarget {
        &self.target
    }

    pub fn name(&self) -> &str {
        self.target.name()
    }

    pub fn host(&self) -> &HostConfig {
        &self.host
    }

    pub fn paths(&self) -> &dyn PathResolver {
        self.ports.paths.as_ref()
    }

    /// Snapshot of the memoized lifecycle flags
    pub fn state(&self) -> BuildState {
        *self.lock_state()
    }

    /// One-time setup; later calls on this controller are no-ops
    pub fn prepare(&self) -> EmberResult<()> {
        let mut state = self.lock_state();
        self.prepare_locked(&mut state)
    }

    /// Build once and memoize success
    ///
    /// A failed build is not memoized; the next call runs the whole sequence again.
    pub fn compile(&self) -> EmberResult<bool> {
        let mut state = self.lock_state();
        if state.is_compiled() {
            return Ok(true);
        }

        self.prepare_locked(&mut state)?;

        info!(
            app = self.name(),
            environment = self.host.environment().name(),
            "compiling"
        );
        let started = Instant::now();
        let build = self.ports.runner.compile(&self.build_env());
        // A failing tool usually exits non-zero too; the sentinel carries the better message.
        self.check_for_build_error()?;
        build?;
        self.copy_index_html_file()?;

        state.mark_compiled();
        info!(
            app = self.name(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "compiled"
        );
        Ok(true)
    }

    /// Ensure the dev server is running
    pub fn run(&self) -> EmberResult<()> {
        self.prepare()?;
        self.ports.runner.run(&self.build_env())?;

        // The dev server may not have written its first build yet.
        if self.fs.exists(&self.built_index_file()) {
            self.copy_index_html_file()?;
        } else {
            debug!(app = self.name(), "index.html not built yet, skipping copy");
        }
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.ports.runner.is_running()
    }

    /// Run the front-end test suite; failures come from the runner, not the sentinel
    pub fn run_tests(&self) -> EmberResult<()> {
        self.prepare()?;
        self.ports.runner.test(&self.build_env())
    }

    pub fn install_dependencies(&self) -> EmberResult<()> {
        self.ports.runner.install(&self.build_env())
    }

    /// Block until the build lockfile is gone, using the controller's wait options
    pub fn wait(&self) -> EmberResult<()> {
        self.wait_with(self.wait_options)
    }

    /// Block until the build lockfile is gone
    ///
    /// Raises as soon as the error sentinel reports a failure, even while the
    /// lockfile is still held.
    pub fn wait_with(&self, options: WaitOptions) -> EmberResult<()> {
        let sentinel = self.sentinel();
        wait_for_build(
            &self.fs,
            &sentinel,
            &self.ports.paths.lockfile(),
            self.name(),
            options,
        )
    }

    /// Whether the external build currently holds its lockfile
    pub fn is_building(&self) -> bool {
        self.fs.exists(&self.ports.paths.lockfile())
    }

    pub fn has_build_error(&self) -> EmberResult<bool> {
        self.sentinel().has_build_error()
    }

    /// Render the built HTML shell with per-request fragments
    pub fn index_html(&self, head: &str, body: &str) -> EmberResult<String> {
        let content = self.fs.read(&self.index_file())?;
        Ok(self.ports.templater.render(&content, head, body))
    }

    /// File `index_html` reads: a cached copy in production-like environments,
    /// the live build output everywhere else
    pub fn index_file(&self) -> PathBuf {
        if self.host.environment().is_production_like() {
            self.ports
                .paths
                .applications()
                .join(self.target.index_file_name())
        } else {
            self.ports.paths.dist().join("index.html")
        }
    }

    pub fn vendor_assets(&self) -> String {
        self.target.vendor_assets()
    }

    pub fn application_assets(&self) -> EmberResult<String> {
        Ok(self.target.application_assets(&self.app_name()?))
    }

    /// `[vendor, application]` logical paths for script tags
    pub fn exposed_js_assets(&self) -> EmberResult<Vec<String>> {
        Ok(vec![self.vendor_assets(), self.application_assets()?])
    }

    /// `[vendor, application]` logical paths for stylesheet tags
    pub fn exposed_css_assets(&self) -> EmberResult<Vec<String>> {
        self.exposed_js_assets()
    }

    /// The `name` option, else package.json's `name` (read once)
    pub fn app_name(&self) -> EmberResult<String> {
        if let Some(name) = &self.target.options().name {
            return Ok(name.clone());
        }
        if let Some(name) = self.app_name.get() {
            return Ok(name.clone());
        }

        let name = self
            .ports
            .manifest
            .app_name(&self.ports.paths.package_json_file())?;
        Ok(self.app_name.get_or_init(|| name).clone())
    }

    /// Variables layered over the inherited environment for every subprocess
    pub fn build_env(&self) -> BuildEnv {
        let gemfile = self.ports.paths.gemfile();
        let manifest = self.fs.exists(&gemfile).then_some(gemfile);
        self.target
            .build_env(self.host.environment().name(), manifest)
    }

    fn lock_state(&self) -> MutexGuard<'_, BuildState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn prepare_locked(&self, state: &mut BuildState) -> EmberResult<()> {
        if state.is_prepared() {
            return Ok(());
        }

        debug!(app = self.name(), "preparing");
        self.sentinel().reset()?;
        self.symlink_to_assets_root()?;
        self.add_assets_to_precompile_list();

        state.mark_prepared();
        Ok(())
    }

    fn sentinel(&self) -> ErrorSentinel<'_, FS> {
        ErrorSentinel::new(&self.fs, self.ports.paths.build_error_file())
    }

    fn check_for_build_error(&self) -> EmberResult<()> {
        self.sentinel().check(self.name())
    }

    fn symlink_to_assets_root(&self) -> EmberResult<()> {
        let link = self.ports.paths.app_assets();
        let dist = self.ports.paths.dist();

        if let Some(parent) = link.parent() {
            self.fs.create_dir_all(parent)?;
        }

        match self.fs.symlink(&dist, &link) {
            Ok(()) => {
                debug!(link = %link.display(), dist = %dist.display(), "linked build output");
                Ok(())
            }
            // Several workers starting at once all try to create the link.
            Err(err) if err.is_already_exists() => {
                debug!(link = %link.display(), "asset link already present");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn add_assets_to_precompile_list(&self) {
        let pattern = self.target.asset_pattern();
        self.ports.registry.append_precompile(pattern.clone());
        self.ports.registry.append_digest_whitelist(pattern);
    }

    fn built_index_file(&self) -> PathBuf {
        self.ports.paths.app_assets().join("index.html")
    }

    fn copy_index_html_file(&self) -> EmberResult<()> {
        if !self.host.environment().is_production_like() {
            return Ok(());
        }

        let destination = self.index_file();
        self.fs.copy(&self.built_index_file(), &destination)?;
        debug!(app = self.name(), to = %destination.display(), "cached index.html");
        Ok(())
    }
}
