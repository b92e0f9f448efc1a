//! Library-level test host.
//!
//! `TestHost` owns a temp directory used as the host root. Controllers built
//! from it use the real file system adapters and a `FakeBuild` in place of
//! ember-cli, so every file the lifecycle touches is real.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tempfile::TempDir;

use ember_lift::domain::ports::{PathResolver, ProcessRunner};
use ember_lift::domain::value_objects::BuildEnv;
use ember_lift::infrastructure::{HtmlPage, LocalFs, PackageJsonReader, PathSet, PrecompileRegistry};
use ember_lift::{
    BuildController, BuildTarget, ControllerPorts, EmberResult, Environment, HostConfig,
    TargetOptions,
};

use super::fixtures::INDEX_HTML;

/// What the fake build does on its next `compile`
#[derive(Debug, Clone)]
pub enum BuildStep {
    /// Write this index.html to dist
    Succeed(String),
    /// Write this report to the error sentinel
    Fail(String),
}

/// ProcessRunner that writes the files ember-cli would write
pub struct FakeBuild {
    paths: PathSet,
    steps: Mutex<VecDeque<BuildStep>>,
    delay: Duration,
    compiles: AtomicUsize,
    runs: AtomicUsize,
}

impl FakeBuild {
    pub fn new(paths: PathSet) -> Self {
        Self {
            paths,
            steps: Mutex::new(VecDeque::new()),
            delay: Duration::ZERO,
            compiles: AtomicUsize::new(0),
            runs: AtomicUsize::new(0),
        }
    }

    /// Hold the build lock for `delay` during every compile
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn push(&self, step: BuildStep) {
        self.steps.lock().unwrap().push_back(step);
    }

    pub fn compiles(&self) -> usize {
        self.compiles.load(Ordering::SeqCst)
    }

    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }

    fn build(&self) {
        let step = self
            .steps
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| BuildStep::Succeed(INDEX_HTML.to_string()));

        hold_lock(&self.paths);
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        match step {
            BuildStep::Succeed(index) => {
                fs::create_dir_all(self.paths.dist()).unwrap();
                fs::write(self.paths.dist().join("index.html"), index).unwrap();
            }
            BuildStep::Fail(report) => write_error(&self.paths, &report),
        }
        release_lock(&self.paths);
    }
}

impl ProcessRunner for FakeBuild {
    fn install(&self, _env: &BuildEnv) -> EmberResult<()> {
        Ok(())
    }

    fn compile(&self, _env: &BuildEnv) -> EmberResult<()> {
        self.compiles.fetch_add(1, Ordering::SeqCst);
        self.build();
        Ok(())
    }

    fn run(&self, _env: &BuildEnv) -> EmberResult<()> {
        self.runs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.runs() > 0
    }

    fn test(&self, _env: &BuildEnv) -> EmberResult<()> {
        Ok(())
    }
}

/// A host root in a temp directory
pub struct TestHost {
    dir: TempDir,
    host: HostConfig,
    pub registry: Arc<PrecompileRegistry>,
}

impl TestHost {
    pub fn new(environment: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let host = HostConfig::new(Environment::new(environment), dir.path());
        Self {
            dir,
            host,
            registry: Arc::new(PrecompileRegistry::new()),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn paths(&self, target: &BuildTarget) -> PathSet {
        PathSet::new(&self.host, target)
    }

    /// Target `name` with default options and its project root created
    pub fn target(&self, name: &str) -> BuildTarget {
        self.target_with(name, TargetOptions::default())
    }

    pub fn target_with(&self, name: &str, options: TargetOptions) -> BuildTarget {
        let target = BuildTarget::with_options(name, options);
        fs::create_dir_all(self.paths(&target).root()).expect("Failed to create app root");
        target
    }

    pub fn fake_build(&self, target: &BuildTarget) -> Arc<FakeBuild> {
        Arc::new(FakeBuild::new(self.paths(target)))
    }

    /// A fresh controller, as a new worker process would create it
    pub fn controller(
        &self,
        target: &BuildTarget,
        runner: Arc<FakeBuild>,
    ) -> BuildController<LocalFs> {
        let ports = ControllerPorts {
            paths: Arc::new(self.paths(target)),
            runner,
            templater: Arc::new(HtmlPage::new()),
            registry: self.registry.clone(),
            manifest: Arc::new(PackageJsonReader::new()),
        };
        BuildController::new(target.clone(), self.host.clone(), ports, LocalFs::new())
    }

    /// Controller plus its fake build for a default target
    pub fn app(&self, name: &str) -> (BuildController<LocalFs>, Arc<FakeBuild>) {
        let target = self.target(name);
        let build = self.fake_build(&target);
        (self.controller(&target, build.clone()), build)
    }
}

pub fn write_error(paths: &PathSet, report: &str) {
    fs::create_dir_all(paths.tmp()).unwrap();
    fs::write(paths.build_error_file(), report).unwrap();
}

pub fn hold_lock(paths: &PathSet) {
    fs::create_dir_all(paths.tmp()).unwrap();
    fs::write(paths.lockfile(), "").unwrap();
}

pub fn release_lock(paths: &PathSet) {
    let _ = fs::remove_file(paths.lockfile());
}
