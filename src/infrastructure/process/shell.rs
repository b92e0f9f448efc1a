//! Shell Process Runner
//!
//! Runs the project-local ember-cli. Output from every subprocess is
//! appended to the target's log file; the dev server child is owned by the
//! runner and killed when the runner is stopped or dropped.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Local;
use tracing::{debug, info, warn};

use crate::domain::ports::{PathResolver, ProcessRunner};
use crate::domain::value_objects::{BuildEnv, Environment};
use crate::error::{EmberError, EmberResult};
use crate::infrastructure::paths::PathSet;

/// Default command used to install front-end dependencies
pub const DEFAULT_INSTALL_COMMAND: &str = "npm install";

/// Commands the shell runner invokes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommands {
    /// Shell command line run in the project root by `install`
    pub install: String,
    /// Overrides the project-local ember-cli executable
    pub ember: Option<PathBuf>,
}

impl Default for ShellCommands {
    fn default() -> Self {
        Self {
            install: DEFAULT_INSTALL_COMMAND.to_string(),
            ember: None,
        }
    }
}

/// ProcessRunner backed by real subprocesses
pub struct Shell {
    name: String,
    root: PathBuf,
    dist: PathBuf,
    ember: PathBuf,
    log: PathBuf,
    ember_environment: &'static str,
    install_command: String,
    dev_server: Mutex<Option<Child>>,
}

impl Shell {
    pub fn new(
        name: impl Into<String>,
        paths: &PathSet,
        environment: &Environment,
        commands: ShellCommands,
    ) -> Self {
        Self {
            name: name.into(),
            root: paths.root(),
            dist: paths.dist(),
            ember: commands.ember.unwrap_or_else(|| paths.ember()),
            log: paths.log(),
            ember_environment: environment.ember_environment(),
            install_command: commands.install,
            dev_server: Mutex::new(None),
        }
    }

    pub fn log_file(&self) -> &Path {
        &self.log
    }

    /// Kill the dev server if one is running
    pub fn stop(&self) -> EmberResult<()> {
        let mut dev_server = self.lock_dev_server();
        if let Some(mut child) = dev_server.take() {
            info!(app = %self.name, pid = child.id(), "stopping dev server");
            if let Err(err) = child.kill() {
                // Already exited on its own.
                debug!(app = %self.name, error = %err, "dev server kill failed");
            }
            child.wait()?;
        }
        Ok(())
    }

    fn lock_dev_server(&self) -> MutexGuard<'_, Option<Child>> {
        self.dev_server.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Polls the guarded child, clearing the slot once it has exited
    fn is_alive(&self, dev_server: &mut Option<Child>) -> bool {
        let Some(child) = dev_server.as_mut() else {
            return false;
        };

        match child.try_wait() {
            Ok(None) => true,
            Ok(Some(status)) => {
                warn!(app = %self.name, %status, "dev server exited");
                *dev_server = None;
                false
            }
            Err(err) => {
                warn!(app = %self.name, error = %err, "could not query dev server");
                false
            }
        }
    }

    fn build_args(&self, watch: bool) -> Vec<String> {
        let mut args = vec![
            "build".to_string(),
            "--environment".to_string(),
            self.ember_environment.to_string(),
            "--output-path".to_string(),
            self.dist.display().to_string(),
        ];
        if watch {
            args.push("--watch".to_string());
        }
        args
    }

    fn ember_command(
        &self,
        label: &str,
        args: &[String],
        env: &BuildEnv,
    ) -> EmberResult<Command> {
        if !self.ember.exists() {
            return Err(EmberError::MissingDependency {
                name: self.name.clone(),
                path: self.ember.clone(),
            });
        }

        let mut cmd = Command::new(&self.ember);
        cmd.args(args);
        self.configure(&mut cmd, label, env)?;
        Ok(cmd)
    }

    fn shell_command(
        &self,
        label: &str,
        command_line: &str,
        env: &BuildEnv,
    ) -> EmberResult<Command> {
        let mut cmd = if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", command_line]);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.args(["-c", command_line]);
            cmd
        };
        self.configure(&mut cmd, label, env)?;
        Ok(cmd)
    }

    fn configure(&self, cmd: &mut Command, label: &str, env: &BuildEnv) -> EmberResult<()> {
        cmd.current_dir(&self.root);
        for (key, value) in env.iter() {
            cmd.env(key, value);
        }

        let log = self.open_log(label)?;
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::from(log.try_clone()?));
        cmd.stderr(Stdio::from(log));
        Ok(())
    }

    fn open_log(&self, label: &str) -> EmberResult<File> {
        if let Some(parent) = self.log.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut log = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log)?;
        writeln!(
            log,
            "--- {} {} started at {}",
            self.name,
            label,
            Local::now().to_rfc3339()
        )?;
        Ok(log)
    }

    fn run_to_completion(&self, label: &str, mut cmd: Command) -> EmberResult<()> {
        debug!(app = %self.name, command = label, log = %self.log.display(), "running");
        let status = cmd.status().map_err(|e| self.process_error(label, e.to_string()))?;
        self.ensure_success(label, status)
    }

    fn ensure_success(&self, label: &str, status: ExitStatus) -> EmberResult<()> {
        if status.success() {
            return Ok(());
        }
        Err(self.process_error(
            label,
            format!("exited with status {} (see {})", status, self.log.display()),
        ))
    }

    fn process_error(&self, label: &str, message: String) -> EmberError {
        EmberError::Process {
            name: self.name.clone(),
            command: label.to_string(),
            message,
        }
    }
}

impl ProcessRunner for Shell {
    fn install(&self, env: &BuildEnv) -> EmberResult<()> {
        info!(app = %self.name, command = %self.install_command, "installing dependencies");
        let cmd = self.shell_command("install", &self.install_command, env)?;
        self.run_to_completion("install", cmd)
    }

    fn compile(&self, env: &BuildEnv) -> EmberResult<()> {
        let cmd = self.ember_command("build", &self.build_args(false), env)?;
        self.run_to_completion("build", cmd)
    }

    fn run(&self, env: &BuildEnv) -> EmberResult<()> {
        // Held until the child is stored so concurrent callers spawn at most one.
        let mut dev_server = self.lock_dev_server();
        if self.is_alive(&mut dev_server) {
            return Ok(());
        }

        let mut cmd = self.ember_command("build --watch", &self.build_args(true), env)?;
        let child = cmd
            .spawn()
            .map_err(|e| self.process_error("build --watch", e.to_string()))?;
        info!(app = %self.name, pid = child.id(), "started dev server");

        *dev_server = Some(child);
        Ok(())
    }

    fn is_running(&self) -> bool {
        let mut dev_server = self.lock_dev_server();
        self.is_alive(&mut dev_server)
    }

    fn test(&self, env: &BuildEnv) -> EmberResult<()> {
        let cmd = self.ember_command("test", &["test".to_string()], env)?;
        self.run_to_completion("test", cmd)
    }
}

impl Drop for Shell {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            warn!(app = %self.name, error = %err, "failed to stop dev server");
        }
    }
}
