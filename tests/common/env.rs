//! Test environment for running the ember-lift binary.
//!
//! `TestEnv` gives each test its own host root and runs the CLI with
//! `--root` pointing at it, with inherited environment overrides removed.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running an ember-lift CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated host root plus helpers to run the CLI against it
pub struct TestEnv {
    pub host_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            host_root: TempDir::new().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_ember-lift")),
        }
    }

    /// Host root with `ember-lift.toml` already written
    pub fn with_config(config: &str) -> Self {
        let env = Self::new();
        env.write_file("ember-lift.toml", config);
        env
    }

    pub fn root(&self) -> &Path {
        self.host_root.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.host_root.path().join(relative)
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Run ember-lift with `--root` set to the host root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root())
            .arg("--root")
            .arg(self.root())
            .args(args)
            .env_remove("RAILS_ENV")
            .env_remove("EMBER_LIFT_ENV")
            .env_remove("EMBER_LIFT_ROOT")
            .env_remove("EMBER_LIFT_WAIT_TIMEOUT_MS")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute ember-lift");
        output_to_result(output)
    }

    /// Install an executable shell script standing in for ember-cli
    #[cfg(unix)]
    pub fn fake_ember(&self, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path("bin/fake-ember");
        self.write_file("bin/fake-ember", script);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake ember executable");
        path
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
