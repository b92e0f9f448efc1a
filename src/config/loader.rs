//! Configuration loading
//!
//! Precedence, highest first:
//! 1. Environment variables (`EMBER_LIFT_*`, then `RAILS_ENV`)
//! 2. `ember-lift.toml` in the host root
//! 3. Built-in defaults

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::value_objects::ConfigWarning;
use crate::error::{EmberError, EmberResult};

use super::types::{Config, CONFIG_FILE_NAME};

/// Environment name override
pub const ENV_VAR: &str = "EMBER_LIFT_ENV";
/// Host root override
pub const ROOT_VAR: &str = "EMBER_LIFT_ROOT";
/// Wait timeout override in milliseconds
pub const WAIT_TIMEOUT_VAR: &str = "EMBER_LIFT_WAIT_TIMEOUT_MS";
/// Host framework's own environment variable, used when `EMBER_LIFT_ENV` is unset
pub const HOST_ENV_VAR: &str = "RAILS_ENV";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> EmberResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| EmberError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let mut warning = ConfigWarning {
                path: path_str,
                file: path.to_path_buf(),
                line: None,
                suggestion: None,
            };
            warning.line = key_line(&content, warning.key());
            warning.suggestion = suggest_key(warning.key()).map(str::to_string);
            warning
        })
        .collect();

    Ok((config, warnings))
}

/// Load `ember-lift.toml` from `dir`, falling back to defaults, then apply env overrides
pub fn load_from_dir(dir: &Path) -> EmberResult<(Config, Vec<ConfigWarning>)> {
    let path = dir.join(CONFIG_FILE_NAME);
    let (config, warnings) = if path.exists() {
        debug!(path = %path.display(), "loading config");
        load_with_warnings(&path)?
    } else {
        debug!(dir = %dir.display(), "no config file, using defaults");
        (Config::default(), Vec::new())
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides from the process environment
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply environment variable overrides from an arbitrary lookup
pub fn with_env_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    // EMBER_LIFT_ENV wins over RAILS_ENV, which wins over the file
    if let Some(env) = non_empty(ENV_VAR).or_else(|| non_empty(HOST_ENV_VAR)) {
        config.host.environment = Some(env);
    }

    if let Some(root) = non_empty(ROOT_VAR) {
        config.host.root = Some(root.into());
    }

    if let Some(timeout) = non_empty(WAIT_TIMEOUT_VAR) {
        match timeout.trim().parse::<u64>() {
            Ok(ms) => config.wait.timeout_ms = Some(ms),
            Err(_) => debug!(value = %timeout, "ignoring invalid {WAIT_TIMEOUT_VAR}"),
        }
    }

    config
}

/// Line where `key` is assigned or opened as a table
fn key_line(content: &str, key: &str) -> Option<usize> {
    let table = format!("[{key}]");
    content
        .lines()
        .map(str::trim)
        .position(|line| {
            line == table
                || line
                    .strip_prefix(key)
                    .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|index| index + 1)
}

/// Every key `ember-lift.toml` understands
const KNOWN_KEYS: &[&str] = &[
    "host",
    "environment",
    "root",
    "tool_root",
    "production_like",
    "wait",
    "poll_interval_ms",
    "timeout_ms",
    "commands",
    "install",
    "ember",
    "apps",
    "path",
    "name",
    "exclude_ember_deps",
];

/// Largest edit distance still offered as a suggestion
const MAX_SUGGESTION_DISTANCE: usize = 2;

fn suggest_key(unknown: &str) -> Option<&'static str> {
    KNOWN_KEYS
        .iter()
        .map(|known| (*known, edit_distance(unknown, known)))
        .filter(|(_, distance)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(_, distance)| *distance)
        .map(|(known, _)| known)
}

/// Levenshtein distance over chars, keeping a single row
fn edit_distance(from: &str, to: &str) -> usize {
    let to: Vec<char> = to.chars().collect();
    let mut row: Vec<usize> = (0..=to.len()).collect();

    for (i, a) in from.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, b) in to.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if a == *b {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[to.len()]
}
