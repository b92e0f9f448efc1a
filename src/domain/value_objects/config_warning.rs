//! Unknown keys found while reading `ember-lift.toml`.

use std::fmt;
use std::path::PathBuf;

/// A key in `ember-lift.toml` that no section recognises.
///
/// Loading still succeeds; the CLI prints these before running a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted location of the key, e.g. `apps.frontend.exclude_ember_dep`
    pub path: String,
    pub file: PathBuf,
    /// 1-indexed
    pub line: Option<usize>,
    /// Closest known key
    pub suggestion: Option<String>,
}

impl ConfigWarning {
    /// Last segment of the dotted path
    pub fn key(&self) -> &str {
        self.path.rsplit('.').next().unwrap_or(&self.path)
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.path, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        Ok(())
    }
}
