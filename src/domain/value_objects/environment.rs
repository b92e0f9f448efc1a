//! Environment value object - the host application's environment name
//!
//! Production-like environments serve an immutable, already-built
//! `index.html` from a cached copy; every other environment reads the
//! dev server's output live.

use std::fmt;

/// Name of the environment every production-like check falls back to
pub const PRODUCTION: &str = "production";

/// The host's environment (e.g. `development`, `test`, `production`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    name: String,
    production_like: bool,
}

impl Environment {
    /// Create an environment; only `production` is production-like
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let production_like = name == PRODUCTION;
        Self {
            name,
            production_like,
        }
    }

    /// Create an environment that is production-like when its name appears in `production_like`
    pub fn with_production_like<S: AsRef<str>>(
        name: impl Into<String>,
        production_like: &[S],
    ) -> Self {
        let name = name.into();
        let production_like =
            name == PRODUCTION || production_like.iter().any(|env| env.as_ref() == name);
        Self {
            name,
            production_like,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_production_like(&self) -> bool {
        self.production_like
    }

    /// The `--environment` value handed to ember-cli
    pub fn ember_environment(&self) -> &'static str {
        if self.production_like {
            "production"
        } else {
            "development"
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new("development")
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
