//! Asset pattern value object
//!
//! A namespace prefix registered with the host's precompile list and digest
//! whitelist so the host pipeline serves everything under `<name>/`.

use std::fmt;

/// Anchored prefix pattern matching every logical asset path under a target's namespace
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetPattern {
    prefix: String,
}

impl AssetPattern {
    /// Pattern for everything under `<name>/`
    pub fn namespace(name: &str) -> Self {
        Self {
            prefix: format!("{}/", name.trim_end_matches('/')),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether a logical asset path (e.g. `frontend/assets/vendor.js`) falls under this pattern
    pub fn matches(&self, logical_path: &str) -> bool {
        logical_path.starts_with(&self.prefix)
    }
}

impl fmt::Display for AssetPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "^{}", self.prefix)
    }
}
