//! In-memory precompile registry
//!
//! Stands in for the host pipeline's precompile list and digest whitelist.
//! Shared across controllers, so both lists sit behind a lock.

use std::sync::{Mutex, PoisonError};

use crate::domain::ports::AssetRegistry;
use crate::domain::value_objects::AssetPattern;

#[derive(Debug, Default)]
pub struct PrecompileRegistry {
    precompile: Mutex<Vec<AssetPattern>>,
    digest_whitelist: Mutex<Vec<AssetPattern>>,
}

impl PrecompileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn precompile_patterns(&self) -> Vec<AssetPattern> {
        snapshot(&self.precompile)
    }

    pub fn digest_whitelist(&self) -> Vec<AssetPattern> {
        snapshot(&self.digest_whitelist)
    }

    /// Whether the host would precompile this logical asset path
    pub fn is_precompiled(&self, logical_path: &str) -> bool {
        any_match(&self.precompile, logical_path)
    }

    /// Whether this logical asset path is also served without a digest
    pub fn is_whitelisted(&self, logical_path: &str) -> bool {
        any_match(&self.digest_whitelist, logical_path)
    }
}

impl AssetRegistry for PrecompileRegistry {
    fn append_precompile(&self, pattern: AssetPattern) {
        push(&self.precompile, pattern);
    }

    fn append_digest_whitelist(&self, pattern: AssetPattern) {
        push(&self.digest_whitelist, pattern);
    }
}

fn push(list: &Mutex<Vec<AssetPattern>>, pattern: AssetPattern) {
    list.lock().unwrap_or_else(PoisonError::into_inner).push(pattern);
}

fn snapshot(list: &Mutex<Vec<AssetPattern>>) -> Vec<AssetPattern> {
    list.lock().unwrap_or_else(PoisonError::into_inner).clone()
}

fn any_match(list: &Mutex<Vec<AssetPattern>>, logical_path: &str) -> bool {
    list.lock()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .any(|pattern| pattern.matches(logical_path))
}
