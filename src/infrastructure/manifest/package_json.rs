//! package.json reader

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::ports::ManifestReader;
use crate::error::{EmberError, EmberResult};

#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(default)]
    name: Option<String>,
}

/// Reads the `name` field of an npm package manifest
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageJsonReader;

impl PackageJsonReader {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestReader for PackageJsonReader {
    fn app_name(&self, path: &Path) -> EmberResult<String> {
        let content = fs::read_to_string(path).map_err(|e| EmberError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let package: PackageJson =
            serde_json::from_str(&content).map_err(|e| EmberError::Manifest {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        match package.name {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => Err(EmberError::Manifest {
                path: path.to_path_buf(),
                message: "missing `name` field".to_string(),
            }),
        }
    }
}
