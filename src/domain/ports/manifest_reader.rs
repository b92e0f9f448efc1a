//! ManifestReader port - reads the front-end package manifest

use std::path::Path;

use crate::error::EmberResult;

pub trait ManifestReader: Send + Sync {
    /// The manifest's `name` field
    fn app_name(&self, path: &Path) -> EmberResult<String>;
}
