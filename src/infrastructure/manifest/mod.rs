//! Front-end package manifest readers

mod package_json;

pub use package_json::PackageJsonReader;
