//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod asset_registry;
pub mod file_system;
pub mod html_templater;
pub mod manifest_reader;
pub mod path_resolver;
pub mod process_runner;

pub use asset_registry::AssetRegistry;
pub use file_system::{FileSystem, FsError, FsResult};
pub use html_templater::HtmlTemplater;
pub use manifest_reader::ManifestReader;
pub use path_resolver::PathResolver;
pub use process_runner::ProcessRunner;
