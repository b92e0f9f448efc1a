//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation (Local)
//! - `paths/` - Path resolution (`PathSet`)
//! - `process/` - Subprocess runner (`Shell`)
//! - `html/` - HTML fragment injection (`HtmlPage`)
//! - `registry/` - Host asset lists (`PrecompileRegistry`)
//! - `manifest/` - package.json reader

pub mod fs;
pub mod html;
pub mod manifest;
pub mod paths;
pub mod process;
pub mod registry;

// Re-export for convenience
pub use fs::LocalFs;
pub use html::HtmlPage;
pub use manifest::PackageJsonReader;
pub use paths::PathSet;
pub use process::{Shell, ShellCommands, DEFAULT_INSTALL_COMMAND};
pub use registry::PrecompileRegistry;
