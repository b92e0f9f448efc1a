//! Presentation Layer
//!
//! This layer handles:
//! - Creating build controllers with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates controllers with proper dependencies (dependency injection)
//! - `output` - Output rendering
//!
//! ## Usage
//!
//! ```ignore
//! use ember_lift::presentation::factory;
//!
//! let controller = factory::create_controller(&config, &cwd, "frontend", registry)?;
//! controller.compile()?;
//! ```

pub mod factory;
pub mod output;

pub use factory::{create_app, create_controller, AppHandle, ConcreteBuildController};
pub use output::OutputFormat;
