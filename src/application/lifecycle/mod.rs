//! Build Lifecycle Module
//!
//! ## Structure
//!
//! - `controller` - `BuildController`, the prepare/compile/run state machine
//! - `sentinel` - Error sentinel protocol
//! - `wait` - Lockfile poll loop (`WaitOptions`)
//!
//! ## Usage
//!
//! ```ignore
//! use ember_lift::application::lifecycle::BuildController;
//!
//! let controller = BuildController::new(target, host, ports, LocalFs::new());
//! controller.compile()?;
//! let html = controller.index_html("<meta name=\"csrf\">", "")?;
//! ```

mod controller;
mod sentinel;
mod wait;

pub use controller::{BuildController, ControllerPorts};
pub use wait::{WaitOptions, DEFAULT_POLL_INTERVAL};
