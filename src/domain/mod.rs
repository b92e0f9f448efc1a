//! Domain Layer
//!
//! Build targets, value types and the ports the lifecycle controller talks to.
//!
//! ## Structure
//!
//! - `entities/` - Build targets and their lifecycle state
//! - `value_objects/` - Immutable value types (Environment, AssetPattern, FailureReport)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or spawns processes
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
