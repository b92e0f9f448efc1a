//! Domain Entities
//!
//! - `BuildTarget` - A front-end application and its options
//! - `BuildState` - Per-process lifecycle memoization

mod build_target;

pub use build_target::{BuildState, BuildTarget, TargetOptions};
