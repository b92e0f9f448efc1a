//! Path resolution for build targets

mod path_set;

pub use path_set::PathSet;
