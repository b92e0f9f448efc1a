//! Host asset pipeline registries

mod precompile;

pub use precompile::PrecompileRegistry;
