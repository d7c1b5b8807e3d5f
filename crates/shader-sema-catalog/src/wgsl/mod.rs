//! The builtin WGSL overload catalog.

mod builtins;
mod constructors;
mod dsl;
mod operators;
mod textures;

use shader_sema_core::CatalogError;

use crate::catalog::{Catalog, CatalogBuilder};

/// Register every WGSL intrinsic with `builder`.
pub fn register(builder: &mut CatalogBuilder) -> Result<(), CatalogError> {
    builtins::register(builder)?;
    textures::register(builder)?;
    operators::register(builder)?;
    constructors::register(builder)?;
    Ok(())
}

impl Catalog {
    /// Build the catalog of WGSL builtin functions, operators, constructors
    /// and conversions.
    ///
    /// Building validates every overload, so this only fails if the tables
    /// themselves are malformed.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn wgsl() -> Result<Catalog, CatalogError> {
        let mut builder = Catalog::builder();
        register(&mut builder)?;
        Ok(builder.build())
    }
}
