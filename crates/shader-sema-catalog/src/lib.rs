//! The intrinsic overload catalog.
//!
//! An overload catalog maps each call target (builtin function, operator,
//! constructor/conversion family) to its ordered list of [`Overload`]
//! signatures. Signatures are written as [`TypeMatcher`] patterns over
//! template types and template numbers, which the resolver unifies against
//! argument types.
//!
//! The catalog is built once, validated while it is built, and is immutable
//! afterwards. [`Catalog::wgsl`] builds the WGSL builtin catalog.

mod catalog;
mod flags;
mod matcher;
mod overload;
mod render;
pub mod wgsl;

pub use catalog::{Catalog, CatalogBuilder, Intrinsic};
pub use flags::{OverloadFlags, PipelineStages};
pub use matcher::{NumberMatcher, TypeClass, TypeMatcher};
pub use overload::{
    Overload, OverloadBuilder, OverloadKind, Parameter, TemplateNumber, TemplateType,
};
pub use render::join_or;
