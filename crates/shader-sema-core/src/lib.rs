//! Core vocabulary for shader semantic analysis.
//!
//! This crate owns the canonical representation of types ([`TypeUniverse`],
//! [`Type`], [`TypeHandle`]) together with the small enumerations that
//! parameterize them, implicit conversion ranking, and the error and
//! diagnostic types shared by the catalog and the resolver.

mod diagnostic;
mod error;
mod intrinsic_hash;
mod kinds;
mod ops;
mod scalar;
mod span;
mod stage;
mod types;
mod usage;

pub use diagnostic::{CallKind, CandidateSection, Diagnostic};
pub use error::{CatalogError, MatchError};
pub use intrinsic_hash::{IntrinsicHash, hash_constants};
pub use kinds::{Access, AddressSpace, SamplerKind, TexelFormat, TextureDimension};
pub use ops::{BinaryOp, UnaryOp};
pub use scalar::ScalarKind;
pub use span::Span;
pub use stage::EvaluationStage;
pub use types::{
    ArrayCount, ConversionRank, FriendlyNames, StructMember, StructType, Type, TypeHandle,
    TypePrinter, TypeUniverse,
};
pub use usage::ParameterUsage;
