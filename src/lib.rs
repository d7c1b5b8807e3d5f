//! Type interning and intrinsic overload resolution for WGSL-style shaders.
//!
//! This crate re-exports the three layers of the workspace:
//!
//! - [`shader_sema_core`]: the [`TypeUniverse`] interner, conversion
//!   ranking, spans, and the error and diagnostic types.
//! - [`shader_sema_catalog`]: the immutable overload [`Catalog`] and the
//!   builtin WGSL table.
//! - [`shader_sema_resolver`]: the [`IntrinsicTable`] matcher.
//!
//! # Example
//!
//! ```
//! use shader_sema::{Catalog, EvaluationStage, IntrinsicTable, Span, TypeHandle, TypeUniverse};
//!
//! let catalog = Catalog::wgsl().unwrap();
//! let mut types = TypeUniverse::new();
//! let mut table = IntrinsicTable::new(&catalog);
//!
//! let v = types.vector(TypeHandle::F32, 3);
//! let result = table
//!     .builtin(&mut types, "length", &[v], EvaluationStage::Runtime, Span::new(1, 1))
//!     .unwrap();
//! assert_eq!(result.return_type, TypeHandle::F32);
//! ```

pub use shader_sema_catalog::{
    Catalog, CatalogBuilder, Intrinsic, NumberMatcher, Overload, OverloadBuilder, OverloadFlags,
    OverloadKind, Parameter, PipelineStages, TemplateNumber, TemplateType, TypeClass, TypeMatcher,
};
pub use shader_sema_core::{
    Access, AddressSpace, ArrayCount, BinaryOp, CallKind, CandidateSection, CatalogError,
    ConversionRank, Diagnostic, EvaluationStage, FriendlyNames, IntrinsicHash, MatchError,
    ParameterUsage, SamplerKind, ScalarKind, Span, StructMember, StructType, TexelFormat,
    TextureDimension, Type, TypeHandle, TypePrinter, TypeUniverse, UnaryOp,
};
pub use shader_sema_resolver::{
    CallTarget, IntrinsicTable, MatchResult, MatcherConfig, Operands, ResolvedParameter,
    ResultStruct, SignatureId, materialize, materialize_for, result_struct,
};
