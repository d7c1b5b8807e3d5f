//! Overload resolution for shader intrinsics.
//!
//! This crate matches calls to builtin functions, operators and value
//! constructors against an immutable [`Catalog`](shader_sema_catalog::Catalog)
//! and reports either the instantiated signature or a diagnostic listing
//! the candidates, closest first.
//!
//! ## Architecture
//!
//! ```text
//! IntrinsicTable::lookup
//!   -> score every overload (template binding, constraint checks)
//!   -> rank the full matches (conversion rank, stage, declaration order)
//!   -> instantiate the winner (materialize abstracts at runtime)
//!   or build the no-match diagnostic
//! ```

mod builtin_structs;
mod config;
mod formatter;
mod materialize;
mod overload;
mod signature;
mod table;
mod template;

pub use builtin_structs::{ResultStruct, result_struct};
pub use config::MatcherConfig;
pub use materialize::{materialize, materialize_for};
pub use signature::SignatureId;
pub use table::{CallTarget, IntrinsicTable, MatchResult, Operands, ResolvedParameter};
