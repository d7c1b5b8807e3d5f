//! Canonical types and their interning universe.

mod conversion;
mod predicates;
mod printer;
mod ty;
mod universe;

pub use conversion::ConversionRank;
pub use printer::{FriendlyNames, TypePrinter};
pub use ty::{ArrayCount, StructMember, StructType, Type, TypeHandle};
pub use universe::TypeUniverse;
