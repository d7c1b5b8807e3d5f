//! Implicit conversion ranking.
//!
//! The only implicit conversions in the language are from abstract numerics
//! to other numerics, applied element-wise through vectors, matrices and
//! arrays. Each permitted conversion has a rank; lower is better, and `EXACT`
//! means no conversion at all.
//!
//! ## Ranks
//!
//! | from           | to             | rank |
//! |----------------|----------------|------|
//! | T              | T              | 0    |
//! | abstract-float | f32            | 1    |
//! | abstract-float | f16            | 2    |
//! | abstract-int   | i32            | 3    |
//! | abstract-int   | u32            | 4    |
//! | abstract-int   | abstract-float | 5    |
//! | abstract-int   | f32            | 6    |
//! | abstract-int   | f16            | 7    |
//!
//! [`TypeUniverse::common`] folds a list of types into the one every member
//! converts to, which is how template bindings widen.

use std::fmt;

use super::ty::{Type, TypeHandle};
use super::universe::TypeUniverse;

/// Rank of an implicit conversion. Lower is better.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct ConversionRank(pub u32);

impl ConversionRank {
    /// No conversion needed.
    pub const EXACT: ConversionRank = ConversionRank(0);
    pub const ABSTRACT_FLOAT_TO_F32: ConversionRank = ConversionRank(1);
    pub const ABSTRACT_FLOAT_TO_F16: ConversionRank = ConversionRank(2);
    pub const ABSTRACT_INT_TO_I32: ConversionRank = ConversionRank(3);
    pub const ABSTRACT_INT_TO_U32: ConversionRank = ConversionRank(4);
    pub const ABSTRACT_INT_TO_ABSTRACT_FLOAT: ConversionRank = ConversionRank(5);
    pub const ABSTRACT_INT_TO_F32: ConversionRank = ConversionRank(6);
    pub const ABSTRACT_INT_TO_F16: ConversionRank = ConversionRank(7);

    #[inline]
    pub fn is_exact(self) -> bool {
        self == Self::EXACT
    }
}

impl fmt::Display for ConversionRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TypeUniverse {
    /// Rank of the implicit conversion from `from` to `to`, or `None` if
    /// `from` cannot implicitly become `to`.
    ///
    /// References rank as their store type.
    pub fn conversion_rank(&self, from: TypeHandle, to: TypeHandle) -> Option<ConversionRank> {
        let from = self.unwrap_ref(from);
        if from == to {
            return Some(ConversionRank::EXACT);
        }
        match (self.get(from), self.get(to)) {
            (Type::AbstractFloat, Type::F32) => Some(ConversionRank::ABSTRACT_FLOAT_TO_F32),
            (Type::AbstractFloat, Type::F16) => Some(ConversionRank::ABSTRACT_FLOAT_TO_F16),
            (Type::AbstractInt, Type::I32) => Some(ConversionRank::ABSTRACT_INT_TO_I32),
            (Type::AbstractInt, Type::U32) => Some(ConversionRank::ABSTRACT_INT_TO_U32),
            (Type::AbstractInt, Type::AbstractFloat) => {
                Some(ConversionRank::ABSTRACT_INT_TO_ABSTRACT_FLOAT)
            }
            (Type::AbstractInt, Type::F32) => Some(ConversionRank::ABSTRACT_INT_TO_F32),
            (Type::AbstractInt, Type::F16) => Some(ConversionRank::ABSTRACT_INT_TO_F16),
            (
                Type::Vector {
                    element: from_el,
                    width: from_width,
                },
                Type::Vector {
                    element: to_el,
                    width: to_width,
                },
            ) if from_width == to_width => self.conversion_rank(*from_el, *to_el),
            (
                Type::Matrix {
                    column: from_col,
                    columns: from_cols,
                },
                Type::Matrix {
                    column: to_col,
                    columns: to_cols,
                },
            ) if from_cols == to_cols => self.conversion_rank(*from_col, *to_col),
            (
                Type::Array {
                    element: from_el,
                    count: from_count,
                    ..
                },
                Type::Array {
                    element: to_el,
                    count: to_count,
                    ..
                },
            ) if from_count == to_count => self.conversion_rank(*from_el, *to_el),
            (Type::Struct(from_struct), _) => from_struct
                .concrete
                .iter()
                .position(|&concrete| concrete == to)
                .map(|i| ConversionRank(i as u32 + 1)),
            _ => None,
        }
    }

    /// Whether `from` implicitly converts to `to`.
    #[inline]
    pub fn converts_to(&self, from: TypeHandle, to: TypeHandle) -> bool {
        self.conversion_rank(from, to).is_some()
    }

    /// The single type every member of `types` implicitly converts to, or
    /// `None` if there is no such type (or `types` is empty).
    ///
    /// Folds left: each type either converts to the running common type, or
    /// the running common type converts to it and it takes over.
    pub fn common(&self, types: &[TypeHandle]) -> Option<TypeHandle> {
        let (&first, rest) = types.split_first()?;
        let mut common = self.unwrap_ref(first);
        for &ty in rest {
            let ty = self.unwrap_ref(ty);
            if self.converts_to(ty, common) {
                continue;
            }
            if self.converts_to(common, ty) {
                common = ty;
                continue;
            }
            return None;
        }
        Some(common)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Access, AddressSpace, ArrayCount, StructMember};

    #[test]
    fn scalar_ranks() {
        let types = TypeUniverse::new();
        let cases = [
            (TypeHandle::F32, TypeHandle::F32, 0),
            (TypeHandle::ABSTRACT_FLOAT, TypeHandle::F32, 1),
            (TypeHandle::ABSTRACT_FLOAT, TypeHandle::F16, 2),
            (TypeHandle::ABSTRACT_INT, TypeHandle::I32, 3),
            (TypeHandle::ABSTRACT_INT, TypeHandle::U32, 4),
            (TypeHandle::ABSTRACT_INT, TypeHandle::ABSTRACT_FLOAT, 5),
            (TypeHandle::ABSTRACT_INT, TypeHandle::F32, 6),
            (TypeHandle::ABSTRACT_INT, TypeHandle::F16, 7),
        ];
        for (from, to, rank) in cases {
            assert_eq!(types.conversion_rank(from, to), Some(ConversionRank(rank)));
        }
    }

    #[test]
    fn concrete_types_never_convert() {
        let types = TypeUniverse::new();
        let pairs = [
            (TypeHandle::I32, TypeHandle::U32),
            (TypeHandle::F32, TypeHandle::ABSTRACT_FLOAT),
            (TypeHandle::ABSTRACT_FLOAT, TypeHandle::I32),
            (TypeHandle::BOOL, TypeHandle::I32),
        ];
        for (from, to) in pairs {
            assert_eq!(types.conversion_rank(from, to), None);
        }
    }

    #[test]
    fn composite_ranks_follow_elements() {
        let mut types = TypeUniverse::new();
        let vai = types.vector(TypeHandle::ABSTRACT_INT, 3);
        let vu = types.vector(TypeHandle::U32, 3);
        let vu2 = types.vector(TypeHandle::U32, 2);
        assert_eq!(
            types.conversion_rank(vai, vu),
            Some(ConversionRank::ABSTRACT_INT_TO_U32)
        );
        assert_eq!(types.conversion_rank(vai, vu2), None);

        let maf = types.matrix(TypeHandle::ABSTRACT_FLOAT, 2, 3);
        let mf16 = types.matrix(TypeHandle::F16, 2, 3);
        assert_eq!(
            types.conversion_rank(maf, mf16),
            Some(ConversionRank::ABSTRACT_FLOAT_TO_F16)
        );

        let aai = types.array(TypeHandle::ABSTRACT_INT, ArrayCount::Constant(2), 4);
        let ai32 = types.array(TypeHandle::I32, ArrayCount::Constant(2), 4);
        assert_eq!(
            types.conversion_rank(aai, ai32),
            Some(ConversionRank::ABSTRACT_INT_TO_I32)
        );
    }

    #[test]
    fn references_rank_as_store_type() {
        let mut types = TypeUniverse::new();
        let r = types.reference(TypeHandle::I32, AddressSpace::Function, Access::ReadWrite);
        assert_eq!(
            types.conversion_rank(r, TypeHandle::I32),
            Some(ConversionRank::EXACT)
        );
    }

    #[test]
    fn builtin_structs_rank_by_concrete_position() {
        let mut types = TypeUniverse::new();
        let f32_result = types.structure("__modf_result_f32", vec![]);
        let f16_result = types.structure("__modf_result_f16", vec![]);
        let abstract_result = types.builtin_structure(
            "__modf_result_abstract",
            vec![StructMember::new("fract", TypeHandle::ABSTRACT_FLOAT)],
            vec![f32_result, f16_result],
        );
        assert_eq!(
            types.conversion_rank(abstract_result, f32_result),
            Some(ConversionRank(1))
        );
        assert_eq!(
            types.conversion_rank(abstract_result, f16_result),
            Some(ConversionRank(2))
        );
        assert_eq!(types.conversion_rank(f32_result, abstract_result), None);
    }

    #[test]
    fn common_type_widens_abstract_to_concrete() {
        let mut types = TypeUniverse::new();
        assert_eq!(
            types.common(&[TypeHandle::ABSTRACT_INT, TypeHandle::U32]),
            Some(TypeHandle::U32)
        );
        assert_eq!(
            types.common(&[TypeHandle::F32, TypeHandle::ABSTRACT_FLOAT]),
            Some(TypeHandle::F32)
        );
        assert_eq!(
            types.common(&[TypeHandle::ABSTRACT_INT, TypeHandle::ABSTRACT_FLOAT]),
            Some(TypeHandle::ABSTRACT_FLOAT)
        );
        assert_eq!(types.common(&[TypeHandle::I32, TypeHandle::U32]), None);
        assert_eq!(types.common(&[]), None);

        let vai = types.vector(TypeHandle::ABSTRACT_INT, 2);
        let vf = types.vector(TypeHandle::F32, 2);
        assert_eq!(types.common(&[vai, vf, vai]), Some(vf));
    }
}
