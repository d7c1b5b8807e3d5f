//! Scalar kinds for the shading language's built-in numeric and boolean types.

use std::fmt;

/// Scalar kinds, including the two abstract numeric kinds produced by
/// untyped literals.
///
/// The declaration order is the precedence order used when a bound type
/// is checked against a type class: the first member that accepts wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScalarKind {
    AbstractInt,
    AbstractFloat,
    I32,
    U32,
    F32,
    F16,
    Bool,
}

impl ScalarKind {
    /// Every scalar kind in precedence order.
    pub const ALL: [ScalarKind; 7] = [
        ScalarKind::AbstractInt,
        ScalarKind::AbstractFloat,
        ScalarKind::I32,
        ScalarKind::U32,
        ScalarKind::F32,
        ScalarKind::F16,
        ScalarKind::Bool,
    ];

    /// The name used in source and diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            ScalarKind::AbstractInt => "abstract-int",
            ScalarKind::AbstractFloat => "abstract-float",
            ScalarKind::I32 => "i32",
            ScalarKind::U32 => "u32",
            ScalarKind::F32 => "f32",
            ScalarKind::F16 => "f16",
            ScalarKind::Bool => "bool",
        }
    }

    #[inline]
    pub const fn is_abstract(self) -> bool {
        matches!(self, ScalarKind::AbstractInt | ScalarKind::AbstractFloat)
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(
            self,
            ScalarKind::AbstractFloat | ScalarKind::F32 | ScalarKind::F16
        )
    }

    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            ScalarKind::AbstractInt | ScalarKind::I32 | ScalarKind::U32
        )
    }

    #[inline]
    pub const fn is_numeric(self) -> bool {
        !matches!(self, ScalarKind::Bool)
    }

    /// The concrete kind an abstract kind materializes to by default.
    ///
    /// Concrete kinds map to themselves.
    pub const fn materialized(self) -> ScalarKind {
        match self {
            ScalarKind::AbstractInt => ScalarKind::I32,
            ScalarKind::AbstractFloat => ScalarKind::F32,
            other => other,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
