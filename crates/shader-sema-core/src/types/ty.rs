//! The canonical type representation.
//!
//! [`Type`] is a closed sum over every type the shading language can express.
//! Composite variants refer to their element types through [`TypeHandle`]s
//! issued by the same [`TypeUniverse`](super::TypeUniverse).

use crate::{Access, AddressSpace, SamplerKind, ScalarKind, TexelFormat, TextureDimension};

/// Handle to an interned type.
///
/// Handles are plain indices into one universe: copying is free and equality
/// is integer equality. A handle is only meaningful for the universe that
/// issued it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct TypeHandle(pub(crate) u32);

impl TypeHandle {
    // ========================================================================
    // Reserved handles. TypeUniverse::new() interns these at fixed indices.
    // ========================================================================

    pub const VOID: TypeHandle = TypeHandle(0);
    pub const BOOL: TypeHandle = TypeHandle(1);
    pub const I32: TypeHandle = TypeHandle(2);
    pub const U32: TypeHandle = TypeHandle(3);
    pub const F32: TypeHandle = TypeHandle(4);
    pub const F16: TypeHandle = TypeHandle(5);
    pub const ABSTRACT_INT: TypeHandle = TypeHandle(6);
    pub const ABSTRACT_FLOAT: TypeHandle = TypeHandle(7);

    /// First index available to non-reserved types.
    pub const FIRST_DYNAMIC: u32 = 8;

    /// The raw index, for debugging.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }

    /// The reserved handle for a scalar kind (no universe needed).
    pub const fn scalar(kind: ScalarKind) -> TypeHandle {
        match kind {
            ScalarKind::Bool => Self::BOOL,
            ScalarKind::I32 => Self::I32,
            ScalarKind::U32 => Self::U32,
            ScalarKind::F32 => Self::F32,
            ScalarKind::F16 => Self::F16,
            ScalarKind::AbstractInt => Self::ABSTRACT_INT,
            ScalarKind::AbstractFloat => Self::ABSTRACT_FLOAT,
        }
    }

    /// The scalar kind of a reserved scalar handle (no universe needed).
    pub const fn scalar_kind(self) -> Option<ScalarKind> {
        match self.0 {
            1 => Some(ScalarKind::Bool),
            2 => Some(ScalarKind::I32),
            3 => Some(ScalarKind::U32),
            4 => Some(ScalarKind::F32),
            5 => Some(ScalarKind::F16),
            6 => Some(ScalarKind::AbstractInt),
            7 => Some(ScalarKind::AbstractFloat),
            _ => None,
        }
    }
}

/// Element count of an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayCount {
    /// Fixed at compile time.
    Constant(u32),
    /// Sized by the bound buffer.
    Runtime,
}

/// One named member of a structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructMember {
    pub name: Box<str>,
    pub ty: TypeHandle,
}

impl StructMember {
    pub fn new(name: impl Into<Box<str>>, ty: TypeHandle) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A nominal structure type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructType {
    pub name: Box<str>,
    pub members: Vec<StructMember>,
    /// Concrete structures this one converts to, in preference order.
    ///
    /// Only builtin result structures holding abstract members populate this.
    pub concrete: Vec<TypeHandle>,
}

/// A canonical type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Void,
    Bool,
    I32,
    U32,
    F32,
    F16,
    AbstractInt,
    AbstractFloat,
    Pointer {
        store: TypeHandle,
        space: AddressSpace,
        access: Access,
    },
    Reference {
        store: TypeHandle,
        space: AddressSpace,
        access: Access,
    },
    Vector {
        element: TypeHandle,
        width: u32,
    },
    /// A matrix stored as `columns` column vectors of type `column`.
    Matrix {
        column: TypeHandle,
        columns: u32,
    },
    Array {
        element: TypeHandle,
        count: ArrayCount,
        stride: u32,
    },
    Atomic {
        element: TypeHandle,
    },
    Sampler(SamplerKind),
    DepthTexture(TextureDimension),
    DepthMultisampledTexture(TextureDimension),
    MultisampledTexture {
        dim: TextureDimension,
        sampled: TypeHandle,
    },
    SampledTexture {
        dim: TextureDimension,
        sampled: TypeHandle,
    },
    StorageTexture {
        dim: TextureDimension,
        format: TexelFormat,
        access: Access,
    },
    ExternalTexture,
    Alias {
        name: Box<str>,
        target: TypeHandle,
    },
    Struct(StructType),
}

impl Type {
    /// The scalar kind of a scalar type.
    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        match self {
            Type::Bool => Some(ScalarKind::Bool),
            Type::I32 => Some(ScalarKind::I32),
            Type::U32 => Some(ScalarKind::U32),
            Type::F32 => Some(ScalarKind::F32),
            Type::F16 => Some(ScalarKind::F16),
            Type::AbstractInt => Some(ScalarKind::AbstractInt),
            Type::AbstractFloat => Some(ScalarKind::AbstractFloat),
            _ => None,
        }
    }

    /// The scalar type of a scalar kind.
    pub fn from_scalar(kind: ScalarKind) -> Type {
        match kind {
            ScalarKind::Bool => Type::Bool,
            ScalarKind::I32 => Type::I32,
            ScalarKind::U32 => Type::U32,
            ScalarKind::F32 => Type::F32,
            ScalarKind::F16 => Type::F16,
            ScalarKind::AbstractInt => Type::AbstractInt,
            ScalarKind::AbstractFloat => Type::AbstractFloat,
        }
    }

    /// Whether equality of this type is decided by name rather than structure.
    #[inline]
    pub fn is_nominal(&self) -> bool {
        matches!(self, Type::Alias { .. } | Type::Struct(_))
    }
}
