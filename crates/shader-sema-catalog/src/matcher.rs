//! Type and number patterns used by overload signatures.
//!
//! A [`TypeMatcher`] describes the set of argument types a parameter
//! accepts. Patterns may refer to the overload's template types (`T`) and
//! template numbers (`N`, `A`, `F`, ...) by index; the resolver binds these
//! while unifying arguments left to right.

use shader_sema_core::{
    Access, AddressSpace, SamplerKind, ScalarKind, TexelFormat, TextureDimension,
};

use ScalarKind::{AbstractFloat as FA, AbstractInt as IA, Bool, F16, F32, I32, U32};

/// A named set of scalar kinds a template type may be bound to.
///
/// `members` is in display order. Matching ignores it and tries members in
/// [`ScalarKind`] precedence order instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeClass {
    pub members: &'static [ScalarKind],
}

impl TypeClass {
    pub const FA_F32: TypeClass = TypeClass::new(&[FA, F32]);
    pub const FA_F32_F16: TypeClass = TypeClass::new(&[FA, F32, F16]);
    pub const F32_F16: TypeClass = TypeClass::new(&[F32, F16]);
    pub const FI32: TypeClass = TypeClass::new(&[F32, I32]);
    pub const FI32_F16: TypeClass = TypeClass::new(&[F32, I32, F16]);
    pub const FIU32: TypeClass = TypeClass::new(&[F32, I32, U32]);
    pub const FIU32_F16: TypeClass = TypeClass::new(&[F32, I32, U32, F16]);
    pub const IU32: TypeClass = TypeClass::new(&[I32, U32]);
    pub const IA_IU32: TypeClass = TypeClass::new(&[IA, I32, U32]);
    pub const FIA_FI32_F16: TypeClass = TypeClass::new(&[FA, IA, F32, I32, F16]);
    pub const FIA_FIU32: TypeClass = TypeClass::new(&[FA, IA, F32, I32, U32]);
    pub const FIA_FIU32_F16: TypeClass = TypeClass::new(&[FA, IA, F32, I32, U32, F16]);
    pub const SCALAR: TypeClass = TypeClass::new(&[IA, FA, F32, F16, I32, U32, Bool]);
    pub const SCALAR_NO_F32: TypeClass = TypeClass::new(&[IA, FA, I32, F16, U32, Bool]);
    pub const SCALAR_NO_F16: TypeClass = TypeClass::new(&[IA, FA, F32, I32, U32, Bool]);
    pub const SCALAR_NO_I32: TypeClass = TypeClass::new(&[IA, FA, F32, F16, U32, Bool]);
    pub const SCALAR_NO_U32: TypeClass = TypeClass::new(&[IA, FA, F32, F16, I32, Bool]);
    pub const SCALAR_NO_BOOL: TypeClass = TypeClass::new(&[IA, FA, F32, F16, I32, U32]);
    pub const CONCRETE_SCALAR: TypeClass = TypeClass::new(&[F32, F16, I32, U32, Bool]);

    pub const fn new(members: &'static [ScalarKind]) -> Self {
        Self { members }
    }

    /// Members in matching precedence order.
    pub fn precedence(&self) -> impl Iterator<Item = ScalarKind> + '_ {
        ScalarKind::ALL
            .into_iter()
            .filter(move |kind| self.members.contains(kind))
    }

    pub fn contains(&self, kind: ScalarKind) -> bool {
        self.members.contains(&kind)
    }
}

/// A pattern over template numbers: vector widths, matrix dimensions and
/// the enumerated type parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumberMatcher {
    /// Exactly this value.
    Fixed(u32),
    /// The overload's template number at this index.
    Template(usize),
    /// Any of these access modes.
    Access(&'static [Access]),
    /// Any of these address spaces.
    AddressSpace(&'static [AddressSpace]),
    /// Any of these texel formats.
    TexelFormat(&'static [TexelFormat]),
}

impl NumberMatcher {
    pub const WRITE: NumberMatcher = NumberMatcher::Access(&[Access::Write]);
    pub const READ: NumberMatcher = NumberMatcher::Access(&[Access::Read]);
    pub const READ_WRITE: NumberMatcher = NumberMatcher::Access(&[Access::ReadWrite]);
    pub const STORAGE: NumberMatcher = NumberMatcher::AddressSpace(&[AddressSpace::Storage]);
    pub const WORKGROUP_OR_STORAGE: NumberMatcher =
        NumberMatcher::AddressSpace(&[AddressSpace::Workgroup, AddressSpace::Storage]);
    pub const F32_TEXEL_FORMAT: NumberMatcher = NumberMatcher::TexelFormat(&[
        TexelFormat::Bgra8Unorm,
        TexelFormat::Rgba8Unorm,
        TexelFormat::Rgba8Snorm,
        TexelFormat::Rgba16Float,
        TexelFormat::R32Float,
        TexelFormat::Rg32Float,
        TexelFormat::Rgba32Float,
    ]);
    pub const I32_TEXEL_FORMAT: NumberMatcher = NumberMatcher::TexelFormat(&[
        TexelFormat::Rgba8Sint,
        TexelFormat::Rgba16Sint,
        TexelFormat::R32Sint,
        TexelFormat::Rg32Sint,
        TexelFormat::Rgba32Sint,
    ]);
    pub const U32_TEXEL_FORMAT: NumberMatcher = NumberMatcher::TexelFormat(&[
        TexelFormat::Rgba8Uint,
        TexelFormat::Rgba16Uint,
        TexelFormat::R32Uint,
        TexelFormat::Rg32Uint,
        TexelFormat::Rgba32Uint,
    ]);

    /// Whether a concrete value is admitted by an enumerated set.
    ///
    /// `Fixed` compares for equality; `Template` admits everything (binding
    /// is the resolver's job).
    pub fn admits(&self, value: u32) -> bool {
        match self {
            NumberMatcher::Fixed(n) => *n == value,
            NumberMatcher::Template(_) => true,
            NumberMatcher::Access(set) => set.iter().any(|a| u32::from(*a) == value),
            NumberMatcher::AddressSpace(set) => set.iter().any(|s| u32::from(*s) == value),
            NumberMatcher::TexelFormat(set) => set.iter().any(|f| u32::from(*f) == value),
        }
    }

    /// The value this matcher stands for when it admits exactly one.
    pub fn single_value(&self) -> Option<u32> {
        match self {
            NumberMatcher::Fixed(n) => Some(*n),
            NumberMatcher::Template(_) => None,
            NumberMatcher::Access([only]) => Some((*only).into()),
            NumberMatcher::AddressSpace([only]) => Some((*only).into()),
            NumberMatcher::TexelFormat([only]) => Some((*only).into()),
            _ => None,
        }
    }
}

/// A pattern over argument types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeMatcher {
    /// A scalar kind. Concrete numeric kinds also accept abstract arguments
    /// that convert to them.
    Scalar(ScalarKind),
    /// The overload's template type at this index.
    Template(usize),
    /// Any member of a type class.
    Class(TypeClass),
    Vector {
        width: NumberMatcher,
        element: Box<TypeMatcher>,
    },
    Matrix {
        columns: NumberMatcher,
        rows: NumberMatcher,
        element: Box<TypeMatcher>,
    },
    RuntimeArray(Box<TypeMatcher>),
    Pointer {
        space: NumberMatcher,
        store: Box<TypeMatcher>,
        access: NumberMatcher,
    },
    Atomic(Box<TypeMatcher>),
    Sampler(SamplerKind),
    SampledTexture {
        dim: TextureDimension,
        element: Box<TypeMatcher>,
    },
    MultisampledTexture {
        dim: TextureDimension,
        element: Box<TypeMatcher>,
    },
    DepthTexture(TextureDimension),
    DepthMultisampledTexture(TextureDimension),
    StorageTexture {
        dim: TextureDimension,
        format: NumberMatcher,
        access: NumberMatcher,
    },
    ExternalTexture,
    /// Result structure of `modf` on a scalar. Return position only.
    ModfResult(Box<TypeMatcher>),
    /// Result structure of `modf` on a vector. Return position only.
    ModfResultVec {
        width: NumberMatcher,
        element: Box<TypeMatcher>,
    },
    /// Result structure of `frexp` on a scalar. Return position only.
    FrexpResult(Box<TypeMatcher>),
    /// Result structure of `frexp` on a vector. Return position only.
    FrexpResultVec {
        width: NumberMatcher,
        element: Box<TypeMatcher>,
    },
}

impl TypeMatcher {
    /// Visit every template type and template number index this pattern
    /// refers to.
    pub fn visit_templates(
        &self,
        on_type: &mut impl FnMut(usize),
        on_number: &mut impl FnMut(usize),
    ) {
        let mut number = |m: &NumberMatcher| {
            if let NumberMatcher::Template(i) = m {
                on_number(*i);
            }
        };
        match self {
            TypeMatcher::Template(i) => on_type(*i),
            TypeMatcher::Scalar(_)
            | TypeMatcher::Class(_)
            | TypeMatcher::Sampler(_)
            | TypeMatcher::DepthTexture(_)
            | TypeMatcher::DepthMultisampledTexture(_)
            | TypeMatcher::ExternalTexture => {}
            TypeMatcher::Vector { width, element }
            | TypeMatcher::ModfResultVec { width, element }
            | TypeMatcher::FrexpResultVec { width, element } => {
                number(width);
                element.visit_templates(on_type, on_number);
            }
            TypeMatcher::Matrix {
                columns,
                rows,
                element,
            } => {
                number(columns);
                number(rows);
                element.visit_templates(on_type, on_number);
            }
            TypeMatcher::Pointer {
                space,
                store,
                access,
            } => {
                number(space);
                number(access);
                store.visit_templates(on_type, on_number);
            }
            TypeMatcher::StorageTexture { format, access, .. } => {
                number(format);
                number(access);
            }
            TypeMatcher::RuntimeArray(inner)
            | TypeMatcher::Atomic(inner)
            | TypeMatcher::ModfResult(inner)
            | TypeMatcher::FrexpResult(inner)
            | TypeMatcher::SampledTexture { element: inner, .. }
            | TypeMatcher::MultisampledTexture { element: inner, .. } => {
                inner.visit_templates(on_type, on_number)
            }
        }
    }
}
