//! Hash-consed type storage for one compilation.
//!
//! [`TypeUniverse`] owns every type node created while compiling a shader and
//! guarantees that structurally equal descriptions resolve to the same
//! [`TypeHandle`], so handle equality is type equality.
//!
//! # Thread Safety
//!
//! A universe is single-owner: interning takes `&mut self`. Concurrent
//! compilations each create their own universe. Sharing one across threads
//! requires external locking.
//!
//! # Example
//!
//! ```
//! use shader_sema_core::{TypeHandle, TypeUniverse};
//!
//! let mut types = TypeUniverse::new();
//! let a = types.vector(TypeHandle::I32, 3);
//! let b = types.vector(TypeHandle::I32, 3);
//! let c = types.vector(TypeHandle::U32, 3);
//! assert_eq!(a, b);
//! assert_ne!(a, c);
//! ```

use rustc_hash::FxHashMap;

use super::ty::{ArrayCount, StructMember, StructType, Type, TypeHandle};
use crate::{Access, AddressSpace, SamplerKind, ScalarKind, TexelFormat, TextureDimension};

/// Key under which a type is registered in the intern index.
///
/// Aliases and structures are keyed by name alone; everything else by its
/// full structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum InternKey {
    Structural(Type),
    Alias(Box<str>),
    Struct(Box<str>),
}

impl InternKey {
    fn of(ty: &Type) -> Self {
        match ty {
            Type::Alias { name, .. } => InternKey::Alias(name.clone()),
            Type::Struct(s) => InternKey::Struct(s.name.clone()),
            other => InternKey::Structural(other.clone()),
        }
    }
}

/// Arena of canonical types for one compilation.
#[derive(Debug)]
pub struct TypeUniverse {
    nodes: Vec<Type>,
    index: FxHashMap<InternKey, TypeHandle>,
}

impl TypeUniverse {
    /// Create a universe with the scalar types pre-interned at their
    /// reserved handles.
    pub fn new() -> Self {
        let mut universe = Self {
            nodes: Vec::with_capacity(64),
            index: FxHashMap::default(),
        };
        for ty in [
            Type::Void,
            Type::Bool,
            Type::I32,
            Type::U32,
            Type::F32,
            Type::F16,
            Type::AbstractInt,
            Type::AbstractFloat,
        ] {
            universe.intern(ty);
        }
        debug_assert_eq!(universe.nodes.len() as u32, TypeHandle::FIRST_DYNAMIC);
        universe
    }

    /// Return the canonical handle for `ty`, creating it on first request.
    ///
    /// # Panics
    ///
    /// Panics if the universe already holds `u32::MAX` types. Running out of
    /// handles is unrecoverable.
    pub fn intern(&mut self, ty: Type) -> TypeHandle {
        let key = InternKey::of(&ty);
        if let Some(&existing) = self.index.get(&key) {
            return existing;
        }
        assert!(
            self.nodes.len() < u32::MAX as usize,
            "type universe exhausted"
        );
        let handle = TypeHandle(self.nodes.len() as u32);
        self.nodes.push(ty);
        self.index.insert(key, handle);
        handle
    }

    /// Look up the type behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was issued by a different universe and is out of
    /// range for this one.
    #[inline]
    pub fn get(&self, handle: TypeHandle) -> &Type {
        &self.nodes[handle.0 as usize]
    }

    /// Number of distinct types interned so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A universe always contains the reserved scalar types, so this is
    /// never true.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ========================================================================
    // Constructors
    // ========================================================================

    #[inline]
    pub fn scalar(&self, kind: ScalarKind) -> TypeHandle {
        TypeHandle::scalar(kind)
    }

    pub fn vector(&mut self, element: TypeHandle, width: u32) -> TypeHandle {
        self.intern(Type::Vector { element, width })
    }

    /// A matrix of `columns` columns, each a vector of `rows` elements.
    pub fn matrix(&mut self, element: TypeHandle, columns: u32, rows: u32) -> TypeHandle {
        let column = self.vector(element, rows);
        self.intern(Type::Matrix { column, columns })
    }

    pub fn array(&mut self, element: TypeHandle, count: ArrayCount, stride: u32) -> TypeHandle {
        self.intern(Type::Array {
            element,
            count,
            stride,
        })
    }

    pub fn pointer(
        &mut self,
        store: TypeHandle,
        space: AddressSpace,
        access: Access,
    ) -> TypeHandle {
        self.intern(Type::Pointer {
            store,
            space,
            access,
        })
    }

    pub fn reference(
        &mut self,
        store: TypeHandle,
        space: AddressSpace,
        access: Access,
    ) -> TypeHandle {
        self.intern(Type::Reference {
            store,
            space,
            access,
        })
    }

    pub fn atomic(&mut self, element: TypeHandle) -> TypeHandle {
        self.intern(Type::Atomic { element })
    }

    pub fn sampler(&mut self, kind: SamplerKind) -> TypeHandle {
        self.intern(Type::Sampler(kind))
    }

    pub fn depth_texture(&mut self, dim: TextureDimension) -> TypeHandle {
        self.intern(Type::DepthTexture(dim))
    }

    pub fn depth_multisampled_texture(&mut self, dim: TextureDimension) -> TypeHandle {
        self.intern(Type::DepthMultisampledTexture(dim))
    }

    pub fn sampled_texture(&mut self, dim: TextureDimension, sampled: TypeHandle) -> TypeHandle {
        self.intern(Type::SampledTexture { dim, sampled })
    }

    pub fn multisampled_texture(
        &mut self,
        dim: TextureDimension,
        sampled: TypeHandle,
    ) -> TypeHandle {
        self.intern(Type::MultisampledTexture { dim, sampled })
    }

    pub fn storage_texture(
        &mut self,
        dim: TextureDimension,
        format: TexelFormat,
        access: Access,
    ) -> TypeHandle {
        self.intern(Type::StorageTexture {
            dim,
            format,
            access,
        })
    }

    pub fn external_texture(&mut self) -> TypeHandle {
        self.intern(Type::ExternalTexture)
    }

    /// A named alias. The first alias registered under a name wins.
    pub fn alias(&mut self, name: impl Into<Box<str>>, target: TypeHandle) -> TypeHandle {
        self.intern(Type::Alias {
            name: name.into(),
            target,
        })
    }

    /// A named structure. The first structure registered under a name wins;
    /// later requests with the same name return it regardless of members.
    pub fn structure(
        &mut self,
        name: impl Into<Box<str>>,
        members: Vec<StructMember>,
    ) -> TypeHandle {
        self.intern(Type::Struct(StructType {
            name: name.into(),
            members,
            concrete: Vec::new(),
        }))
    }

    /// A builtin result structure that may convert to concrete forms.
    pub fn builtin_structure(
        &mut self,
        name: impl Into<Box<str>>,
        members: Vec<StructMember>,
        concrete: Vec<TypeHandle>,
    ) -> TypeHandle {
        self.intern(Type::Struct(StructType {
            name: name.into(),
            members,
            concrete,
        }))
    }

    /// Look up an existing structure or alias by name without creating it.
    pub fn find_named(&self, name: &str) -> Option<TypeHandle> {
        self.index
            .get(&InternKey::Struct(name.into()))
            .or_else(|| self.index.get(&InternKey::Alias(name.into())))
            .copied()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Scalar kind of a scalar type.
    #[inline]
    pub fn scalar_kind(&self, ty: TypeHandle) -> Option<ScalarKind> {
        ty.scalar_kind()
    }

    /// Element type and width of a vector.
    pub fn as_vector(&self, ty: TypeHandle) -> Option<(TypeHandle, u32)> {
        match self.get(ty) {
            Type::Vector { element, width } => Some((*element, *width)),
            _ => None,
        }
    }

    /// Element type, columns and rows of a matrix.
    pub fn as_matrix(&self, ty: TypeHandle) -> Option<(TypeHandle, u32, u32)> {
        match self.get(ty) {
            Type::Matrix { column, columns } => {
                let (element, rows) = self.as_vector(*column)?;
                Some((element, *columns, rows))
            }
            _ => None,
        }
    }
}

impl Default for TypeUniverse {
    fn default() -> Self {
        Self::new()
    }
}
