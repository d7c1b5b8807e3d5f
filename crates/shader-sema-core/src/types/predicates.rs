//! Small classification functions over interned types.

use super::ty::{Type, TypeHandle};
use super::universe::TypeUniverse;
use crate::ScalarKind;

impl TypeUniverse {
    #[inline]
    pub fn is_scalar(&self, ty: TypeHandle) -> bool {
        ty.scalar_kind().is_some()
    }

    pub fn is_numeric_scalar(&self, ty: TypeHandle) -> bool {
        ty.scalar_kind().is_some_and(ScalarKind::is_numeric)
    }

    pub fn is_float_scalar(&self, ty: TypeHandle) -> bool {
        ty.scalar_kind().is_some_and(ScalarKind::is_float)
    }

    pub fn is_integer_scalar(&self, ty: TypeHandle) -> bool {
        ty.scalar_kind().is_some_and(ScalarKind::is_integer)
    }

    /// Abstract-int or abstract-float scalar.
    pub fn is_abstract_scalar(&self, ty: TypeHandle) -> bool {
        ty.scalar_kind().is_some_and(ScalarKind::is_abstract)
    }

    pub fn is_float_scalar_or_vector(&self, ty: TypeHandle) -> bool {
        self.is_float_scalar(self.scalar_or_vector_element(ty))
    }

    pub fn is_integer_scalar_or_vector(&self, ty: TypeHandle) -> bool {
        self.is_integer_scalar(self.scalar_or_vector_element(ty))
    }

    pub fn is_bool_scalar_or_vector(&self, ty: TypeHandle) -> bool {
        self.scalar_or_vector_element(ty) == TypeHandle::BOOL
    }

    pub fn is_handle_type(&self, ty: TypeHandle) -> bool {
        matches!(
            self.get(ty),
            Type::Sampler(_)
                | Type::DepthTexture(_)
                | Type::DepthMultisampledTexture(_)
                | Type::MultisampledTexture { .. }
                | Type::SampledTexture { .. }
                | Type::StorageTexture { .. }
                | Type::ExternalTexture
        )
    }

    /// Whether the type is, or contains, an abstract numeric.
    pub fn holds_abstract(&self, ty: TypeHandle) -> bool {
        match self.get(ty) {
            Type::AbstractInt | Type::AbstractFloat => true,
            Type::Vector { element, .. }
            | Type::Array { element, .. }
            | Type::Atomic { element } => self.holds_abstract(*element),
            Type::Matrix { column, .. } => self.holds_abstract(*column),
            Type::Struct(s) => s.members.iter().any(|m| self.holds_abstract(m.ty)),
            Type::Alias { target, .. } => self.holds_abstract(*target),
            _ => false,
        }
    }

    /// The immediate element of a composite: vector element, matrix column,
    /// array element. Scalars are their own element.
    pub fn element_of(&self, ty: TypeHandle) -> Option<TypeHandle> {
        match self.get(ty) {
            Type::Vector { element, .. } | Type::Array { element, .. } => Some(*element),
            Type::Matrix { column, .. } => Some(*column),
            _ if self.is_scalar(ty) => Some(ty),
            _ => None,
        }
    }

    /// The innermost element of nested composites.
    pub fn deepest_element(&self, ty: TypeHandle) -> Option<TypeHandle> {
        let mut current = ty;
        loop {
            let next = self.element_of(current)?;
            if next == current {
                return Some(current);
            }
            current = next;
        }
    }

    /// The store type of a reference; any other type unchanged.
    pub fn unwrap_ref(&self, ty: TypeHandle) -> TypeHandle {
        match self.get(ty) {
            Type::Reference { store, .. } => *store,
            _ => ty,
        }
    }

    /// The target of an alias chain; any other type unchanged.
    pub fn unwrap_alias(&self, ty: TypeHandle) -> TypeHandle {
        let mut current = ty;
        while let Type::Alias { target, .. } = self.get(current) {
            current = *target;
        }
        current
    }

    fn scalar_or_vector_element(&self, ty: TypeHandle) -> TypeHandle {
        match self.get(ty) {
            Type::Vector { element, .. } => *element,
            _ => ty,
        }
    }
}
