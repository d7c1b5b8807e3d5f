//! Template bindings accumulated while matching one overload.
//!
//! A template type is bound by its first occurrence. Later occurrences widen
//! the binding to the common type of the old binding and the new argument,
//! so `F<T>(T, T)` called with `(abstract-int, u32)` ends with `T = u32`.
//! Template numbers are bound by their first occurrence and must be equal
//! afterwards.

use shader_sema_core::{TypeHandle, TypeUniverse};

/// Bound template types and numbers, indexed as declared by the overload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateState {
    types: Vec<Option<TypeHandle>>,
    numbers: Vec<Option<u32>>,
}

impl TemplateState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The binding of template type `index`, if any.
    #[inline]
    pub fn ty(&self, index: usize) -> Option<TypeHandle> {
        self.types.get(index).copied().flatten()
    }

    /// The binding of template number `index`, if any.
    #[inline]
    pub fn number(&self, index: usize) -> Option<u32> {
        self.numbers.get(index).copied().flatten()
    }

    /// Bind or widen template type `index` with `ty`.
    ///
    /// Returns the binding after the update, or `None` if `ty` has no
    /// common type with the existing binding (which is left unchanged).
    pub fn bind_type(
        &mut self,
        types: &TypeUniverse,
        index: usize,
        ty: TypeHandle,
    ) -> Option<TypeHandle> {
        match self.ty(index) {
            None => {
                self.set_type(index, ty);
                Some(ty)
            }
            Some(existing) => {
                let common = types.common(&[existing, ty])?;
                self.set_type(index, common);
                Some(common)
            }
        }
    }

    /// Replace the binding of template type `index`.
    pub fn set_type(&mut self, index: usize, ty: TypeHandle) {
        if index >= self.types.len() {
            self.types.resize(index + 1, None);
        }
        self.types[index] = Some(ty);
    }

    /// Bind template number `index` to `value`, or check that it already
    /// is bound to `value`.
    pub fn bind_number(&mut self, index: usize, value: u32) -> bool {
        match self.number(index) {
            Some(existing) => existing == value,
            None => {
                if index >= self.numbers.len() {
                    self.numbers.resize(index + 1, None);
                }
                self.numbers[index] = Some(value);
                true
            }
        }
    }
}
