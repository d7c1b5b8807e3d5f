//! Unifying overload patterns with argument types.

use shader_sema_catalog::{NumberMatcher, TypeMatcher};
use shader_sema_core::{
    Access, AddressSpace, ArrayCount, EvaluationStage, ScalarKind, TexelFormat, Type, TypeHandle,
    TypeUniverse,
};

use crate::builtin_structs::{ResultStruct, result_struct};
use crate::materialize::admits;
use crate::template::TemplateState;

/// Matching context for one overload.
///
/// `match_*` unify a pattern with an argument, binding template parameters
/// on the way, and return the type the parameter resolves to. `build_*`
/// instantiate a pattern from the bindings gathered so far.
pub(crate) struct MatchState<'a> {
    pub types: &'a mut TypeUniverse,
    pub templates: &'a mut TemplateState,
    pub stage: EvaluationStage,
    pub f16: bool,
}

impl<'a> MatchState<'a> {
    pub fn new(
        types: &'a mut TypeUniverse,
        templates: &'a mut TemplateState,
        stage: EvaluationStage,
        f16: bool,
    ) -> Self {
        Self {
            types,
            templates,
            stage,
            f16,
        }
    }

    fn admits(&self, member: ScalarKind, arg: ScalarKind) -> bool {
        admits(member, arg, self.stage, self.f16)
    }

    fn mentions_f16(&self, ty: TypeHandle) -> bool {
        self.types.deepest_element(ty) == Some(TypeHandle::F16)
    }

    pub fn match_type(&mut self, pattern: &TypeMatcher, ty: TypeHandle) -> Option<TypeHandle> {
        match pattern {
            TypeMatcher::Scalar(kind) => {
                let arg = self.types.scalar_kind(ty)?;
                self.admits(*kind, arg).then(|| TypeHandle::scalar(*kind))
            }
            TypeMatcher::Template(index) => {
                if !self.f16 && self.mentions_f16(ty) {
                    return None;
                }
                self.templates.bind_type(self.types, *index, ty)
            }
            TypeMatcher::Class(class) => {
                let arg = self.types.scalar_kind(ty)?;
                class
                    .precedence()
                    .find(|member| self.admits(*member, arg))
                    .map(TypeHandle::scalar)
            }
            TypeMatcher::Vector { width, element } => {
                let (el, w) = self.types.as_vector(ty)?;
                if !self.match_number(width, w) {
                    return None;
                }
                let el = self.match_type(element, el)?;
                Some(self.types.vector(el, w))
            }
            TypeMatcher::Matrix {
                columns,
                rows,
                element,
            } => {
                let (el, c, r) = self.types.as_matrix(ty)?;
                if !self.match_number(columns, c) || !self.match_number(rows, r) {
                    return None;
                }
                let el = self.match_type(element, el)?;
                Some(self.types.matrix(el, c, r))
            }
            TypeMatcher::RuntimeArray(element) => match self.types.get(ty) {
                &Type::Array {
                    element: el,
                    count: ArrayCount::Runtime,
                    stride,
                } => {
                    let el = self.match_type(element, el)?;
                    Some(self.types.array(el, ArrayCount::Runtime, stride))
                }
                _ => None,
            },
            TypeMatcher::Pointer {
                space,
                store,
                access,
            } => match self.types.get(ty) {
                &Type::Pointer {
                    store: st,
                    space: sp,
                    access: ac,
                } => {
                    if !self.match_number(space, sp.into())
                        || !self.match_number(access, ac.into())
                    {
                        return None;
                    }
                    let st = self.match_type(store, st)?;
                    Some(self.types.pointer(st, sp, ac))
                }
                _ => None,
            },
            TypeMatcher::Atomic(element) => match self.types.get(ty) {
                &Type::Atomic { element: el } => {
                    let el = self.match_type(element, el)?;
                    Some(self.types.atomic(el))
                }
                _ => None,
            },
            TypeMatcher::Sampler(kind) => {
                matches!(self.types.get(ty), Type::Sampler(k) if k == kind).then_some(ty)
            }
            TypeMatcher::SampledTexture { dim, element } => match self.types.get(ty) {
                &Type::SampledTexture { dim: d, sampled } if d == *dim => {
                    let sampled = self.match_type(element, sampled)?;
                    Some(self.types.sampled_texture(d, sampled))
                }
                _ => None,
            },
            TypeMatcher::MultisampledTexture { dim, element } => match self.types.get(ty) {
                &Type::MultisampledTexture { dim: d, sampled } if d == *dim => {
                    let sampled = self.match_type(element, sampled)?;
                    Some(self.types.multisampled_texture(d, sampled))
                }
                _ => None,
            },
            TypeMatcher::DepthTexture(dim) => {
                matches!(self.types.get(ty), Type::DepthTexture(d) if d == dim).then_some(ty)
            }
            TypeMatcher::DepthMultisampledTexture(dim) => match self.types.get(ty) {
                Type::DepthMultisampledTexture(d) if d == dim => Some(ty),
                _ => None,
            },
            TypeMatcher::StorageTexture {
                dim,
                format,
                access,
            } => match self.types.get(ty) {
                &Type::StorageTexture {
                    dim: d,
                    format: f,
                    access: a,
                } if d == *dim => {
                    (self.match_number(format, f.into()) && self.match_number(access, a.into()))
                        .then_some(ty)
                }
                _ => None,
            },
            TypeMatcher::ExternalTexture => {
                matches!(self.types.get(ty), Type::ExternalTexture).then_some(ty)
            }
            // Result structures are never written as arguments.
            TypeMatcher::ModfResult(_)
            | TypeMatcher::ModfResultVec { .. }
            | TypeMatcher::FrexpResult(_)
            | TypeMatcher::FrexpResultVec { .. } => None,
        }
    }

    pub fn match_number(&mut self, pattern: &NumberMatcher, value: u32) -> bool {
        match pattern {
            NumberMatcher::Template(index) => self.templates.bind_number(*index, value),
            fixed_or_set => fixed_or_set.admits(value),
        }
    }

    /// Instantiate `pattern` from the current bindings.
    ///
    /// Type classes and runtime-sized arrays have no single instance and
    /// build to `None`, as do unbound template parameters.
    pub fn build_type(&mut self, pattern: &TypeMatcher) -> Option<TypeHandle> {
        match pattern {
            TypeMatcher::Scalar(kind) => Some(TypeHandle::scalar(*kind)),
            TypeMatcher::Template(index) => self.templates.ty(*index),
            TypeMatcher::Class(_) | TypeMatcher::RuntimeArray(_) => None,
            TypeMatcher::Vector { width, element } => {
                let width = self.build_number(width)?;
                let element = self.build_type(element)?;
                Some(self.types.vector(element, width))
            }
            TypeMatcher::Matrix {
                columns,
                rows,
                element,
            } => {
                let columns = self.build_number(columns)?;
                let rows = self.build_number(rows)?;
                let element = self.build_type(element)?;
                Some(self.types.matrix(element, columns, rows))
            }
            TypeMatcher::Pointer {
                space,
                store,
                access,
            } => {
                let space = AddressSpace::try_from(self.build_number(space)?).ok()?;
                let access = Access::try_from(self.build_number(access)?).ok()?;
                let store = self.build_type(store)?;
                Some(self.types.pointer(store, space, access))
            }
            TypeMatcher::Atomic(element) => {
                let element = self.build_type(element)?;
                Some(self.types.atomic(element))
            }
            TypeMatcher::Sampler(kind) => Some(self.types.sampler(*kind)),
            TypeMatcher::SampledTexture { dim, element } => {
                let element = self.build_type(element)?;
                Some(self.types.sampled_texture(*dim, element))
            }
            TypeMatcher::MultisampledTexture { dim, element } => {
                let element = self.build_type(element)?;
                Some(self.types.multisampled_texture(*dim, element))
            }
            TypeMatcher::DepthTexture(dim) => Some(self.types.depth_texture(*dim)),
            TypeMatcher::DepthMultisampledTexture(dim) => {
                Some(self.types.depth_multisampled_texture(*dim))
            }
            TypeMatcher::StorageTexture {
                dim,
                format,
                access,
            } => {
                let format = TexelFormat::try_from(self.build_number(format)?).ok()?;
                let access = Access::try_from(self.build_number(access)?).ok()?;
                Some(self.types.storage_texture(*dim, format, access))
            }
            TypeMatcher::ExternalTexture => Some(self.types.external_texture()),
            TypeMatcher::ModfResult(element) => {
                self.build_result(ResultStruct::Modf, element, None)
            }
            TypeMatcher::ModfResultVec { width, element } => {
                let width = self.build_number(width)?;
                self.build_result(ResultStruct::Modf, element, Some(width))
            }
            TypeMatcher::FrexpResult(element) => {
                self.build_result(ResultStruct::Frexp, element, None)
            }
            TypeMatcher::FrexpResultVec { width, element } => {
                let width = self.build_number(width)?;
                self.build_result(ResultStruct::Frexp, element, Some(width))
            }
        }
    }

    fn build_result(
        &mut self,
        which: ResultStruct,
        element: &TypeMatcher,
        width: Option<u32>,
    ) -> Option<TypeHandle> {
        let element = self.build_type(element)?;
        result_struct(self.types, which, element, width)
    }

    pub fn build_number(&self, pattern: &NumberMatcher) -> Option<u32> {
        match pattern {
            NumberMatcher::Template(index) => self.templates.number(*index),
            other => other.single_value(),
        }
    }
}
