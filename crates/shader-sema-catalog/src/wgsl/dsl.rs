//! Shorthand for writing overload tables.

use shader_sema_core::{ScalarKind, TextureDimension};

use crate::matcher::{NumberMatcher, TypeClass, TypeMatcher};
use crate::overload::{OverloadBuilder, OverloadKind};

pub(crate) fn func() -> OverloadBuilder {
    OverloadBuilder::new(OverloadKind::Function)
}

pub(crate) fn op() -> OverloadBuilder {
    OverloadBuilder::new(OverloadKind::Operator)
}

pub(crate) fn ctor() -> OverloadBuilder {
    OverloadBuilder::new(OverloadKind::Constructor)
}

pub(crate) fn conv() -> OverloadBuilder {
    OverloadBuilder::new(OverloadKind::Conversion)
}

/// Template type `i`.
pub(crate) fn t(i: usize) -> TypeMatcher {
    TypeMatcher::Template(i)
}

/// Template number `i`.
pub(crate) fn n(i: usize) -> NumberMatcher {
    NumberMatcher::Template(i)
}

pub(crate) fn scalar(kind: ScalarKind) -> TypeMatcher {
    TypeMatcher::Scalar(kind)
}

pub(crate) fn class(class: TypeClass) -> Option<TypeMatcher> {
    Some(TypeMatcher::Class(class))
}

pub(crate) fn only(kind: ScalarKind) -> Option<TypeMatcher> {
    Some(TypeMatcher::Scalar(kind))
}

pub(crate) fn vec(width: NumberMatcher, element: TypeMatcher) -> TypeMatcher {
    TypeMatcher::Vector {
        width,
        element: Box::new(element),
    }
}

/// `vecW<element>` with a fixed width.
pub(crate) fn vec_w(width: u32, element: TypeMatcher) -> TypeMatcher {
    vec(NumberMatcher::Fixed(width), element)
}

pub(crate) fn mat(
    columns: NumberMatcher,
    rows: NumberMatcher,
    element: TypeMatcher,
) -> TypeMatcher {
    TypeMatcher::Matrix {
        columns,
        rows,
        element: Box::new(element),
    }
}

pub(crate) fn sampled(dim: TextureDimension, element: TypeMatcher) -> TypeMatcher {
    TypeMatcher::SampledTexture {
        dim,
        element: Box::new(element),
    }
}

pub(crate) fn ptr(space: NumberMatcher, store: TypeMatcher, access: NumberMatcher) -> TypeMatcher {
    TypeMatcher::Pointer {
        space,
        store: Box::new(store),
        access,
    }
}

pub(crate) fn atomic(element: TypeMatcher) -> TypeMatcher {
    TypeMatcher::Atomic(Box::new(element))
}
