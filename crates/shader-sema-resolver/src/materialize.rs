//! Abstract-numeric materialization.
//!
//! Abstract numerics (`abstract-int`, `abstract-float`) are the types of
//! literals and constant expressions. They may survive into a resolved call
//! only when the call is evaluated at shader-creation time; at runtime they
//! are replaced by their default concrete form.
//!
//! Two pieces implement this:
//!
//! - [`admits`] decides whether a scalar kind named by an overload pattern
//!   accepts an argument scalar kind. Abstract pattern kinds only admit at
//!   the constant stage, which is what steers type-class matching to
//!   concrete members at runtime.
//! - [`materialize`] replaces every abstract element of a type by its
//!   default concrete kind (`abstract-int` to `i32`, `abstract-float` to
//!   `f32`), preserving shape.

use shader_sema_core::{EvaluationStage, ScalarKind, Type, TypeHandle, TypeUniverse};

/// Whether an overload's `member` kind accepts an argument of kind `arg`.
///
/// With `f16` disabled, `f16` members admit nothing.
pub fn admits(member: ScalarKind, arg: ScalarKind, stage: EvaluationStage, f16: bool) -> bool {
    use ScalarKind::*;
    match member {
        AbstractInt => stage.admits_abstract() && arg == AbstractInt,
        AbstractFloat => stage.admits_abstract() && arg.is_abstract(),
        I32 | U32 => arg == member || arg == AbstractInt,
        F32 => arg == F32 || arg.is_abstract(),
        F16 => f16 && (arg == F16 || arg.is_abstract()),
        Bool => arg == Bool,
    }
}

/// The default concrete form of `ty`.
///
/// Vectors, matrices and arrays materialize element-wise. Builtin result
/// structures holding abstract members become their first concrete form.
/// Types holding no abstract numerics are returned unchanged.
pub fn materialize(types: &mut TypeUniverse, ty: TypeHandle) -> TypeHandle {
    match types.get(ty) {
        Type::AbstractInt => TypeHandle::I32,
        Type::AbstractFloat => TypeHandle::F32,
        &Type::Vector { element, width } => {
            let element = materialize(types, element);
            types.vector(element, width)
        }
        &Type::Matrix { column, columns } => {
            let column = materialize(types, column);
            types.intern(Type::Matrix { column, columns })
        }
        &Type::Array {
            element,
            count,
            stride,
        } => {
            let element = materialize(types, element);
            types.array(element, count, stride)
        }
        Type::Struct(s) => s.concrete.first().copied().unwrap_or(ty),
        _ => ty,
    }
}

/// Materialize `ty` only when evaluating at runtime.
#[inline]
pub fn materialize_for(
    types: &mut TypeUniverse,
    ty: TypeHandle,
    stage: EvaluationStage,
) -> TypeHandle {
    if stage.admits_abstract() || !types.holds_abstract(ty) {
        ty
    } else {
        materialize(types, ty)
    }
}
