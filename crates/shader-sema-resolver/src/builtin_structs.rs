//! Result structures of `modf` and `frexp`.
//!
//! Both builtins return a nominal structure whose name encodes the operand
//! shape, e.g. `__modf_result_vec3_f16`. Forms over `abstract-float` keep
//! abstract members and convert to their `f32` and `f16` counterparts.

use shader_sema_core::{ScalarKind, StructMember, TypeHandle, TypeUniverse};

/// Which builtin a result structure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultStruct {
    /// `fract` and `whole`, both of the operand type.
    Modf,
    /// `fract` of the operand type and `exp` of the matching integer type.
    Frexp,
}

impl ResultStruct {
    fn prefix(self) -> &'static str {
        match self {
            ResultStruct::Modf => "__modf_result",
            ResultStruct::Frexp => "__frexp_result",
        }
    }

    fn second_member(self) -> &'static str {
        match self {
            ResultStruct::Modf => "whole",
            ResultStruct::Frexp => "exp",
        }
    }
}

/// The result structure of `which` over `element` (a vector of `width`
/// elements, or a scalar when `width` is `None`).
///
/// Returns `None` when `element` is not a floating-point scalar.
pub fn result_struct(
    types: &mut TypeUniverse,
    which: ResultStruct,
    element: TypeHandle,
    width: Option<u32>,
) -> Option<TypeHandle> {
    let kind = types.scalar_kind(element)?;
    let suffix = match kind {
        ScalarKind::F32 => "f32",
        ScalarKind::F16 => "f16",
        ScalarKind::AbstractFloat => "abstract",
        _ => return None,
    };
    let name = match width {
        Some(w) => format!("{}_vec{}_{}", which.prefix(), w, suffix),
        None => format!("{}_{}", which.prefix(), suffix),
    };
    if let Some(existing) = types.find_named(&name) {
        return Some(existing);
    }

    let shaped = |types: &mut TypeUniverse, el: TypeHandle| match width {
        Some(w) => types.vector(el, w),
        None => el,
    };
    let fract = shaped(types, element);
    let second = match which {
        ResultStruct::Modf => fract,
        ResultStruct::Frexp if kind.is_abstract() => shaped(types, TypeHandle::ABSTRACT_INT),
        ResultStruct::Frexp => shaped(types, TypeHandle::I32),
    };
    let members = vec![
        StructMember::new("fract", fract),
        StructMember::new(which.second_member(), second),
    ];

    if kind.is_abstract() {
        let concrete = vec![
            result_struct(types, which, TypeHandle::F32, width)?,
            result_struct(types, which, TypeHandle::F16, width)?,
        ];
        Some(types.builtin_structure(name, members, concrete))
    } else {
        Some(types.structure(name, members))
    }
}
