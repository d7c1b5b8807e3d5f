//! Numeric, logical, packing, atomic and synchronization builtins.

use shader_sema_core::{CatalogError, ParameterUsage as U, ScalarKind};

use super::dsl::*;
use crate::catalog::CatalogBuilder;
use crate::flags::PipelineStages;
use crate::matcher::{NumberMatcher, TypeClass, TypeMatcher};
use crate::overload::Overload;

pub(super) fn register(builder: &mut CatalogBuilder) -> Result<(), CatalogError> {
    builder.builtin("abs", component_wise(TypeClass::FIA_FIU32_F16, 1))?;
    builder.builtin("clamp", component_wise(TypeClass::FIA_FIU32_F16, 3))?;
    builder.builtin("cos", component_wise(TypeClass::FA_F32_F16, 1))?;
    builder.builtin("sin", component_wise(TypeClass::FA_F32_F16, 1))?;
    builder.builtin("sqrt", component_wise(TypeClass::FA_F32_F16, 1))?;
    builder.builtin("floor", component_wise(TypeClass::FA_F32_F16, 1))?;
    builder.builtin("min", component_wise(TypeClass::FIA_FIU32_F16, 2))?;
    builder.builtin("max", component_wise(TypeClass::FIA_FIU32_F16, 2))?;
    builder.builtin("countOneBits", component_wise(TypeClass::IU32, 1))?;

    builder.builtin(
        "dot",
        vec![
            func()
                .template_type("T", class(TypeClass::FIA_FIU32_F16))
                .template_number("N", None)
                .param(U::None, vec(n(0), t(0)))
                .param(U::None, vec(n(0), t(0)))
                .returns(t(0))
                .must_use()
                .const_eval()
                .build(),
        ],
    )?;

    builder.builtin(
        "cross",
        vec![
            func()
                .template_type("T", class(TypeClass::FA_F32_F16))
                .param(U::None, vec_w(3, t(0)))
                .param(U::None, vec_w(3, t(0)))
                .returns(vec_w(3, t(0)))
                .must_use()
                .const_eval()
                .build(),
        ],
    )?;

    builder.builtin(
        "length",
        vec![
            func()
                .template_type("T", class(TypeClass::FA_F32_F16))
                .param(U::None, t(0))
                .returns(t(0))
                .must_use()
                .const_eval()
                .build(),
            func()
                .template_type("T", class(TypeClass::FA_F32_F16))
                .template_number("N", None)
                .param(U::None, vec(n(0), t(0)))
                .returns(t(0))
                .must_use()
                .const_eval()
                .build(),
        ],
    )?;

    builder.builtin(
        "determinant",
        vec![
            func()
                .template_type("T", class(TypeClass::FA_F32_F16))
                .template_number("N", None)
                .param(U::None, mat(n(0), n(0), t(0)))
                .returns(t(0))
                .must_use()
                .const_eval()
                .build(),
        ],
    )?;

    builder.builtin("select", select())?;
    builder.builtin("all", any_all())?;
    builder.builtin("any", any_all())?;

    builder.builtin(
        "modf",
        result_struct(
            |el| TypeMatcher::ModfResult(Box::new(el)),
            |width, el| TypeMatcher::ModfResultVec {
                width,
                element: Box::new(el),
            },
        ),
    )?;
    builder.builtin(
        "frexp",
        result_struct(
            |el| TypeMatcher::FrexpResult(Box::new(el)),
            |width, el| TypeMatcher::FrexpResultVec {
                width,
                element: Box::new(el),
            },
        ),
    )?;

    builder.builtin(
        "unpack2x16float",
        vec![
            func()
                .param(U::None, scalar(ScalarKind::U32))
                .returns(vec_w(2, scalar(ScalarKind::F32)))
                .must_use()
                .const_eval()
                .build(),
        ],
    )?;
    builder.builtin(
        "pack4x8snorm",
        vec![
            func()
                .param(U::None, vec_w(4, scalar(ScalarKind::F32)))
                .returns(scalar(ScalarKind::U32))
                .must_use()
                .const_eval()
                .build(),
        ],
    )?;

    builder.builtin(
        "arrayLength",
        vec![
            func()
                .template_type("T", None)
                .template_number("A", None)
                .param(
                    U::None,
                    ptr(
                        NumberMatcher::STORAGE,
                        TypeMatcher::RuntimeArray(Box::new(t(0))),
                        n(0),
                    ),
                )
                .returns(scalar(ScalarKind::U32))
                .must_use()
                .build(),
        ],
    )?;

    builder.builtin("atomicLoad", vec![atomic_op(false, true)])?;
    builder.builtin("atomicStore", vec![atomic_op(true, false)])?;
    builder.builtin("atomicAdd", vec![atomic_op(true, true)])?;

    builder.builtin("workgroupBarrier", vec![barrier()])?;
    builder.builtin("storageBarrier", vec![barrier()])?;

    builder.builtin(
        "dpdx",
        vec![
            func()
                .param(U::None, scalar(ScalarKind::F32))
                .returns(scalar(ScalarKind::F32))
                .stages(PipelineStages::FRAGMENT)
                .build(),
            func()
                .template_number("N", None)
                .param(U::None, vec(n(0), scalar(ScalarKind::F32)))
                .returns(vec(n(0), scalar(ScalarKind::F32)))
                .stages(PipelineStages::FRAGMENT)
                .build(),
        ],
    )?;

    Ok(())
}

/// `fn f<T: class>(T, ...) -> T` and `fn f<T: class, N>(vecN<T>, ...) -> vecN<T>`.
fn component_wise(class_set: TypeClass, arity: usize) -> Vec<Overload> {
    let mut scalar_form = func().template_type("T", class(class_set));
    let mut vector_form = func()
        .template_type("T", class(class_set))
        .template_number("N", None);
    for _ in 0..arity {
        scalar_form = scalar_form.param(U::None, t(0));
        vector_form = vector_form.param(U::None, vec(n(0), t(0)));
    }
    vec![
        scalar_form.returns(t(0)).must_use().const_eval().build(),
        vector_form
            .returns(vec(n(0), t(0)))
            .must_use()
            .const_eval()
            .build(),
    ]
}

fn select() -> Vec<Overload> {
    vec![
        func()
            .template_type("T", class(TypeClass::SCALAR))
            .param(U::None, t(0))
            .param(U::None, t(0))
            .param(U::None, scalar(ScalarKind::Bool))
            .returns(t(0))
            .must_use()
            .const_eval()
            .build(),
        func()
            .template_type("T", class(TypeClass::SCALAR))
            .template_number("N", None)
            .param(U::None, vec(n(0), t(0)))
            .param(U::None, vec(n(0), t(0)))
            .param(U::None, scalar(ScalarKind::Bool))
            .returns(vec(n(0), t(0)))
            .must_use()
            .const_eval()
            .build(),
        func()
            .template_type("T", class(TypeClass::SCALAR))
            .template_number("N", None)
            .param(U::None, vec(n(0), t(0)))
            .param(U::None, vec(n(0), t(0)))
            .param(U::None, vec(n(0), scalar(ScalarKind::Bool)))
            .returns(vec(n(0), t(0)))
            .must_use()
            .const_eval()
            .build(),
    ]
}

fn any_all() -> Vec<Overload> {
    vec![
        func()
            .template_number("N", None)
            .param(U::None, vec(n(0), scalar(ScalarKind::Bool)))
            .returns(scalar(ScalarKind::Bool))
            .must_use()
            .const_eval()
            .build(),
        func()
            .param(U::None, scalar(ScalarKind::Bool))
            .returns(scalar(ScalarKind::Bool))
            .must_use()
            .const_eval()
            .build(),
    ]
}

fn result_struct(
    scalar_result: impl Fn(TypeMatcher) -> TypeMatcher,
    vector_result: impl Fn(NumberMatcher, TypeMatcher) -> TypeMatcher,
) -> Vec<Overload> {
    vec![
        func()
            .template_type("T", class(TypeClass::FA_F32_F16))
            .param(U::None, t(0))
            .returns(scalar_result(t(0)))
            .must_use()
            .const_eval()
            .build(),
        func()
            .template_type("T", class(TypeClass::FA_F32_F16))
            .template_number("N", None)
            .param(U::None, vec(n(0), t(0)))
            .returns(vector_result(n(0), t(0)))
            .must_use()
            .const_eval()
            .build(),
    ]
}

/// `fn atomicX<T: iu32, S: workgroup_or_storage>(ptr<S, atomic<T>, read_write>[, T])[ -> T]`.
fn atomic_op(takes_value: bool, returns_value: bool) -> Overload {
    let mut overload = func()
        .template_type("T", class(TypeClass::IU32))
        .template_number("S", Some(NumberMatcher::WORKGROUP_OR_STORAGE))
        .param(U::None, ptr(n(0), atomic(t(0)), NumberMatcher::READ_WRITE))
        .stages(PipelineStages::FRAGMENT | PipelineStages::COMPUTE);
    if takes_value {
        overload = overload.param(U::None, t(0));
    }
    if returns_value {
        overload = overload.returns(t(0));
    }
    if !takes_value {
        overload = overload.must_use();
    }
    overload.build()
}

fn barrier() -> Overload {
    func().stages(PipelineStages::COMPUTE).build()
}
