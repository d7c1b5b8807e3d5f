//! Unary and binary operator overloads.
//!
//! Compound assignments (`+=`, `<<=`, ...) have no entries of their own;
//! they resolve against the overloads of the plain operator.

use shader_sema_core::{BinaryOp, CatalogError, ParameterUsage as U, ScalarKind, UnaryOp};

use super::dsl::*;
use crate::catalog::CatalogBuilder;
use crate::matcher::{TypeClass, TypeMatcher};
use crate::overload::Overload;

pub(super) fn register(builder: &mut CatalogBuilder) -> Result<(), CatalogError> {
    builder.unary(UnaryOp::Negate, unary_same(TypeClass::FIA_FI32_F16))?;
    builder.unary(UnaryOp::Complement, unary_same(TypeClass::IA_IU32))?;
    builder.unary(
        UnaryOp::Not,
        vec![
            op().param(U::None, bool_())
                .returns(bool_())
                .const_eval()
                .build(),
            op().template_number("N", None)
                .param(U::None, vec(n(0), bool_()))
                .returns(vec(n(0), bool_()))
                .const_eval()
                .build(),
        ],
    )?;

    builder.binary(BinaryOp::Add, additive())?;
    builder.binary(BinaryOp::Subtract, additive())?;
    builder.binary(BinaryOp::Multiply, multiply())?;
    builder.binary(BinaryOp::Divide, arithmetic(TypeClass::FIA_FIU32_F16))?;
    builder.binary(BinaryOp::Modulo, arithmetic(TypeClass::FIA_FIU32_F16))?;

    builder.binary(BinaryOp::And, bitwise(true))?;
    builder.binary(BinaryOp::Or, bitwise(true))?;
    builder.binary(BinaryOp::Xor, bitwise(false))?;

    builder.binary(BinaryOp::LogicalAnd, logical())?;
    builder.binary(BinaryOp::LogicalOr, logical())?;

    builder.binary(BinaryOp::Equal, comparison(TypeClass::SCALAR))?;
    builder.binary(BinaryOp::NotEqual, comparison(TypeClass::SCALAR))?;
    for op in [
        BinaryOp::Less,
        BinaryOp::LessEqual,
        BinaryOp::Greater,
        BinaryOp::GreaterEqual,
    ] {
        builder.binary(op, comparison(TypeClass::FIA_FIU32_F16))?;
    }

    builder.binary(BinaryOp::ShiftLeft, shift())?;
    builder.binary(BinaryOp::ShiftRight, shift())?;

    Ok(())
}

fn bool_() -> TypeMatcher {
    scalar(ScalarKind::Bool)
}

fn unary_same(class_set: TypeClass) -> Vec<Overload> {
    vec![
        op().template_type("T", class(class_set))
            .param(U::None, t(0))
            .returns(t(0))
            .const_eval()
            .build(),
        op().template_type("T", class(class_set))
            .template_number("N", None)
            .param(U::None, vec(n(0), t(0)))
            .returns(vec(n(0), t(0)))
            .const_eval()
            .build(),
    ]
}

/// `(T, T)`, `(vecN<T>, vecN<T>)`, `(vecN<T>, T)` and `(T, vecN<T>)`.
fn arithmetic(class_set: TypeClass) -> Vec<Overload> {
    let shapes = [(false, false), (true, true), (true, false), (false, true)];
    shapes
        .into_iter()
        .map(|(lhs_vec, rhs_vec)| {
            let side = |is_vec: bool| if is_vec { vec(n(0), t(0)) } else { t(0) };
            let mut overload = op().template_type("T", class(class_set));
            if lhs_vec || rhs_vec {
                overload = overload.template_number("N", None);
            }
            let result = if lhs_vec || rhs_vec {
                vec(n(0), t(0))
            } else {
                t(0)
            };
            overload
                .param(U::None, side(lhs_vec))
                .param(U::None, side(rhs_vec))
                .returns(result)
                .const_eval()
                .build()
        })
        .collect()
}

fn additive() -> Vec<Overload> {
    let mut overloads = arithmetic(TypeClass::FIA_FIU32_F16);
    overloads.push(
        op().template_type("T", class(TypeClass::FA_F32_F16))
            .template_number("N", None)
            .template_number("M", None)
            .param(U::None, mat(n(0), n(1), t(0)))
            .param(U::None, mat(n(0), n(1), t(0)))
            .returns(mat(n(0), n(1), t(0)))
            .const_eval()
            .build(),
    );
    overloads
}

fn multiply() -> Vec<Overload> {
    let numeric = || op().template_type("T", class(TypeClass::FIA_FIU32_F16));
    let float = || op().template_type("T", class(TypeClass::FA_F32_F16));
    let v = |i: usize| vec(n(i), t(0));
    let m = |c: usize, r: usize| mat(n(c), n(r), t(0));

    vec![
        numeric()
            .param(U::None, t(0))
            .param(U::None, t(0))
            .returns(t(0))
            .const_eval()
            .build(),
        numeric()
            .template_number("N", None)
            .param(U::None, v(0))
            .param(U::None, t(0))
            .returns(v(0))
            .const_eval()
            .build(),
        numeric()
            .template_number("N", None)
            .param(U::None, t(0))
            .param(U::None, v(0))
            .returns(v(0))
            .const_eval()
            .build(),
        float()
            .template_number("N", None)
            .template_number("M", None)
            .param(U::None, t(0))
            .param(U::None, m(0, 1))
            .returns(m(0, 1))
            .const_eval()
            .build(),
        float()
            .template_number("N", None)
            .template_number("M", None)
            .param(U::None, m(0, 1))
            .param(U::None, t(0))
            .returns(m(0, 1))
            .const_eval()
            .build(),
        numeric()
            .template_number("N", None)
            .param(U::None, v(0))
            .param(U::None, v(0))
            .returns(v(0))
            .const_eval()
            .build(),
        float()
            .template_number("C", None)
            .template_number("R", None)
            .param(U::None, m(0, 1))
            .param(U::None, v(0))
            .returns(v(1))
            .const_eval()
            .build(),
        float()
            .template_number("C", None)
            .template_number("R", None)
            .param(U::None, v(1))
            .param(U::None, m(0, 1))
            .returns(v(0))
            .const_eval()
            .build(),
        float()
            .template_number("K", None)
            .template_number("C", None)
            .template_number("R", None)
            .param(U::None, m(0, 2))
            .param(U::None, m(1, 0))
            .returns(m(1, 2))
            .const_eval()
            .build(),
    ]
}

/// `&`, `|` and `^`. The first two also combine booleans.
fn bitwise(with_bool: bool) -> Vec<Overload> {
    let mut overloads = Vec::new();
    if with_bool {
        overloads.push(
            op().param(U::None, bool_())
                .param(U::None, bool_())
                .returns(bool_())
                .const_eval()
                .build(),
        );
        overloads.push(
            op().template_number("N", None)
                .param(U::None, vec(n(0), bool_()))
                .param(U::None, vec(n(0), bool_()))
                .returns(vec(n(0), bool_()))
                .const_eval()
                .build(),
        );
    }
    overloads.push(
        op().template_type("T", class(TypeClass::IA_IU32))
            .param(U::None, t(0))
            .param(U::None, t(0))
            .returns(t(0))
            .const_eval()
            .build(),
    );
    overloads.push(
        op().template_type("T", class(TypeClass::IA_IU32))
            .template_number("N", None)
            .param(U::None, vec(n(0), t(0)))
            .param(U::None, vec(n(0), t(0)))
            .returns(vec(n(0), t(0)))
            .const_eval()
            .build(),
    );
    overloads
}

fn logical() -> Vec<Overload> {
    vec![
        op().param(U::None, bool_())
            .param(U::None, bool_())
            .returns(bool_())
            .const_eval()
            .build(),
    ]
}

fn comparison(class_set: TypeClass) -> Vec<Overload> {
    vec![
        op().template_type("T", class(class_set))
            .param(U::None, t(0))
            .param(U::None, t(0))
            .returns(bool_())
            .const_eval()
            .build(),
        op().template_type("T", class(class_set))
            .template_number("N", None)
            .param(U::None, vec(n(0), t(0)))
            .param(U::None, vec(n(0), t(0)))
            .returns(vec(n(0), bool_()))
            .const_eval()
            .build(),
    ]
}

fn shift() -> Vec<Overload> {
    vec![
        op().template_type("T", class(TypeClass::IA_IU32))
            .param(U::None, t(0))
            .param(U::None, scalar(ScalarKind::U32))
            .returns(t(0))
            .const_eval()
            .build(),
        op().template_type("T", class(TypeClass::IA_IU32))
            .template_number("N", None)
            .param(U::None, vec(n(0), t(0)))
            .param(U::None, vec(n(0), scalar(ScalarKind::U32)))
            .returns(vec(n(0), t(0)))
            .const_eval()
            .build(),
    ]
}
