//! Value constructors and conversions for scalars, vectors and matrices.

use shader_sema_core::{CatalogError, ParameterUsage as U, ScalarKind};

use super::dsl::*;
use crate::catalog::CatalogBuilder;
use crate::matcher::{NumberMatcher, TypeClass, TypeMatcher};
use crate::overload::Overload;

use ScalarKind::{Bool, F16, F32, I32, U32};

/// Conversion targets in declaration order, each with the class of element
/// kinds that convert to it.
const CONVERSIONS: [(ScalarKind, TypeClass); 5] = [
    (F32, TypeClass::SCALAR_NO_F32),
    (F16, TypeClass::SCALAR_NO_F16),
    (I32, TypeClass::SCALAR_NO_I32),
    (U32, TypeClass::SCALAR_NO_U32),
    (Bool, TypeClass::SCALAR_NO_BOOL),
];

pub(super) fn register(builder: &mut CatalogBuilder) -> Result<(), CatalogError> {
    for (kind, from) in CONVERSIONS {
        builder.ctor_conv(kind.name(), scalar_family(kind, from))?;
    }
    for width in 2..=4 {
        builder.ctor_conv(&format!("vec{}", width), vector_family(width))?;
    }
    for columns in 2..=4 {
        for rows in 2..=4 {
            builder.ctor_conv(
                &format!("mat{}x{}", columns, rows),
                matrix_family(columns, rows),
            )?;
        }
    }
    Ok(())
}

/// `T()`, `T(T)` and `T<U>(U)` for a scalar kind.
fn scalar_family(kind: ScalarKind, from: TypeClass) -> Vec<Overload> {
    vec![
        ctor().returns(scalar(kind)).must_use().const_eval().build(),
        ctor()
            .param(U::None, scalar(kind))
            .returns(scalar(kind))
            .must_use()
            .const_eval()
            .build(),
        conv()
            .template_type("T", class(from))
            .param(U::None, t(0))
            .returns(scalar(kind))
            .must_use()
            .const_eval()
            .build(),
    ]
}

/// Component layouts of the mixed vector constructors: each entry is the
/// width of one argument, paired with its usage.
fn component_layouts(width: u32) -> &'static [&'static [(u32, U)]] {
    match width {
        2 => &[&[(1, U::X), (1, U::Y)]],
        3 => &[
            &[(1, U::X), (1, U::Y), (1, U::Z)],
            &[(2, U::Xy), (1, U::Z)],
            &[(1, U::X), (2, U::Yz)],
        ],
        _ => &[
            &[(1, U::X), (1, U::Y), (1, U::Z), (1, U::W)],
            &[(2, U::Xy), (1, U::Z), (1, U::W)],
            &[(1, U::X), (2, U::Yz), (1, U::W)],
            &[(1, U::X), (1, U::Y), (2, U::Zw)],
            &[(2, U::Xy), (2, U::Zw)],
            &[(3, U::Xyz), (1, U::W)],
            &[(1, U::X), (3, U::Yzw)],
        ],
    }
}

fn vector_family(width: u32) -> Vec<Overload> {
    let result = || vec_w(width, t(0));
    let scalar_ctor = || ctor().template_type("T", class(TypeClass::SCALAR));

    let mut overloads = vec![
        ctor()
            .returns(vec_w(width, scalar(ScalarKind::AbstractInt)))
            .must_use()
            .const_eval()
            .build(),
        ctor()
            .template_type("T", class(TypeClass::CONCRETE_SCALAR))
            .returns(result())
            .must_use()
            .const_eval()
            .build(),
        scalar_ctor()
            .param(U::None, vec_w(width, t(0)))
            .returns(result())
            .must_use()
            .const_eval()
            .build(),
        scalar_ctor()
            .param(U::None, t(0))
            .returns(result())
            .must_use()
            .const_eval()
            .build(),
    ];

    for layout in component_layouts(width) {
        let mut overload = scalar_ctor();
        for &(part, usage) in layout.iter() {
            let pattern = if part == 1 { t(0) } else { vec_w(part, t(0)) };
            overload = overload.param(usage, pattern);
        }
        overloads.push(overload.returns(result()).must_use().const_eval().build());
    }

    for (kind, from) in CONVERSIONS {
        overloads.push(
            conv()
                .template_type("T", only(kind))
                .template_type("U", class(from))
                .param(U::None, vec_w(width, t(1)))
                .returns(vec_w(width, scalar(kind)))
                .must_use()
                .const_eval()
                .build(),
        );
    }

    overloads
}

fn matrix_family(columns: u32, rows: u32) -> Vec<Overload> {
    let shape = |element: TypeMatcher| {
        mat(
            NumberMatcher::Fixed(columns),
            NumberMatcher::Fixed(rows),
            element,
        )
    };
    let float_ctor = || ctor().template_type("T", class(TypeClass::FA_F32_F16));

    let mut elements = float_ctor();
    for _ in 0..columns * rows {
        elements = elements.param(U::None, t(0));
    }
    let mut column_vectors = float_ctor();
    for _ in 0..columns {
        column_vectors = column_vectors.param(U::None, vec_w(rows, t(0)));
    }

    vec![
        ctor()
            .template_type("T", class(TypeClass::F32_F16))
            .returns(shape(t(0)))
            .must_use()
            .const_eval()
            .build(),
        float_ctor()
            .param(U::None, shape(t(0)))
            .returns(shape(t(0)))
            .must_use()
            .const_eval()
            .build(),
        elements
            .returns(shape(t(0)))
            .must_use()
            .const_eval()
            .build(),
        column_vectors
            .returns(shape(t(0)))
            .must_use()
            .const_eval()
            .build(),
        conv()
            .template_type("T", only(F16))
            .param(U::None, shape(scalar(F32)))
            .returns(shape(scalar(F16)))
            .must_use()
            .const_eval()
            .build(),
        conv()
            .template_type("T", only(F32))
            .param(U::None, shape(scalar(F16)))
            .returns(shape(scalar(F32)))
            .must_use()
            .const_eval()
            .build(),
    ]
}
