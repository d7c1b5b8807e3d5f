//! Texture query, load, sample and store builtins.

use shader_sema_core::{
    CatalogError, ParameterUsage as U, SamplerKind, ScalarKind, TextureDimension,
};

use super::dsl::*;
use crate::catalog::CatalogBuilder;
use crate::flags::PipelineStages;
use crate::matcher::{NumberMatcher, TypeClass, TypeMatcher};
use crate::overload::{Overload, OverloadBuilder};

use TextureDimension::{Cube, CubeArray, D1, D2, D2Array, D3};

const SAMPLED: [TextureDimension; 6] = [D1, D2, D2Array, D3, Cube, CubeArray];
const DEPTH: [TextureDimension; 4] = [D2, D2Array, Cube, CubeArray];
const STORAGE: [TextureDimension; 4] = [D1, D2, D2Array, D3];

pub(super) fn register(builder: &mut CatalogBuilder) -> Result<(), CatalogError> {
    builder.builtin("textureDimensions", dimensions())?;
    builder.builtin("textureLoad", load())?;
    builder.builtin("textureSample", sample())?;
    builder.builtin("textureSampleCompare", sample_compare())?;
    builder.builtin("textureSampleLevel", sample_level())?;
    builder.builtin("textureStore", store())?;

    builder.builtin(
        "textureNumLevels",
        SAMPLED
            .into_iter()
            .map(sampled_query)
            .chain(
                DEPTH
                    .into_iter()
                    .map(|dim| depth_query(TypeMatcher::DepthTexture(dim))),
            )
            .collect(),
    )?;
    builder.builtin(
        "textureNumLayers",
        [D2Array, CubeArray]
            .into_iter()
            .map(sampled_query)
            .chain(
                [D2Array, CubeArray]
                    .into_iter()
                    .map(|dim| depth_query(TypeMatcher::DepthTexture(dim))),
            )
            .collect(),
    )?;
    builder.builtin(
        "textureNumSamples",
        vec![
            func()
                .template_type("T", class(TypeClass::FIU32))
                .param(
                    U::Texture,
                    TypeMatcher::MultisampledTexture {
                        dim: D2,
                        element: Box::new(t(0)),
                    },
                )
                .returns(scalar(ScalarKind::U32))
                .must_use()
                .build(),
            depth_query(TypeMatcher::DepthMultisampledTexture(D2)),
        ],
    )?;

    Ok(())
}

/// The `vecN<u32>` (or `u32`) a dimension query returns.
fn extent(dim: TextureDimension) -> TypeMatcher {
    match dim {
        D1 => scalar(ScalarKind::U32),
        D3 => vec_w(3, scalar(ScalarKind::U32)),
        D2 | D2Array | Cube | CubeArray => vec_w(2, scalar(ScalarKind::U32)),
    }
}

fn dimensions() -> Vec<Overload> {
    let mut overloads = Vec::new();

    // Forms taking a mip level come first.
    for dim in SAMPLED {
        overloads.push(
            func()
                .template_type("T", class(TypeClass::FIU32))
                .template_type("L", class(TypeClass::IU32))
                .param(U::Texture, sampled(dim, t(0)))
                .param(U::Level, t(1))
                .returns(extent(dim))
                .must_use()
                .build(),
        );
    }
    for dim in DEPTH {
        overloads.push(
            func()
                .template_type("L", class(TypeClass::IU32))
                .param(U::Texture, TypeMatcher::DepthTexture(dim))
                .param(U::Level, t(0))
                .returns(extent(dim))
                .must_use()
                .build(),
        );
    }

    for dim in SAMPLED {
        overloads.push(
            func()
                .template_type("T", class(TypeClass::FIU32))
                .param(U::Texture, sampled(dim, t(0)))
                .returns(extent(dim))
                .must_use()
                .build(),
        );
    }
    overloads.push(
        func()
            .template_type("T", class(TypeClass::FIU32))
            .param(
                U::Texture,
                TypeMatcher::MultisampledTexture {
                    dim: D2,
                    element: Box::new(t(0)),
                },
            )
            .returns(extent(D2))
            .must_use()
            .build(),
    );
    for dim in DEPTH {
        overloads.push(
            func()
                .param(U::Texture, TypeMatcher::DepthTexture(dim))
                .returns(extent(dim))
                .must_use()
                .build(),
        );
    }
    overloads.push(
        func()
            .param(U::Texture, TypeMatcher::DepthMultisampledTexture(D2))
            .returns(extent(D2))
            .must_use()
            .build(),
    );
    for dim in STORAGE {
        overloads.push(
            func()
                .template_number("F", None)
                .template_number("A", Some(NumberMatcher::WRITE))
                .param(
                    U::Texture,
                    TypeMatcher::StorageTexture {
                        dim,
                        format: n(0),
                        access: n(1),
                    },
                )
                .returns(extent(dim))
                .must_use()
                .build(),
        );
    }
    overloads.push(
        func()
            .param(U::Texture, TypeMatcher::ExternalTexture)
            .returns(extent(D2))
            .must_use()
            .build(),
    );

    overloads
}

/// Integer coordinates of the given width over template type `index`.
fn int_coords(width: u32, index: usize) -> TypeMatcher {
    if width == 1 {
        t(index)
    } else {
        vec_w(width, t(index))
    }
}

fn load() -> Vec<Overload> {
    let texel = || vec_w(4, t(0));
    let mut overloads = Vec::new();

    for dim in [D1, D2, D3] {
        overloads.push(
            func()
                .template_type("T", class(TypeClass::FIU32))
                .template_type("C", class(TypeClass::IU32))
                .template_type("L", class(TypeClass::IU32))
                .param(U::Texture, sampled(dim, t(0)))
                .param(U::Coords, int_coords(dim.coordinate_width(), 1))
                .param(U::Level, t(2))
                .returns(texel())
                .must_use()
                .build(),
        );
    }
    overloads.insert(
        2,
        func()
            .template_type("T", class(TypeClass::FIU32))
            .template_type("C", class(TypeClass::IU32))
            .template_type("A", class(TypeClass::IU32))
            .template_type("L", class(TypeClass::IU32))
            .param(U::Texture, sampled(D2Array, t(0)))
            .param(U::Coords, vec_w(2, t(1)))
            .param(U::ArrayIndex, t(2))
            .param(U::Level, t(3))
            .returns(texel())
            .must_use()
            .build(),
    );
    overloads.push(
        func()
            .template_type("T", class(TypeClass::FIU32))
            .template_type("C", class(TypeClass::IU32))
            .template_type("S", class(TypeClass::IU32))
            .param(
                U::Texture,
                TypeMatcher::MultisampledTexture {
                    dim: D2,
                    element: Box::new(t(0)),
                },
            )
            .param(U::Coords, vec_w(2, t(1)))
            .param(U::SampleIndex, t(2))
            .returns(texel())
            .must_use()
            .build(),
    );
    overloads.push(
        func()
            .template_type("C", class(TypeClass::IU32))
            .template_type("L", class(TypeClass::IU32))
            .param(U::Texture, TypeMatcher::DepthTexture(D2))
            .param(U::Coords, vec_w(2, t(0)))
            .param(U::Level, t(1))
            .returns(scalar(ScalarKind::F32))
            .must_use()
            .build(),
    );
    overloads.push(
        func()
            .template_type("C", class(TypeClass::IU32))
            .template_type("A", class(TypeClass::IU32))
            .template_type("L", class(TypeClass::IU32))
            .param(U::Texture, TypeMatcher::DepthTexture(D2Array))
            .param(U::Coords, vec_w(2, t(0)))
            .param(U::ArrayIndex, t(1))
            .param(U::Level, t(2))
            .returns(scalar(ScalarKind::F32))
            .must_use()
            .build(),
    );
    overloads.push(
        func()
            .template_type("C", class(TypeClass::IU32))
            .template_type("S", class(TypeClass::IU32))
            .param(U::Texture, TypeMatcher::DepthMultisampledTexture(D2))
            .param(U::Coords, vec_w(2, t(0)))
            .param(U::SampleIndex, t(1))
            .returns(scalar(ScalarKind::F32))
            .must_use()
            .build(),
    );
    overloads.push(
        func()
            .template_type("C", class(TypeClass::IU32))
            .param(U::Texture, TypeMatcher::ExternalTexture)
            .param(U::Coords, vec_w(2, t(0)))
            .returns(vec_w(4, scalar(ScalarKind::F32)))
            .must_use()
            .build(),
    );

    overloads
}

/// Float coordinates of the given width.
fn float_coords(width: u32) -> TypeMatcher {
    if width == 1 {
        scalar(ScalarKind::F32)
    } else {
        vec_w(width, scalar(ScalarKind::F32))
    }
}

fn fragment() -> OverloadBuilder {
    func().stages(PipelineStages::FRAGMENT).must_use()
}

fn sample() -> Vec<Overload> {
    let f32_texel = || vec_w(4, scalar(ScalarKind::F32));
    let sampler = || TypeMatcher::Sampler(SamplerKind::Sampler);
    vec![
        fragment()
            .param(U::Texture, sampled(D1, scalar(ScalarKind::F32)))
            .param(U::Sampler, sampler())
            .param(U::Coords, float_coords(1))
            .returns(f32_texel())
            .build(),
        fragment()
            .param(U::Texture, sampled(D2, scalar(ScalarKind::F32)))
            .param(U::Sampler, sampler())
            .param(U::Coords, float_coords(2))
            .returns(f32_texel())
            .build(),
        fragment()
            .param(U::Texture, sampled(D2, scalar(ScalarKind::F32)))
            .param(U::Sampler, sampler())
            .param(U::Coords, float_coords(2))
            .param(U::Offset, vec_w(2, scalar(ScalarKind::I32)))
            .returns(f32_texel())
            .build(),
        fragment()
            .template_type("A", class(TypeClass::IU32))
            .param(U::Texture, sampled(D2Array, scalar(ScalarKind::F32)))
            .param(U::Sampler, sampler())
            .param(U::Coords, float_coords(2))
            .param(U::ArrayIndex, t(0))
            .returns(f32_texel())
            .build(),
        fragment()
            .param(U::Texture, sampled(D3, scalar(ScalarKind::F32)))
            .param(U::Sampler, sampler())
            .param(U::Coords, float_coords(3))
            .returns(f32_texel())
            .build(),
        fragment()
            .param(U::Texture, sampled(Cube, scalar(ScalarKind::F32)))
            .param(U::Sampler, sampler())
            .param(U::Coords, float_coords(3))
            .returns(f32_texel())
            .build(),
        fragment()
            .param(U::Texture, TypeMatcher::DepthTexture(D2))
            .param(U::Sampler, sampler())
            .param(U::Coords, float_coords(2))
            .returns(scalar(ScalarKind::F32))
            .build(),
    ]
}

fn sample_compare() -> Vec<Overload> {
    let comparison = || TypeMatcher::Sampler(SamplerKind::Comparison);
    vec![
        fragment()
            .param(U::Texture, TypeMatcher::DepthTexture(D2))
            .param(U::Sampler, comparison())
            .param(U::Coords, float_coords(2))
            .param(U::DepthRef, scalar(ScalarKind::F32))
            .returns(scalar(ScalarKind::F32))
            .build(),
        fragment()
            .param(U::Texture, TypeMatcher::DepthTexture(Cube))
            .param(U::Sampler, comparison())
            .param(U::Coords, float_coords(3))
            .param(U::DepthRef, scalar(ScalarKind::F32))
            .returns(scalar(ScalarKind::F32))
            .build(),
    ]
}

fn sample_level() -> Vec<Overload> {
    let sampler = || TypeMatcher::Sampler(SamplerKind::Sampler);
    vec![
        func()
            .param(U::Texture, sampled(D2, scalar(ScalarKind::F32)))
            .param(U::Sampler, sampler())
            .param(U::Coords, float_coords(2))
            .param(U::Level, scalar(ScalarKind::F32))
            .returns(vec_w(4, scalar(ScalarKind::F32)))
            .must_use()
            .build(),
        func()
            .param(U::Texture, sampled(D3, scalar(ScalarKind::F32)))
            .param(U::Sampler, sampler())
            .param(U::Coords, float_coords(3))
            .param(U::Level, scalar(ScalarKind::F32))
            .returns(vec_w(4, scalar(ScalarKind::F32)))
            .must_use()
            .build(),
        func()
            .template_type("L", class(TypeClass::IU32))
            .param(U::Texture, TypeMatcher::DepthTexture(D2))
            .param(U::Sampler, sampler())
            .param(U::Coords, float_coords(2))
            .param(U::Level, t(0))
            .returns(scalar(ScalarKind::F32))
            .must_use()
            .build(),
    ]
}

fn store() -> Vec<Overload> {
    let formats = [
        (NumberMatcher::F32_TEXEL_FORMAT, ScalarKind::F32),
        (NumberMatcher::I32_TEXEL_FORMAT, ScalarKind::I32),
        (NumberMatcher::U32_TEXEL_FORMAT, ScalarKind::U32),
    ];
    let mut overloads = Vec::new();
    for (format, channel) in formats {
        for dim in STORAGE {
            let texture = TypeMatcher::StorageTexture {
                dim,
                format: format.clone(),
                access: NumberMatcher::WRITE,
            };
            let mut overload = func()
                .template_type("C", class(TypeClass::IU32))
                .param(U::Texture, texture)
                .param(U::Coords, int_coords(dim.coordinate_width(), 0));
            if dim.is_arrayed() {
                overload = overload
                    .template_type("A", class(TypeClass::IU32))
                    .param(U::ArrayIndex, t(1));
            }
            overloads.push(
                overload
                    .param(U::Value, vec_w(4, scalar(channel)))
                    .stages(PipelineStages::FRAGMENT | PipelineStages::COMPUTE)
                    .build(),
            );
        }
    }
    overloads
}

fn sampled_query(dim: TextureDimension) -> Overload {
    func()
        .template_type("T", class(TypeClass::FIU32))
        .param(U::Texture, sampled(dim, t(0)))
        .returns(scalar(ScalarKind::U32))
        .must_use()
        .build()
}

fn depth_query(texture: TypeMatcher) -> Overload {
    func()
        .param(U::Texture, texture)
        .returns(scalar(ScalarKind::U32))
        .must_use()
        .build()
}
