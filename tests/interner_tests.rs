//! Integration tests for the type universe: canonical handles, nominal
//! types and the conversion lattice, through the public facade.

use shader_sema::{
    Access, AddressSpace, ArrayCount, ConversionRank, ScalarKind, StructMember, TexelFormat,
    TextureDimension, Type, TypeHandle, TypeUniverse,
};

// =============================================================================
// Uniqueness
// =============================================================================

#[test]
fn test_structurally_equal_requests_share_a_handle() {
    let mut types = TypeUniverse::new();

    let a = types.vector(TypeHandle::I32, 3);
    let b = types.vector(TypeHandle::I32, 3);
    assert_eq!(a, b);

    let m1 = types.matrix(TypeHandle::F32, 4, 4);
    let m2 = types.matrix(TypeHandle::F32, 4, 4);
    assert_eq!(m1, m2);

    let p1 = types.pointer(a, AddressSpace::Storage, Access::ReadWrite);
    let p2 = types.pointer(b, AddressSpace::Storage, Access::ReadWrite);
    assert_eq!(p1, p2);
}

#[test]
fn test_distinct_descriptions_get_distinct_handles() {
    let mut types = TypeUniverse::new();

    let i = types.vector(TypeHandle::I32, 3);
    let u = types.vector(TypeHandle::U32, 3);
    let i2 = types.vector(TypeHandle::I32, 2);
    assert_ne!(i, u);
    assert_ne!(i, i2);

    let read = types.pointer(i, AddressSpace::Storage, Access::Read);
    let write = types.pointer(i, AddressSpace::Storage, Access::ReadWrite);
    let reference = types.reference(i, AddressSpace::Storage, Access::Read);
    assert_ne!(read, write);
    assert_ne!(read, reference);
}

#[test]
fn test_scalar_handles_are_reserved() {
    let types = TypeUniverse::new();
    for kind in ScalarKind::ALL {
        let handle = types.scalar(kind);
        assert_eq!(handle, TypeHandle::scalar(kind));
        assert_eq!(types.scalar_kind(handle), Some(kind));
    }
    assert_eq!(types.get(TypeHandle::VOID), &Type::Void);
}

#[test]
fn test_textures_and_arrays_intern_by_structure() {
    let mut types = TypeUniverse::new();

    let t1 = types.sampled_texture(TextureDimension::D2, TypeHandle::F32);
    let t2 = types.sampled_texture(TextureDimension::D2, TypeHandle::F32);
    let t3 = types.sampled_texture(TextureDimension::D3, TypeHandle::F32);
    assert_eq!(t1, t2);
    assert_ne!(t1, t3);

    let s1 = types.storage_texture(TextureDimension::D2, TexelFormat::Rgba8Unorm, Access::Write);
    let s2 = types.storage_texture(TextureDimension::D2, TexelFormat::Rgba8Unorm, Access::Write);
    assert_eq!(s1, s2);

    let fixed = types.array(TypeHandle::F32, ArrayCount::Constant(4), 4);
    let runtime = types.array(TypeHandle::F32, ArrayCount::Runtime, 4);
    assert_ne!(fixed, runtime);
    let again = types.array(TypeHandle::F32, ArrayCount::Constant(4), 4);
    assert_eq!(fixed, again);
}

#[test]
fn test_repeated_requests_do_not_grow_the_universe() {
    let mut types = TypeUniverse::new();
    let before = types.len();
    let v = types.vector(TypeHandle::F32, 4);
    let after_first = types.len();
    for _ in 0..10 {
        assert_eq!(types.vector(TypeHandle::F32, 4), v);
    }
    assert_eq!(after_first, before + 1);
    assert_eq!(types.len(), after_first);
}

// =============================================================================
// Nominal types
// =============================================================================

#[test]
fn test_structures_are_nominal() {
    let mut types = TypeUniverse::new();

    let light = types.structure(
        "Light",
        vec![
            StructMember::new("position", TypeHandle::F32),
            StructMember::new("intensity", TypeHandle::F32),
        ],
    );
    let material = types.structure(
        "Material",
        vec![
            StructMember::new("position", TypeHandle::F32),
            StructMember::new("intensity", TypeHandle::F32),
        ],
    );
    assert_ne!(light, material);

    // Same name, different members: the first registration wins.
    let again = types.structure("Light", vec![StructMember::new("other", TypeHandle::I32)]);
    assert_eq!(again, light);
    assert_eq!(types.find_named("Light"), Some(light));
    assert_eq!(types.find_named("Missing"), None);
}

#[test]
fn test_aliases_are_distinct_from_their_target() {
    let mut types = TypeUniverse::new();
    let v = types.vector(TypeHandle::F32, 3);
    let color = types.alias("Color", v);
    assert_ne!(color, v);
    assert_eq!(types.unwrap_alias(color), v);
    assert_eq!(types.alias("Color", v), color);
    assert_eq!(types.friendly_name(color), "Color");
}

// =============================================================================
// Conversions and printing
// =============================================================================

#[test]
fn test_conversion_ranks_follow_abstract_lattice() {
    let types = TypeUniverse::new();

    assert_eq!(
        types.conversion_rank(TypeHandle::F32, TypeHandle::F32),
        Some(ConversionRank::EXACT)
    );
    assert_eq!(
        types.conversion_rank(TypeHandle::ABSTRACT_INT, TypeHandle::I32),
        Some(ConversionRank::ABSTRACT_INT_TO_I32)
    );
    assert_eq!(
        types.conversion_rank(TypeHandle::ABSTRACT_FLOAT, TypeHandle::F32),
        Some(ConversionRank::ABSTRACT_FLOAT_TO_F32)
    );
    assert_eq!(
        types.conversion_rank(TypeHandle::I32, TypeHandle::F32),
        None
    );
    assert_eq!(
        types.conversion_rank(TypeHandle::ABSTRACT_FLOAT, TypeHandle::I32),
        None
    );

    assert!(
        ConversionRank::ABSTRACT_INT_TO_I32 < ConversionRank::ABSTRACT_INT_TO_U32,
        "abstract-int prefers i32 over u32"
    );
}

#[test]
fn test_vector_conversions_are_element_wise() {
    let mut types = TypeUniverse::new();
    let ai3 = types.vector(TypeHandle::ABSTRACT_INT, 3);
    let u3 = types.vector(TypeHandle::U32, 3);
    let u2 = types.vector(TypeHandle::U32, 2);

    assert_eq!(
        types.conversion_rank(ai3, u3),
        Some(ConversionRank::ABSTRACT_INT_TO_U32)
    );
    assert_eq!(types.conversion_rank(ai3, u2), None);
    assert_eq!(types.common(&[ai3, u3]), Some(u3));
}

#[test]
fn test_friendly_names() {
    let mut types = TypeUniverse::new();
    let v = types.vector(TypeHandle::ABSTRACT_FLOAT, 2);
    let m = types.matrix(TypeHandle::F16, 3, 4);
    let depth = types.depth_texture(TextureDimension::D2);
    let ptr = types.pointer(TypeHandle::I32, AddressSpace::Function, Access::ReadWrite);

    assert_eq!(types.friendly_name(v), "vec2<abstract-float>");
    assert_eq!(types.friendly_name(m), "mat3x4<f16>");
    assert_eq!(types.friendly_name(depth), "texture_depth_2d");
    assert_eq!(types.friendly_name(ptr), "ptr<function, i32, read_write>");
}
