//! Rendering types as source-level names for diagnostics.

use std::fmt::{self, Write};

use super::ty::{ArrayCount, Type, TypeHandle};
use super::universe::TypeUniverse;

/// Renders interned types to stable diagnostic strings.
///
/// Implement this to customise how types appear in overload diagnostics.
pub trait TypePrinter {
    fn type_name(&self, types: &TypeUniverse, ty: TypeHandle) -> String;
}

/// The default printer: names types the way they are written in source,
/// e.g. `vec3<f32>`, `texture_depth_2d`, `ptr<storage, u32, read>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FriendlyNames;

impl TypePrinter for FriendlyNames {
    fn type_name(&self, types: &TypeUniverse, ty: TypeHandle) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = write_type(&mut out, types, ty);
        out
    }
}

impl TypeUniverse {
    /// The source-level name of a type.
    pub fn friendly_name(&self, ty: TypeHandle) -> String {
        FriendlyNames.type_name(self, ty)
    }
}

fn write_type(out: &mut String, types: &TypeUniverse, ty: TypeHandle) -> fmt::Result {
    match types.get(ty) {
        Type::Void => out.write_str("void"),
        Type::Bool => out.write_str("bool"),
        Type::I32 => out.write_str("i32"),
        Type::U32 => out.write_str("u32"),
        Type::F32 => out.write_str("f32"),
        Type::F16 => out.write_str("f16"),
        Type::AbstractInt => out.write_str("abstract-int"),
        Type::AbstractFloat => out.write_str("abstract-float"),
        Type::Pointer {
            store,
            space,
            access,
        } => {
            write!(out, "ptr<{}, ", space)?;
            write_type(out, types, *store)?;
            write!(out, ", {}>", access)
        }
        Type::Reference {
            store,
            space,
            access,
        } => {
            write!(out, "ref<{}, ", space)?;
            write_type(out, types, *store)?;
            write!(out, ", {}>", access)
        }
        Type::Vector { element, width } => {
            write!(out, "vec{}<", width)?;
            write_type(out, types, *element)?;
            out.write_char('>')
        }
        Type::Matrix { column, columns } => match types.get(*column) {
            Type::Vector { element, width } => {
                write!(out, "mat{}x{}<", columns, width)?;
                write_type(out, types, *element)?;
                out.write_char('>')
            }
            _ => Err(fmt::Error),
        },
        Type::Array { element, count, .. } => {
            out.write_str("array<")?;
            write_type(out, types, *element)?;
            match count {
                ArrayCount::Constant(n) => write!(out, ", {}>", n),
                ArrayCount::Runtime => out.write_char('>'),
            }
        }
        Type::Atomic { element } => {
            out.write_str("atomic<")?;
            write_type(out, types, *element)?;
            out.write_char('>')
        }
        Type::Sampler(kind) => out.write_str(kind.name()),
        Type::DepthTexture(dim) => write!(out, "texture_depth_{}", dim),
        Type::DepthMultisampledTexture(dim) => write!(out, "texture_depth_multisampled_{}", dim),
        Type::MultisampledTexture { dim, sampled } => {
            write!(out, "texture_multisampled_{}<", dim)?;
            write_type(out, types, *sampled)?;
            out.write_char('>')
        }
        Type::SampledTexture { dim, sampled } => {
            write!(out, "texture_{}<", dim)?;
            write_type(out, types, *sampled)?;
            out.write_char('>')
        }
        Type::StorageTexture {
            dim,
            format,
            access,
        } => write!(out, "texture_storage_{}<{}, {}>", dim, format, access),
        Type::ExternalTexture => out.write_str("texture_external"),
        Type::Alias { name, .. } => out.write_str(name),
        Type::Struct(s) => out.write_str(&s.name),
    }
}
