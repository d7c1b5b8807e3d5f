//! Parameter usage tags.

use std::fmt;

/// The semantic role of a builtin parameter, independent of its type.
///
/// Usage tags let later passes find, say, the `level` argument of a texture
/// call without depending on parameter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParameterUsage {
    /// The parameter has no named role.
    #[default]
    None,
    ArrayIndex,
    Bias,
    Component,
    Coords,
    Ddx,
    Ddy,
    DepthRef,
    Level,
    Offset,
    SampleIndex,
    Sampler,
    Texture,
    Value,
    W,
    X,
    Xy,
    Xyz,
    Y,
    Yz,
    Yzw,
    Z,
    Zw,
}

impl ParameterUsage {
    pub const fn name(self) -> &'static str {
        match self {
            ParameterUsage::None => "",
            ParameterUsage::ArrayIndex => "array_index",
            ParameterUsage::Bias => "bias",
            ParameterUsage::Component => "component",
            ParameterUsage::Coords => "coords",
            ParameterUsage::Ddx => "ddx",
            ParameterUsage::Ddy => "ddy",
            ParameterUsage::DepthRef => "depth_ref",
            ParameterUsage::Level => "level",
            ParameterUsage::Offset => "offset",
            ParameterUsage::SampleIndex => "sample_index",
            ParameterUsage::Sampler => "sampler",
            ParameterUsage::Texture => "texture",
            ParameterUsage::Value => "value",
            ParameterUsage::W => "w",
            ParameterUsage::X => "x",
            ParameterUsage::Xy => "xy",
            ParameterUsage::Xyz => "xyz",
            ParameterUsage::Y => "y",
            ParameterUsage::Yz => "yz",
            ParameterUsage::Yzw => "yzw",
            ParameterUsage::Z => "z",
            ParameterUsage::Zw => "zw",
        }
    }

    #[inline]
    pub const fn is_named(self) -> bool {
        !matches!(self, ParameterUsage::None)
    }
}

impl fmt::Display for ParameterUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
