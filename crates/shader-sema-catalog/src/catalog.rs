//! Catalog - the immutable table of intrinsic overloads.
//!
//! This module provides [`Catalog`], which maps a call-target identity
//! ([`IntrinsicHash`]) to the ordered overloads of that intrinsic, and
//! [`CatalogBuilder`], which validates overloads as they are registered.
//!
//! # Storage Model
//!
//! - **Intrinsics**: one [`Intrinsic`] per builtin function, operator, or
//!   constructor/conversion family, keyed by hash.
//! - **Overloads**: stored in declaration order inside their intrinsic. The
//!   order is significant: it breaks exact ties during resolution.
//!
//! # Thread Safety
//!
//! A built `Catalog` is never mutated, so it is `Send + Sync` and may be
//! shared by reference (or behind an `Arc`) across any number of concurrent
//! compilations.
//!
//! # Example
//!
//! ```
//! use shader_sema_catalog::Catalog;
//!
//! let catalog = Catalog::wgsl().unwrap();
//! let cos = catalog.builtin("cos").expect("cos is a builtin");
//! assert_eq!(cos.name, "cos");
//! assert!(!cos.overloads.is_empty());
//! ```

use rustc_hash::FxHashMap;
use tracing::debug;

use shader_sema_core::{BinaryOp, CatalogError, IntrinsicHash, UnaryOp};

use crate::overload::{Overload, OverloadKind};

/// All overloads of one call target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intrinsic {
    /// Name as printed in diagnostics, e.g. `textureLoad`, `operator + `
    /// or `vec3`.
    pub name: String,
    pub overloads: Vec<Overload>,
}

/// Immutable overload catalog.
#[derive(Debug, Default)]
pub struct Catalog {
    intrinsics: FxHashMap<IntrinsicHash, Intrinsic>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Look up an intrinsic by identity.
    #[inline]
    pub fn get(&self, hash: IntrinsicHash) -> Option<&Intrinsic> {
        self.intrinsics.get(&hash)
    }

    pub fn builtin(&self, name: &str) -> Option<&Intrinsic> {
        self.get(IntrinsicHash::builtin(name))
    }

    pub fn unary(&self, op: UnaryOp) -> Option<&Intrinsic> {
        self.get(IntrinsicHash::unary(op))
    }

    pub fn binary(&self, op: BinaryOp) -> Option<&Intrinsic> {
        self.get(IntrinsicHash::binary(op))
    }

    pub fn ctor_conv(&self, name: &str) -> Option<&Intrinsic> {
        self.get(IntrinsicHash::ctor_conv(name))
    }

    /// Number of intrinsics.
    pub fn len(&self) -> usize {
        self.intrinsics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intrinsics.is_empty()
    }

    /// Total number of overloads across all intrinsics.
    pub fn overload_count(&self) -> usize {
        self.intrinsics.values().map(|i| i.overloads.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (IntrinsicHash, &Intrinsic)> {
        self.intrinsics.iter().map(|(hash, i)| (*hash, i))
    }
}

/// Builder that validates and collects intrinsics into a [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    intrinsics: FxHashMap<IntrinsicHash, Intrinsic>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a builtin function.
    pub fn builtin(&mut self, name: &str, overloads: Vec<Overload>) -> Result<(), CatalogError> {
        self.register(IntrinsicHash::builtin(name), name.to_string(), overloads)
    }

    /// Register a unary operator.
    pub fn unary(&mut self, op: UnaryOp, overloads: Vec<Overload>) -> Result<(), CatalogError> {
        self.register(
            IntrinsicHash::unary(op),
            format!("operator {} ", op),
            overloads,
        )
    }

    /// Register a binary operator. Compound assignments resolve against the
    /// same overloads.
    pub fn binary(&mut self, op: BinaryOp, overloads: Vec<Overload>) -> Result<(), CatalogError> {
        self.register(
            IntrinsicHash::binary(op),
            format!("operator {} ", op),
            overloads,
        )
    }

    /// Register a constructor/conversion family such as `vec3`.
    pub fn ctor_conv(&mut self, name: &str, overloads: Vec<Overload>) -> Result<(), CatalogError> {
        self.register(IntrinsicHash::ctor_conv(name), name.to_string(), overloads)
    }

    /// Register an intrinsic under an explicit identity.
    pub fn register(
        &mut self,
        hash: IntrinsicHash,
        name: String,
        overloads: Vec<Overload>,
    ) -> Result<(), CatalogError> {
        if self.intrinsics.contains_key(&hash) {
            return Err(CatalogError::DuplicateIntrinsic { name });
        }
        for (index, overload) in overloads.iter().enumerate() {
            validate_overload(&name, index, overload)?;
        }
        self.intrinsics.insert(hash, Intrinsic { name, overloads });
        Ok(())
    }

    pub fn build(self) -> Catalog {
        let catalog = Catalog {
            intrinsics: self.intrinsics,
        };
        debug!(
            intrinsics = catalog.len(),
            overloads = catalog.overload_count(),
            "built overload catalog"
        );
        catalog
    }
}

/// Check that every template index an overload uses is declared, and that
/// conversions take at least one argument and return something.
fn validate_overload(name: &str, index: usize, overload: &Overload) -> Result<(), CatalogError> {
    if overload.kind == OverloadKind::Conversion {
        if overload.parameters.is_empty() {
            return Err(CatalogError::ZeroArityConversion {
                name: name.to_string(),
                overload: index,
            });
        }
        if overload.return_type.is_none() {
            return Err(CatalogError::ConversionWithoutReturn {
                name: name.to_string(),
                overload: index,
            });
        }
    }

    let declared_types = overload.template_types.len();
    let declared_numbers = overload.template_numbers.len();
    let mut bad_type = None;
    let mut bad_number = None;
    let patterns = overload
        .parameters
        .iter()
        .map(|p| &p.pattern)
        .chain(overload.return_type.iter())
        .chain(
            overload
                .template_types
                .iter()
                .filter_map(|t| t.constraint.as_ref()),
        );
    for pattern in patterns {
        pattern.visit_templates(
            &mut |i| {
                if i >= declared_types {
                    bad_type.get_or_insert(i);
                }
            },
            &mut |i| {
                if i >= declared_numbers {
                    bad_number.get_or_insert(i);
                }
            },
        );
    }
    if let Some(i) = bad_type {
        return Err(CatalogError::TemplateTypeOutOfRange {
            name: name.to_string(),
            overload: index,
            index: i,
            declared: declared_types,
        });
    }
    if let Some(i) = bad_number {
        return Err(CatalogError::TemplateNumberOutOfRange {
            name: name.to_string(),
            overload: index,
            index: i,
            declared: declared_numbers,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TypeClass, TypeMatcher};
    use shader_sema_core::{ParameterUsage, ScalarKind};

    fn negate() -> Overload {
        Overload::builder(OverloadKind::Operator)
            .template_type("T", Some(TypeMatcher::Class(TypeClass::FIA_FI32_F16)))
            .param(ParameterUsage::None, TypeMatcher::Template(0))
            .returns(TypeMatcher::Template(0))
            .build()
    }

    #[test]
    fn register_and_lookup() {
        let mut builder = Catalog::builder();
        builder.unary(UnaryOp::Negate, vec![negate()]).unwrap();
        let catalog = builder.build();
        let intrinsic = catalog.unary(UnaryOp::Negate).unwrap();
        assert_eq!(intrinsic.name, "operator - ");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.overload_count(), 1);
        assert!(catalog.builtin("-").is_none());
    }

    #[test]
    fn duplicate_registration_fails() {
        let mut builder = Catalog::builder();
        builder.builtin("abs", vec![]).unwrap();
        let err = builder.builtin("abs", vec![]).unwrap_err();
        let expected = CatalogError::DuplicateIntrinsic {
            name: "abs".to_string(),
        };
        assert_eq!(err, expected);
    }

    #[test]
    fn undeclared_template_type_rejected() {
        let bad = Overload::builder(OverloadKind::Function)
            .param(ParameterUsage::None, TypeMatcher::Template(0))
            .build();
        let mut builder = Catalog::builder();
        let err = builder.builtin("bad", vec![bad]).unwrap_err();
        let expected = CatalogError::TemplateTypeOutOfRange {
            name: "bad".to_string(),
            overload: 0,
            index: 0,
            declared: 0,
        };
        assert_eq!(err, expected);
    }

    #[test]
    fn undeclared_template_number_rejected() {
        let bad = Overload::builder(OverloadKind::Function)
            .template_type("T", None)
            .param(
                ParameterUsage::None,
                TypeMatcher::Vector {
                    width: crate::NumberMatcher::Template(2),
                    element: Box::new(TypeMatcher::Template(0)),
                },
            )
            .build();
        let mut builder = Catalog::builder();
        let err = builder.builtin("bad", vec![bad]).unwrap_err();
        assert!(matches!(err, CatalogError::TemplateNumberOutOfRange { index: 2, .. }));
    }

    #[test]
    fn zero_arity_conversion_rejected() {
        let bad = Overload::builder(OverloadKind::Conversion)
            .returns(TypeMatcher::Scalar(ScalarKind::F32))
            .build();
        let mut builder = Catalog::builder();
        let err = builder.ctor_conv("f32", vec![bad]).unwrap_err();
        assert!(matches!(err, CatalogError::ZeroArityConversion { overload: 0, .. }));
    }

    #[test]
    fn catalog_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
