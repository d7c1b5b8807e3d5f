//! Error types for catalog construction and overload matching.
//!
//! ## Error Hierarchy
//!
//! ```text
//! CatalogError - malformed overload tables, reported once at catalog build time
//! MatchError   - a call that could not be resolved
//! ```
//!
//! Interning never fails with a typed error; see
//! [`TypeUniverse::intern`](crate::TypeUniverse::intern).

use thiserror::Error;

use crate::{Diagnostic, Span};

// ============================================================================
// Catalog Errors
// ============================================================================

/// Errors detected while building an overload catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two intrinsics were registered under the same call-target identity.
    #[error("intrinsic '{name}' is already registered")]
    DuplicateIntrinsic { name: String },

    /// A pattern refers to a template type the overload does not declare.
    #[error("overload {overload} of '{name}' uses template type {index} but declares {declared}")]
    TemplateTypeOutOfRange {
        name: String,
        overload: usize,
        index: usize,
        declared: usize,
    },

    /// A pattern refers to a template number the overload does not declare.
    #[error("overload {overload} of '{name}' uses template number {index} but declares {declared}")]
    TemplateNumberOutOfRange {
        name: String,
        overload: usize,
        index: usize,
        declared: usize,
    },

    /// A conversion overload with no parameters.
    #[error("conversion overload {overload} of '{name}' takes no parameters")]
    ZeroArityConversion { name: String, overload: usize },

    /// A conversion overload with no return type.
    #[error("conversion overload {overload} of '{name}' has no return type")]
    ConversionWithoutReturn { name: String, overload: usize },
}

// ============================================================================
// Match Errors
// ============================================================================

/// Errors returned when resolving a call against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// No overload accepts the arguments. Carries the full diagnostic.
    #[error("{0}")]
    NoMatchingOverload(Box<Diagnostic>),

    /// The call target is not in the catalog.
    #[error("at {span}: unknown intrinsic '{name}'")]
    UnknownIntrinsic { name: String, span: Span },

    /// The catalog produced an overload whose return type could not be built.
    #[error("internal error at {span}: {message}")]
    Internal { message: String, span: Span },
}

impl MatchError {
    /// Get the span associated with this error.
    pub fn span(&self) -> Span {
        match self {
            MatchError::NoMatchingOverload(diag) => diag.span,
            MatchError::UnknownIntrinsic { span, .. } => *span,
            MatchError::Internal { span, .. } => *span,
        }
    }

    /// The diagnostic, if this is a `NoMatchingOverload`.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            MatchError::NoMatchingOverload(diag) => Some(diag),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CallKind;

    #[test]
    fn no_matching_overload_displays_diagnostic() {
        let diag = Diagnostic {
            span: Span::new(3, 7),
            kind: CallKind::Function,
            attempted: "cos(bool)".to_string(),
            sections: Vec::new(),
        };
        let err = MatchError::NoMatchingOverload(Box::new(diag));
        assert_eq!(
            err.to_string(),
            "3:7 error: no matching call to cos(bool)\n"
        );
        assert_eq!(err.span(), Span::new(3, 7));
        assert!(err.diagnostic().is_some());
    }

    #[test]
    fn unknown_intrinsic_message() {
        let err = MatchError::UnknownIntrinsic {
            name: "frobnicate".to_string(),
            span: Span::new(1, 2),
        };
        assert_eq!(err.to_string(), "at 1:2: unknown intrinsic 'frobnicate'");
        assert!(err.diagnostic().is_none());
    }

    #[test]
    fn catalog_error_messages() {
        let err = CatalogError::ZeroArityConversion {
            name: "vec3".to_string(),
            overload: 4,
        };
        assert_eq!(
            err.to_string(),
            "conversion overload 4 of 'vec3' takes no parameters"
        );
    }
}
