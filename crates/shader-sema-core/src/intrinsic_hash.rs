//! Deterministic hash-based identity for call targets.
//!
//! This module provides [`IntrinsicHash`], a 64-bit hash identifying a builtin
//! function, an operator, or a type constructor/conversion family in the
//! overload catalog. Hashes are computed from names, so the catalog and the
//! caller agree on identity without sharing any registration state.
//!
//! # Hash Computation
//!
//! Uses XXHash64 with domain-specific mixing constants so that a builtin named
//! `"-"` can never collide with the unary negation operator.
//!
//! # Examples
//!
//! ```
//! use shader_sema_core::{IntrinsicHash, UnaryOp};
//!
//! let cos = IntrinsicHash::builtin("cos");
//! assert_eq!(cos, IntrinsicHash::builtin("cos"));
//! assert_ne!(IntrinsicHash::unary(UnaryOp::Negate), IntrinsicHash::builtin("-"));
//! ```

use std::fmt;
use xxhash_rust::xxh64::xxh64;

use crate::{BinaryOp, UnaryOp};

/// Domain-specific mixing constants for hash computation.
pub mod hash_constants {
    /// Domain marker for builtin function hashes
    pub const BUILTIN: u64 = 0x5ea77ffbcdf5f302;

    /// Domain marker for unary operator hashes
    pub const UNARY: u64 = 0x3e9f5d2a8c7b1403;

    /// Domain marker for binary operator hashes
    pub const BINARY: u64 = 0x7d3c8b4a92e15f6d;

    /// Domain marker for constructor/conversion hashes
    pub const CTOR_CONV: u64 = 0x9a7f3d5e2b8c4601;
}

/// A deterministic 64-bit hash identifying an intrinsic call target.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct IntrinsicHash(pub u64);

impl IntrinsicHash {
    /// Create the hash of a builtin function by name.
    #[inline]
    pub fn builtin(name: &str) -> Self {
        Self::domain(hash_constants::BUILTIN, name)
    }

    /// Create the hash of a unary operator.
    #[inline]
    pub fn unary(op: UnaryOp) -> Self {
        Self::domain(hash_constants::UNARY, op.as_str())
    }

    /// Create the hash of a binary operator.
    ///
    /// Compound assignments share the hash of their plain operator.
    #[inline]
    pub fn binary(op: BinaryOp) -> Self {
        Self::domain(hash_constants::BINARY, op.as_str())
    }

    /// Create the hash of a constructor/conversion family, e.g. `"vec3"`.
    #[inline]
    pub fn ctor_conv(name: &str) -> Self {
        Self::domain(hash_constants::CTOR_CONV, name)
    }

    fn domain(marker: u64, name: &str) -> Self {
        IntrinsicHash(xxh64(name.as_bytes(), marker))
    }
}

impl fmt::Debug for IntrinsicHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntrinsicHash({:#018x})", self.0)
    }
}

impl fmt::Display for IntrinsicHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
