//! Signature de-duplication.
//!
//! Two calls that resolve to the same overload with the same instantiated
//! parameter and return types share one [`SignatureId`], so later passes
//! can key semantic nodes on it.

use rustc_hash::FxHashMap;

use shader_sema_core::{IntrinsicHash, ParameterUsage, TypeHandle};

/// Identity of an instantiated overload signature within one
/// [`IntrinsicTable`](crate::IntrinsicTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SignatureId(u32);

impl SignatureId {
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Everything that makes two instantiated signatures the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct SignatureKey {
    pub intrinsic: IntrinsicHash,
    pub overload: usize,
    pub return_type: TypeHandle,
    pub parameters: Vec<(TypeHandle, ParameterUsage)>,
}

/// Maps instantiated signatures to their ids.
#[derive(Debug, Default, Clone)]
pub(crate) struct SignatureCache {
    ids: FxHashMap<SignatureKey, SignatureId>,
    next: u32,
}

impl SignatureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id of `key`, allocating one on first sight.
    pub fn intern(&mut self, key: SignatureKey) -> SignatureId {
        if let Some(id) = self.ids.get(&key) {
            return *id;
        }
        let id = self.fresh();
        self.ids.insert(key, id);
        id
    }

    /// A new id shared with nothing.
    pub fn fresh(&mut self) -> SignatureId {
        let id = SignatureId(self.next);
        self.next += 1;
        id
    }

    /// Number of distinct signatures seen by [`intern`](Self::intern).
    pub fn len(&self) -> usize {
        self.ids.len()
    }
}
