//! Matcher configuration.

/// Options controlling how an [`IntrinsicTable`](crate::IntrinsicTable)
/// matches calls and reports failures.
///
/// ```
/// use shader_sema_resolver::MatcherConfig;
///
/// let config = MatcherConfig::new().with_f16(false).with_max_candidates(Some(8));
/// assert!(!config.f16_enabled());
/// assert_eq!(config.max_candidates(), Some(8));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherConfig {
    f16: bool,
    max_candidates: Option<usize>,
    signature_dedup: bool,
}

impl MatcherConfig {
    pub fn new() -> Self {
        Self {
            f16: true,
            max_candidates: None,
            signature_dedup: true,
        }
    }

    /// Whether `f16` arguments and `f16` type-class members are admitted.
    /// Mirrors the `enable f16;` directive.
    pub fn with_f16(mut self, enabled: bool) -> Self {
        self.f16 = enabled;
        self
    }

    /// Render at most this many candidate lines per diagnostic section.
    /// `None` renders all of them.
    pub fn with_max_candidates(mut self, limit: Option<usize>) -> Self {
        self.max_candidates = limit;
        self
    }

    /// Give identical instantiated signatures the same
    /// [`SignatureId`](crate::SignatureId).
    pub fn with_signature_dedup(mut self, enabled: bool) -> Self {
        self.signature_dedup = enabled;
        self
    }

    #[inline]
    pub fn f16_enabled(&self) -> bool {
        self.f16
    }

    #[inline]
    pub fn max_candidates(&self) -> Option<usize> {
        self.max_candidates
    }

    #[inline]
    pub fn signature_dedup(&self) -> bool {
        self.signature_dedup
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = MatcherConfig::default();
        assert!(config.f16_enabled());
        assert_eq!(config.max_candidates(), None);
        assert!(config.signature_dedup());
    }

    #[test]
    fn builder_overrides() {
        let config = MatcherConfig::new()
            .with_f16(false)
            .with_max_candidates(Some(3))
            .with_signature_dedup(false);
        assert!(!config.f16_enabled());
        assert_eq!(config.max_candidates(), Some(3));
        assert!(!config.signature_dedup());
    }
}
