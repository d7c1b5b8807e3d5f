//! Per-overload flag sets.

use bitflags::bitflags;

bitflags! {
    /// Pipeline stages in which an overload may be called.
    ///
    /// ```
    /// use shader_sema_catalog::PipelineStages;
    ///
    /// let derivatives = PipelineStages::FRAGMENT;
    /// assert!(!derivatives.contains(PipelineStages::COMPUTE));
    /// assert!(PipelineStages::all().contains(derivatives));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PipelineStages: u8 {
        const VERTEX = 1 << 0;
        const FRAGMENT = 1 << 1;
        const COMPUTE = 1 << 2;
    }
}

bitflags! {
    /// Properties of an overload other than its signature.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct OverloadFlags: u8 {
        /// The overload can be evaluated at shader-creation time.
        const CONST_EVAL = 1 << 0;
        /// Discarding the result is an error.
        const MUST_USE = 1 << 1;
        /// The overload is scheduled for removal.
        const DEPRECATED = 1 << 2;
    }
}

impl Default for PipelineStages {
    fn default() -> Self {
        PipelineStages::all()
    }
}
