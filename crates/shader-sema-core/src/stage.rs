//! Evaluation stages.

use std::fmt;

/// When an expression's value must be known.
///
/// Ordered from earliest to latest: a constant expression may also be used
/// where a runtime one is expected, never the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum EvaluationStage {
    /// Known at shader-creation time. Abstract numerics may survive.
    Constant,
    /// Computed while the shader executes. Abstract numerics are materialized.
    #[default]
    Runtime,
}

impl EvaluationStage {
    /// Whether abstract numeric types are permitted at this stage.
    #[inline]
    pub const fn admits_abstract(self) -> bool {
        matches!(self, EvaluationStage::Constant)
    }
}

impl fmt::Display for EvaluationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationStage::Constant => f.write_str("constant"),
            EvaluationStage::Runtime => f.write_str("runtime"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_constant_admits_abstract() {
        assert!(EvaluationStage::Constant.admits_abstract());
        assert!(!EvaluationStage::Runtime.admits_abstract());
        assert!(EvaluationStage::Constant < EvaluationStage::Runtime);
    }
}
