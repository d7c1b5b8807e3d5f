//! Source positions attached to calls and diagnostics.
//!
//! The matcher never interprets a [`Span`]; it only carries it through to the
//! diagnostic so the caller can report errors against the original call site.

use std::fmt;

/// The position of a call expression in the source being compiled.
///
/// A span with `line == 0` is "unknown" and is omitted from rendered
/// diagnostics.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Line number (1-indexed, 0 when unknown).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

impl Span {
    /// A span with no known position.
    pub const UNKNOWN: Span = Span { line: 0, column: 0 };

    #[inline]
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Whether this span refers to a real source position.
    #[inline]
    pub fn is_known(&self) -> bool {
        self.line != 0
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_span_is_unknown() {
        assert!(!Span::default().is_known());
        assert_eq!(Span::default(), Span::UNKNOWN);
    }

    #[test]
    fn display_is_line_colon_column() {
        let span = Span::new(12, 34);
        assert!(span.is_known());
        assert_eq!(format!("{}", span), "12:34");
        assert_eq!(format!("{:?}", span), "12:34");
    }
}
