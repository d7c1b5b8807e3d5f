//! The "no matching overload" diagnostic.
//!
//! A [`Diagnostic`] holds the attempted call as the user wrote it and the
//! rendered candidate lines, closest candidate first. Its `Display` output is
//! the exact text reported to the user:
//!
//! ```text
//! 12:34 error: no matching call to cos(bool)
//!
//! 2 candidate functions:
//!   cos(T) -> T  where: T is abstract-float, f32 or f16
//!   cos(vecN<T>) -> vecN<T>  where: T is abstract-float, f32 or f16
//! ```

use std::fmt;

use crate::Span;

/// What kind of call failed to resolve. Selects the header wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    /// A builtin function call.
    Function,
    /// A unary, binary or compound-assignment operator.
    Operator,
    /// A type constructor or conversion.
    Constructor,
}

/// One group of candidates, e.g. "candidate constructors".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSection {
    /// Singular noun for the group: `function`, `operator`, `constructor`
    /// or `conversion`.
    pub noun: &'static str,
    /// Number of candidates in the group, including any not rendered.
    pub total: usize,
    /// Rendered candidate lines, without indentation.
    pub lines: Vec<String>,
}

impl CandidateSection {
    pub fn new(noun: &'static str, total: usize, lines: Vec<String>) -> Self {
        Self { noun, total, lines }
    }
}

/// A failed overload resolution, ready to be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub span: Span,
    pub kind: CallKind,
    /// The call signature as attempted, e.g. `textureDimensions(bool, bool)`.
    pub attempted: String,
    /// Empty sections are omitted when rendering.
    pub sections: Vec<CandidateSection>,
}

impl Diagnostic {
    /// The diagnostic text without the source location prefix.
    pub fn message(&self) -> String {
        let mut out = String::new();
        let header = match self.kind {
            CallKind::Function => "no matching call to",
            CallKind::Operator => "no matching overload for",
            CallKind::Constructor => "no matching constructor for",
        };
        out.push_str(header);
        out.push(' ');
        out.push_str(&self.attempted);
        out.push('\n');
        for section in self.sections.iter().filter(|s| s.total > 0) {
            out.push('\n');
            out.push_str(&format!("{} candidate {}", section.total, section.noun));
            out.push_str(if section.total > 1 { "s:\n" } else { ":\n" });
            for line in &section.lines {
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
            let hidden = section.total.saturating_sub(section.lines.len());
            if hidden > 0 {
                out.push_str(&format!("  ... {} more\n", hidden));
            }
        }
        out
    }

    /// All rendered candidate lines across sections, in order.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|s| s.lines.iter().map(String::as_str))
    }

    /// Total number of candidates considered.
    pub fn candidate_count(&self) -> usize {
        self.sections.iter().map(|s| s.total).sum()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.span.is_known() {
            write!(f, "{} ", self.span)?;
        }
        write!(f, "error: {}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator_diag() -> Diagnostic {
        let lines = vec![
            "operator - (T) -> T".to_string(),
            "operator - (vecN<T>) -> vecN<T>".to_string(),
        ];
        Diagnostic {
            span: Span::new(12, 34),
            kind: CallKind::Operator,
            attempted: "operator - (bool)".to_string(),
            sections: vec![CandidateSection::new("operator", 2, lines)],
        }
    }

    #[test]
    fn renders_location_header_and_candidates() {
        assert_eq!(
            operator_diag().to_string(),
            "12:34 error: no matching overload for operator - (bool)\n\n\
             2 candidate operators:\n  operator - (T) -> T\n  operator - (vecN<T>) -> vecN<T>\n"
        );
    }

    #[test]
    fn unknown_span_is_omitted() {
        let mut diag = operator_diag();
        diag.span = Span::UNKNOWN;
        assert!(diag.to_string().starts_with("error: no matching overload"));
    }

    #[test]
    fn singular_noun_and_elision() {
        let constructors = vec!["vec2(x: T, y: T) -> vec2<T>".to_string()];
        let conversions = vec!["vec2<T>(vec2<U>) -> vec2<f32>".to_string()];
        let diag = Diagnostic {
            span: Span::UNKNOWN,
            kind: CallKind::Constructor,
            attempted: "vec2(bool, i32, u32)".to_string(),
            sections: vec![
                CandidateSection::new("constructor", 3, constructors),
                CandidateSection::new("conversion", 1, conversions),
                CandidateSection::new("conversion", 0, Vec::new()),
            ],
        };
        let text = diag.message();
        let expected = "3 candidate constructors:\n  vec2(x: T, y: T) -> vec2<T>\n  ... 2 more\n";
        assert!(text.contains(expected));
        assert!(text.contains("\n\n1 candidate conversion:\n"));
        assert_eq!(diag.candidate_count(), 4);
        assert_eq!(diag.candidates().count(), 2);
    }
}
