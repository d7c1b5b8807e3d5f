//! Operator definitions for shader expressions.
//!
//! Operators are call targets like builtin functions: each one owns a list
//! of overloads in the catalog and resolves through the same matcher.

use std::fmt;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Logical operators
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,

    // Bitwise operators
    /// `&`
    And,
    /// `|`
    Or,
    /// `^`
    Xor,

    // Equality operators
    /// `==`
    Equal,
    /// `!=`
    NotEqual,

    // Relational operators
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,

    // Shift operators
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,

    // Arithmetic operators
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 18] = [
        BinaryOp::LogicalAnd,
        BinaryOp::LogicalOr,
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::Xor,
        BinaryOp::Equal,
        BinaryOp::NotEqual,
        BinaryOp::Less,
        BinaryOp::LessEqual,
        BinaryOp::Greater,
        BinaryOp::GreaterEqual,
        BinaryOp::ShiftLeft,
        BinaryOp::ShiftRight,
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::Modulo,
    ];

    /// The operator's source spelling.
    pub const fn as_str(self) -> &'static str {
        use BinaryOp::*;
        match self {
            LogicalAnd => "&&",
            LogicalOr => "||",
            And => "&",
            Or => "|",
            Xor => "^",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            ShiftLeft => "<<",
            ShiftRight => ">>",
            Add => "+",
            Subtract => "-",
            Multiply => "*",
            Divide => "/",
            Modulo => "%",
        }
    }

    /// Check if this operator is comparison-related.
    pub fn is_comparison(&self) -> bool {
        use BinaryOp::*;
        matches!(
            self,
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual
        )
    }

    /// Whether a compound assignment form (`op=`) exists for this operator.
    pub fn has_compound_form(&self) -> bool {
        use BinaryOp::*;
        matches!(
            self,
            And | Or | Xor | ShiftLeft | ShiftRight | Add | Subtract | Multiply | Divide | Modulo
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `-`
    Negate,
    /// `!`
    Not,
    /// `~`
    Complement,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 3] = [UnaryOp::Negate, UnaryOp::Not, UnaryOp::Complement];

    pub const fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Negate => "-",
            UnaryOp::Not => "!",
            UnaryOp::Complement => "~",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
