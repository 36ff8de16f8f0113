use crate::lexer::tokens::{LiteralValue, Token};

use super::ast::Expr;

// LITERALS

/// Literal Expression
/// A boolean, number, string or `nil` constant.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: LiteralValue,
}

/// Variable Expression
/// A reference to a named variable. Whether the name is declared is not
/// checked here.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: Token,
}

// COMPLEX

/// Unary Expression
/// A prefix `+` or `-` applied to an operand.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: Token,
    pub operand: Box<Expr>,
}

/// Binary Expression
/// An arithmetic, comparison or equality operation between two operands.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}
