//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into statements. Each grammar rule is one function;
//! operator precedence follows from which rule calls which:
//!
//! - Statement parsing (variable declarations, print, if/else, blocks)
//! - Expression parsing (equality, comparison, term, factor, unary, primary)
//! - Nesting limits and error reporting
//!
//! Statement keywords are dispatched through a lookup table of handlers,
//! and parsing stops at the first syntax error.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
