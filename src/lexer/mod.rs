//! Lexical analysis module for the front end.
//!
//! A small reference lexer that turns source text into the token stream
//! the parser consumes. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
