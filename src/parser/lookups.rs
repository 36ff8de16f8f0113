use std::collections::HashMap;

use crate::{ast::ast::Stmt, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

/// Parses the rest of a statement whose introducing keyword was consumed.
pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Declarations
    parser.decl(TokenKind::Var, parse_var_decl_stmt);
    parser.decl(TokenKind::Let, parse_var_decl_stmt);

    // Statements
    parser.stmt(TokenKind::Print, parse_print_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::LeftBrace, parse_block_stmt);
}
