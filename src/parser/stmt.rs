use tracing::debug;

use crate::{
    ast::ast::Stmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::expr::parse_expr,
};

use super::parser::Parser;

/// declaration = varDecl | statement
pub fn parse_declaration(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.nested(|parser| {
        let kind = parser.peek().kind;
        if let Some(handler) = parser.get_decl_handler(kind) {
            debug!(%kind, "declaration");
            parser.advance();
            return handler(parser);
        }

        parse_stmt(parser)
    })
}

/// statement = printStmt | ifStmt | blockStmt | exprStmt
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let kind = parser.peek().kind;
    if let Some(handler) = parser.get_stmt_handler(kind) {
        debug!(%kind, "statement");
        parser.advance();
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser)?;

    // A trailing expression may run straight into the end of input.
    if !parser.at_end() {
        parser.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
    }

    Ok(Stmt::expression(expression))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let value = parse_expr(parser)?;
    parser.consume(TokenKind::Semicolon, "Expect ';' after value.")?;

    Ok(Stmt::print(value))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let name = parser.consume(TokenKind::Identifier, "Expect variable name.")?;

    let initializer = if parser.match_token(TokenKind::Equal) {
        Some(parse_expr(parser)?)
    } else {
        None
    };

    parser.consume(
        TokenKind::Semicolon,
        "Expect ';' after variable declaration.",
    )?;

    Ok(Stmt::var(name, initializer))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let condition = parse_expr(parser)?;
    // Branches are statements, not declarations, so they are counted here.
    let then_branch = parser.nested(parse_stmt)?;

    // Checked right after the inner statement, so an `else` always belongs
    // to the nearest `if`.
    let else_branch = if parser.match_token(TokenKind::Else) {
        Some(parser.nested(parse_stmt)?)
    } else {
        None
    };

    Ok(Stmt::if_stmt(condition, then_branch, else_branch))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let open = parser.previous().span.start.clone();

    let mut statements = Vec::new();
    while !parser.check(TokenKind::RightBrace) {
        if parser.at_end() {
            debug!("block reached end of input");
            return Err(Error::new(ErrorImpl::UnterminatedBlock, open));
        }
        statements.push(parse_declaration(parser)?);
    }

    parser.consume(TokenKind::RightBrace, "Expect '}' after block.")?;

    Ok(Stmt::block(statements))
}
