use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{LiteralValue, TokenKind},
};

use super::parser::Parser;

/// One precedence level, used as the operand parser of the level above it.
pub type OperandParser = fn(&mut Parser) -> Result<Expr, Error>;

/// expr = equality
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_equality(parser)
}

pub fn parse_equality(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(
        parser,
        &[TokenKind::BangEqual, TokenKind::EqualEqual],
        parse_comparison,
    )
}

pub fn parse_comparison(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(
        parser,
        &[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ],
        parse_term,
    )
}

pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, &[TokenKind::Plus, TokenKind::Minus], parse_factor)
}

pub fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, &[TokenKind::Star, TokenKind::Slash], parse_unary)
}

/// Parses `operand (op operand)*`, folding to the left so that
/// `a - b - c` becomes `(a - b) - c`.
pub fn parse_binary_expr(
    parser: &mut Parser,
    operators: &[TokenKind],
    operand: OperandParser,
) -> Result<Expr, Error> {
    let mut left = operand(parser)?;

    while parser.match_any(operators) {
        let operator = parser.previous().clone();
        let right = operand(parser)?;
        left = Expr::binary(left, operator, right);
    }

    Ok(left)
}

/// unary = ("+" | "-") unary | primary
pub fn parse_unary(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(|parser| {
        if parser.match_any(&[TokenKind::Plus, TokenKind::Minus]) {
            let operator = parser.previous().clone();
            let operand = parse_unary(parser)?;
            return Ok(Expr::unary(operator, operand));
        }

        parse_primary(parser)
    })
}

pub fn parse_primary(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.match_token(TokenKind::False) {
        return Ok(Expr::literal(LiteralValue::Boolean(false)));
    }
    if parser.match_token(TokenKind::True) {
        return Ok(Expr::literal(LiteralValue::Boolean(true)));
    }
    if parser.match_token(TokenKind::Nil) {
        return Ok(Expr::literal(LiteralValue::Nil));
    }

    if parser.match_any(&[TokenKind::Number, TokenKind::String]) {
        let token = parser.previous();
        return match &token.literal {
            Some(value) => Ok(Expr::literal(value.clone())),
            None => Err(Error::new(
                ErrorImpl::MissingLiteral {
                    token: token.lexeme.clone(),
                },
                token.span.start.clone(),
            )),
        };
    }

    if parser.match_token(TokenKind::Identifier) {
        return Ok(Expr::variable(parser.previous().clone()));
    }

    if parser.match_token(TokenKind::LeftParen) {
        let expr = parse_expr(parser)?;
        parser.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
        return Ok(expr);
    }

    let token = parser.peek().to_string();
    Err(parser.error_at_current(ErrorImpl::UnexpectedToken { token }))
}
