//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the `Parser` cursor and the `parse` entry points.
//! The grammar rules themselves live in `stmt` and `expr` as free functions
//! over `&mut Parser`, built from the lookahead primitives defined here.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    ast::ast::Stmt,
    config::ParserConfig,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_declaration,
};

/// The main parser structure that maintains parsing state.
///
/// One parser reads one token sequence once; `parse` consumes it.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Index of the current token; never exceeds `tokens.len()`
    pos: usize,
    /// Returned by `peek` once the cursor runs off the end
    eof: Token,
    /// Handlers for declarations (`var`, `let`)
    decl_lookup: StmtLookup,
    /// Handlers for keyword-introduced statements
    stmt_lookup: StmtLookup,
    /// Current nesting depth of declarations and unary expressions
    depth: usize,
    config: ParserConfig,
}

impl Parser {
    /// Creates a new Parser with the default configuration.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    pub fn with_config(tokens: Vec<Token>, config: ParserConfig) -> Self {
        // A stream without a trailing Eof still ends somewhere; point the
        // sentinel just past the last real token.
        let eof = match tokens.last() {
            Some(last) if last.kind == TokenKind::Eof => last.clone(),
            Some(last) => Token::eof(Span {
                start: last.span.end.clone(),
                end: last.span.end.clone(),
            }),
            None => Token::eof(Span::null()),
        };

        let mut parser = Parser {
            tokens,
            pos: 0,
            eof,
            decl_lookup: HashMap::new(),
            stmt_lookup: HashMap::new(),
            depth: 0,
            config,
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Parses every declaration up to `Eof`, stopping at the first error.
    pub fn parse(mut self) -> Result<Vec<Stmt>, Error> {
        let mut statements = vec![];

        while !self.at_end() {
            statements.push(parse_declaration(&mut self)?);
        }

        debug!(statements = statements.len(), "parsed program");
        Ok(statements)
    }

    /// True once the cursor is at the `Eof` token or past the last token.
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len() || self.peek().kind == TokenKind::Eof
    }

    /// Returns the current token without advancing.
    pub fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    /// Returns the most recently consumed token.
    pub fn previous(&self) -> &Token {
        self.pos
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .unwrap_or(&self.eof)
    }

    /// Consumes the current token and returns it. At the end the cursor
    /// stays put and the end token is returned.
    pub fn advance(&mut self) -> &Token {
        if self.at_end() {
            return self.peek();
        }

        self.pos += 1;
        let token = self.previous();
        trace!(kind = %token.kind, lexeme = %token.lexeme, "consumed");
        token
    }

    /// True if the current token has the given kind. Never true at the end.
    pub fn check(&self, kind: TokenKind) -> bool {
        !self.at_end() && self.peek().kind == kind
    }

    /// Consumes the current token if it has the given kind.
    pub fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            return true;
        }

        false
    }

    /// Consumes the current token if it has any of the given kinds.
    pub fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|kind| self.match_token(*kind))
    }

    /// Consumes a mandatory token, failing with `message` if it is missing.
    pub fn consume(&mut self, kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.match_token(kind) {
            return Ok(self.previous().clone());
        }

        let found = self.peek().to_string();
        Err(self.error_at_current(ErrorImpl::ExpectedToken {
            expected: kind,
            message: String::from(message),
            found,
        }))
    }

    /// Builds an error located at the current token.
    pub fn error_at_current(&self, error: ErrorImpl) -> Error {
        let token = self.peek();
        debug!(%error, at = %token, "syntax error");
        Error::new(error, token.span.start.clone())
    }

    /// Runs one level of nested grammar, failing once the configured
    /// depth is exceeded.
    pub fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= self.config.max_depth() {
            return Err(self.error_at_current(ErrorImpl::NestingTooDeep {
                limit: self.config.max_depth(),
            }));
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Returns the declaration handler registered for a token kind.
    pub fn get_decl_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.decl_lookup.get(&kind).copied()
    }

    /// Returns the statement handler registered for a token kind.
    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    /// Registers a declaration handler, run after its keyword is consumed.
    pub fn decl(&mut self, kind: TokenKind, decl_fn: StmtHandler) {
        self.decl_lookup.insert(kind, decl_fn);
    }

    /// Registers a statement handler, run after its keyword is consumed.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses a stream of tokens into a program.
///
/// This is the main entry point for parsing. The stream should end with an
/// `Eof` token; a missing one is treated as if it were there.
///
/// # Returns
///
/// The top-level statements in source order, or the first syntax error.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Stmt>, Error> {
    Parser::new(tokens).parse()
}

/// Like [`parse`], with an explicit configuration.
pub fn parse_with_config(tokens: Vec<Token>, config: ParserConfig) -> Result<Vec<Stmt>, Error> {
    Parser::with_config(tokens, config).parse()
}
