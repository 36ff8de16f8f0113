use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("and", TokenKind::And);
        map.insert("break", TokenKind::Break);
        map.insert("class", TokenKind::Class);
        map.insert("continue", TokenKind::Continue);
        map.insert("do", TokenKind::Do);
        map.insert("else", TokenKind::Else);
        map.insert("false", TokenKind::False);
        map.insert("fun", TokenKind::Fun);
        map.insert("for", TokenKind::For);
        map.insert("if", TokenKind::If);
        map.insert("in", TokenKind::In);
        map.insert("let", TokenKind::Let);
        map.insert("nil", TokenKind::Nil);
        map.insert("or", TokenKind::Or);
        map.insert("print", TokenKind::Print);
        map.insert("return", TokenKind::Return);
        map.insert("super", TokenKind::Super);
        map.insert("static", TokenKind::Static);
        map.insert("struct", TokenKind::Struct);
        map.insert("switch", TokenKind::Switch);
        map.insert("this", TokenKind::This);
        map.insert("true", TokenKind::True);
        map.insert("var", TokenKind::Var);
        map.insert("while", TokenKind::While);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    Bang,       // !
    BangEqual,  // !=
    Equal,      // =
    EqualEqual, // ==

    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    Identifier,
    String,
    Number,

    // Reserved
    And,
    Break,
    Class,
    Continue,
    Do,
    Else,
    False,
    Fun,
    For,
    If,
    In,
    Let,
    Nil,
    Or,
    Print,
    Return,
    Super,
    Static,
    Struct,
    Switch,
    This,
    True,
    Var,
    While,

    Eof,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The scalar a literal token carries, and the payload of a literal expression.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Boolean(bool),
    Number(f64),
    String(String),
    Nil,
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralValue::Boolean(value) => write!(f, "{}", value),
            LiteralValue::Number(value) => write!(f, "{}", value),
            LiteralValue::String(value) => write!(f, "{}", value),
            LiteralValue::Nil => write!(f, "nil"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<LiteralValue>,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind == TokenKind::Eof {
            write!(f, "end of input")
        } else {
            write!(f, "{}", self.lexeme)
        }
    }
}

impl Token {
    /// Builds a token with no source location, for callers that assemble
    /// token streams by hand.
    pub fn new(kind: TokenKind, lexeme: &str, literal: Option<LiteralValue>) -> Self {
        Token {
            kind,
            lexeme: String::from(lexeme),
            literal,
            span: Span::null(),
        }
    }

    pub fn eof(span: Span) -> Self {
        Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            literal: None,
            span,
        }
    }

    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// One-line description used by the token dump of the binary.
    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[TokenKind::String, TokenKind::Identifier, TokenKind::Number]) {
            format!("{} ({})", self.kind, self.lexeme)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
