use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{LiteralValue, Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).expect("lexer patterns are valid regexes"),
            handler,
        }
    }
}

lazy_static! {
    // Tried in order; every pattern is anchored at the cursor. Longer
    // operators come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new("^[0-9]+(\\.[0-9]+)?", number_handler),
        RegexPattern::new("^\\s+", skip_handler),
        RegexPattern::new("^//[^\\n]*", skip_handler),
        RegexPattern::new("^\"(?:[^\"\\\\]|\\\\.)*\"", string_handler),
        RegexPattern::new("^\"", unterminated_string_handler),
        RegexPattern::new("^\\{", MK_DEFAULT_HANDLER!(TokenKind::LeftBrace, "{")),
        RegexPattern::new("^\\}", MK_DEFAULT_HANDLER!(TokenKind::RightBrace, "}")),
        RegexPattern::new("^\\(", MK_DEFAULT_HANDLER!(TokenKind::LeftParen, "(")),
        RegexPattern::new("^\\)", MK_DEFAULT_HANDLER!(TokenKind::RightParen, ")")),
        RegexPattern::new("^==", MK_DEFAULT_HANDLER!(TokenKind::EqualEqual, "==")),
        RegexPattern::new("^!=", MK_DEFAULT_HANDLER!(TokenKind::BangEqual, "!=")),
        RegexPattern::new("^!", MK_DEFAULT_HANDLER!(TokenKind::Bang, "!")),
        RegexPattern::new("^=", MK_DEFAULT_HANDLER!(TokenKind::Equal, "=")),
        RegexPattern::new("^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEqual, "<=")),
        RegexPattern::new("^<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        RegexPattern::new("^>=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEqual, ">=")),
        RegexPattern::new("^>", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        RegexPattern::new("^\\.", MK_DEFAULT_HANDLER!(TokenKind::Dot, ".")),
        RegexPattern::new("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        RegexPattern::new("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        RegexPattern::new("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        RegexPattern::new("^-", MK_DEFAULT_HANDLER!(TokenKind::Minus, "-")),
        RegexPattern::new("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        RegexPattern::new("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = Rc::new(file.unwrap_or_else(|| String::from("shell")));

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, lexeme = %token.lexeme, "token");
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    // `tokenize` rejects sources whose length does not fit in a `u32`, so
    // every cursor offset does.
    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span of the next `len` bytes starting at the cursor.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|found| found.as_str().to_string())
            .unwrap_or_default()
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    let value: f64 = matched.parse().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: matched.clone(),
            },
            lexer.position(),
        )
    })?;

    let span = lexer.span_of(matched.len());
    let len = matched.len();
    lexer.push(MK_TOKEN!(TokenKind::Number, matched, Some(LiteralValue::Number(value)), span));
    lexer.advance_n(len);
    Ok(())
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let len = lexer.matched(regex).len();
    lexer.advance_n(len);
    Ok(())
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    let value = unescape(&matched[1..matched.len() - 1]);

    let span = lexer.span_of(matched.len());
    let len = matched.len();
    lexer.push(MK_TOKEN!(TokenKind::String, matched, Some(LiteralValue::String(value)), span));
    lexer.advance_n(len);
    Ok(())
}

fn unterminated_string_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    Err(Error::new(ErrorImpl::UnterminatedString, lexer.position()))
}

fn unescape(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        let escaped = match chars.peek() {
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('\\') => '\\',
            Some('"') => '"',
            Some('0') => '\0',
            // Unknown escapes keep their backslash.
            _ => {
                result.push(ch);
                continue;
            }
        };
        chars.next();
        result.push(escaped);
    }

    result
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let value = lexer.matched(regex);
    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let span = lexer.span_of(value.len());
    let len = value.len();
    lexer.push(MK_TOKEN!(kind, value, None, span));
    lexer.advance_n(len);
    Ok(())
}

/// Splits `source` into tokens, always ending with a single `Eof` token.
/// Checks that every byte offset of a source of length `len` fits in a
/// `Position`.
pub(crate) fn check_source_len(len: usize, file: &Rc<String>) -> Result<u32, Error> {
    u32::try_from(len).map_err(|_| {
        Error::new(
            ErrorImpl::SourceTooLarge { len },
            Position(0, Rc::clone(file)),
        )
    })
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    check_source_len(lex.source.len(), &lex.file)?;

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex)?,
            None => {
                let token = lex
                    .remainder()
                    .chars()
                    .next()
                    .map(String::from)
                    .unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token },
                    lex.position(),
                ));
            }
        }
    }

    let span = lex.span_of(0);
    lex.push(Token::eof(span));
    debug!(count = lex.tokens.len(), file = %lex.file, "tokenized source");
    Ok(lex.tokens)
}
