use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// An error raised while lexing or parsing, tagged with where it happened.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::UnterminatedBlock => "UnterminatedBlock",
            ErrorImpl::MissingLiteral { .. } => "MissingLiteral",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::SourceTooLarge { .. } => "SourceTooLarge",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it a valid decimal literal?",
                token
            )),
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("did you forget a closing `\"`?"))
            }
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected an expression",
                token
            )),
            ErrorImpl::ExpectedToken { expected, .. } if *expected == TokenKind::Semicolon => {
                ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
            }
            ErrorImpl::ExpectedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedBlock => {
                ErrorTip::Suggestion(String::from("did you forget a closing `}`?"))
            }
            ErrorImpl::MissingLiteral { .. } => ErrorTip::Suggestion(String::from(
                "the lexer must attach a value to number and string tokens",
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "raise FRONTEND_MAX_DEPTH above {} or flatten the source",
                limit
            )),
            ErrorImpl::SourceTooLarge { .. } => ErrorTip::Suggestion(format!(
                "source offsets are 32-bit, split the input below {} bytes",
                u32::MAX
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("{message} (found {found:?})")]
    ExpectedToken {
        expected: TokenKind,
        message: String,
        found: String,
    },
    #[error("block is never closed")]
    UnterminatedBlock,
    #[error("literal token {token:?} carries no value")]
    MissingLiteral { token: String },
    #[error("nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("source is {len} bytes, more than a position can address")]
    SourceTooLarge { len: usize },
}
