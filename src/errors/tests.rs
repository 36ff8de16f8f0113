//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn position(offset: u32) -> Position {
    Position(offset, Rc::new("test.lang".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        position(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.lang");
}

#[test]
fn test_expected_token_error() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::RightParen,
            message: "Expect ')' after expression.".to_string(),
            found: "end of input".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "ExpectedToken");
    assert_eq!(
        error.to_string(),
        "Expect ')' after expression. (found \"end of input\")"
    );
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_missing_semicolon_suggestion() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Semicolon,
            message: "Expect ';' after value.".to_string(),
            found: "print".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_tip().to_string(), "did you miss a semicolon?");
}

#[test]
fn test_unterminated_block_error() {
    let error = Error::new(ErrorImpl::UnterminatedBlock, position(3));

    assert_eq!(error.get_error_name(), "UnterminatedBlock");
    assert_eq!(error.get_kind(), &ErrorImpl::UnterminatedBlock);
}

#[test]
fn test_nesting_error_mentions_limit() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 8 }, position(0));

    assert_eq!(error.to_string(), "nesting exceeds 8 levels");
    assert!(error.get_tip().to_string().contains("FRONTEND_MAX_DEPTH"));
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_is_std_error() {
    fn assert_std_error<E: std::error::Error>(_: &E) {}

    let error = Error::new(ErrorImpl::UnterminatedString, position(0));
    assert_std_error(&error);
}
