#![allow(clippy::module_inception)]

use std::{fmt::Write as _, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Finds the line holding byte offset `position` in `source`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` inside that line, or `None` when the offset is past the end.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    None
}

/// Renders a parse or lex error as a caret diagnostic.
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: message
        -> final.lang
           |
        20 | let a = #;
           | --------^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error);
    } else {
        let _ = writeln!(out, "Error: {} ({})", error, error.get_tip());
    }
    let _ = writeln!(out, "-> {}", file);

    let position = error.get_position();
    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    eprint!("{}", format_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.len() - trimmed.len())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::errors::errors::{Error, ErrorImpl};
    use crate::Position;

    const SOURCE: &str = "Hello, world!\nsecond\n\n    Testing { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 34).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "    Testing { }\n");
        assert_eq!(line_pos, 12);
    }

    #[test]
    fn test_get_line_past_end() {
        assert!(super::get_line_at_position(SOURCE, 500).is_none());
        assert!(super::get_line_at_position("", 0).is_none());
    }

    #[test]
    fn test_format_error_points_at_offending_column() {
        let source = "print 1;\n  print (2;\n";
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                token: String::from(";"),
            },
            Position(19, Rc::new(String::from("test.lang"))),
        );

        let rendered = super::format_error(&error, source, "test.lang");
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with("Error: unexpected token"));
        assert_eq!(lines[1], "-> test.lang");
        assert_eq!(lines[3], "2 | print (2;");
        assert_eq!(lines[4], "  | --------^");
    }

    #[test]
    fn test_format_error_without_source_line() {
        let error = Error::new(ErrorImpl::UnterminatedString, Position::null());

        let rendered = super::format_error(&error, "", "shell");
        assert_eq!(rendered.lines().count(), 2);
    }
}
