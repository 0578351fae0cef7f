#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;

extern crate regex;

/// Byte offset into a source, tagged with the name of that source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing a byte offset.
///
/// Returns the 1-based line number, the line text (including its newline)
/// and the offset of `position` within that line. Offsets past the end of
/// the source resolve to the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = "";

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        last_line = line;
        start = end;
        line_number += 1;
    }

    if last_line.is_empty() {
        return (1, String::new(), 0);
    }

    let line_number = line_number - 1;
    let line = last_line.trim_end_matches('\n').to_string();
    let line_pos = line.len();
    (line_number, line, line_pos)
}

/// Renders a diagnostic against the source it was produced from.
///
/// ```text
/// Error: UnexpectedToken: expected next token to be ASSIGN, got INT instead
/// -> shell
///   |
/// 1 | let x 5;
///   | ------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let mut out = String::new();

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    // Writing into a String cannot fail.
    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}: {}", error.get_error_name(), error);
    } else {
        let _ = writeln!(
            out,
            "Error: {}: {} ({})",
            error.get_error_name(),
            error,
            error.get_tip()
        );
    }
    let _ = writeln!(out, "-> {}", position.1);
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    let _ = write!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        lexer::tokens::TokenKind,
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nfoo\nbar\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 30);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_past_end_of_source() {
        let (line_number, line, line_pos) = super::get_line_at_position("let x", 5);
        assert_eq!(line_number, 1);
        assert_eq!(line, "let x");
        assert_eq!(line_pos, 5);

        let (line_number, line, line_pos) = super::get_line_at_position("", 0);
        assert_eq!(line_number, 1);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);
    }

    #[test]
    fn test_render_error_points_at_column() {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Assign,
                received: TokenKind::Int,
            },
            Position(6, Rc::new("shell".to_string())),
        );

        let rendered = super::render_error(&error, "let x 5;");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "Error: UnexpectedToken: expected next token to be ASSIGN, got INT instead"
        );
        assert_eq!(lines[1], "-> shell");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "1 | let x 5;");
        assert_eq!(lines[4], "  | ------^");
    }
}
