//! Line-at-a-time driver for the lexer and parser.
//!
//! Each input line is lexed and parsed on its own; nothing carries over
//! between lines. The loop ends when the input is exhausted.

use std::{
    io::{self, BufRead, Write},
    time::Instant,
};

use crate::{
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::{Parser, ParserOptions},
    render_error,
};

pub const PROMPT: &str = "⚡️> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplMode {
    /// Print each token of the line.
    Tokens,
    /// Print the parsed program, or its diagnostics.
    #[default]
    Ast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplOptions {
    pub mode: ReplMode,
    pub parser: ParserOptions,
    /// Report lexing/parsing durations on stderr
    pub timings: bool,
}

pub fn start<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    options: ReplOptions,
) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let source = line.trim_end_matches(&['\n', '\r'][..]);
        let start = Instant::now();

        match options.mode {
            ReplMode::Tokens => print_tokens(source, output)?,
            ReplMode::Ast => print_program(source, output, options.parser)?,
        }

        if options.timings {
            eprintln!("Processed in {:?}", start.elapsed());
        }
    }
}

fn print_tokens<W: Write>(source: &str, output: &mut W) -> io::Result<()> {
    let lexer = Lexer::new(source.to_string(), None);

    for token in lexer.take_while(|token| !token.is(TokenKind::EOF)) {
        writeln!(output, "{}", token)?;
    }

    Ok(())
}

fn print_program<W: Write>(source: &str, output: &mut W, options: ParserOptions) -> io::Result<()> {
    let mut parser = Parser::with_options(Lexer::new(source.to_string(), None), options);
    let program = parser.parse_program();

    if !parser.diagnostics().is_empty() {
        for error in parser.diagnostics() {
            writeln!(output, "{}", render_error(error, source))?;
        }
        return Ok(());
    }

    writeln!(output, "{}", program)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::parser::parser::{ParserOptions, ValuePolicy};

    use super::{start, ReplMode, ReplOptions};

    fn run(input: &str, options: ReplOptions) -> String {
        let mut output = Vec::new();
        start(Cursor::new(input), &mut output, options).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_prints_parsed_program_per_line() {
        let output = run("1 + 2 * 3\n-a * b\n", ReplOptions::default());

        assert_eq!(output, "⚡️> (1 + (2 * 3))\n⚡️> ((-a) * b)\n⚡️> ");
    }

    #[test]
    fn test_prints_tokens() {
        let options = ReplOptions {
            mode: ReplMode::Tokens,
            ..ReplOptions::default()
        };
        let output = run("let x;\r\n", options);

        assert_eq!(
            output,
            "⚡️> Token { kind: LET, value: \"let\" }\n\
             Token { kind: IDENT, value: \"x\" }\n\
             Token { kind: SEMICOLON, value: \";\" }\n\
             ⚡️> "
        );
    }

    #[test]
    fn test_prints_diagnostics() {
        let output = run("let x 5;", ReplOptions::default());

        assert_eq!(
            output,
            "⚡️> Error: UnexpectedToken: expected next token to be ASSIGN, got INT instead\n\
             -> shell\n  |\n1 | let x 5;\n  | ------^\n⚡️> "
        );
    }

    #[test]
    fn test_parse_values_option() {
        let options = ReplOptions {
            parser: ParserOptions {
                value_policy: ValuePolicy::Parse,
            },
            ..ReplOptions::default()
        };
        let output = run("let x = 1 + 2;\n", options);

        assert_eq!(output, "⚡️> let x = (1 + 2);\n⚡️> ");
    }

    #[test]
    fn test_exits_on_empty_input() {
        assert_eq!(run("", ReplOptions::default()), "⚡️> ");
    }

    #[test]
    fn test_blank_line_prints_empty_program() {
        assert_eq!(run("\n", ReplOptions::default()), "⚡️> \n⚡️> ");
    }
}
