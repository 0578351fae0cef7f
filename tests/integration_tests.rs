//! Integration tests for the lexer and parser.
//!
//! These tests drive the public API end to end: raw source in, tokens or a
//! rendered syntax tree and diagnostics out.

use bolt::{
    ast::ast::{Node, Statement},
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
    parser::parser::{parse, Parser, ParserOptions, ValuePolicy},
    render_error,
};

#[test]
fn test_tokenize_let_statement() {
    let tokens = tokenize("let five = 5;".to_string(), None);

    let pairs: Vec<(TokenKind, &str)> = tokens
        .iter()
        .map(|token| (token.kind, token.value.as_str()))
        .collect();

    assert_eq!(
        pairs,
        vec![
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "five"),
            (TokenKind::Assign, "="),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::EOF, ""),
        ]
    );
}

#[test]
fn test_lexer_always_terminates_in_eof() {
    let sources = [
        "",
        "let x = 5;",
        "@#$%^&",
        "fn(a, b) { return a != b; }",
        "ünïcödé 42",
        "\t\r\n",
    ];

    for source in sources {
        let mut lexer = Lexer::new(source.to_string(), None);
        let mut steps = 0;
        while lexer.next_token().kind != TokenKind::EOF {
            steps += 1;
            assert!(steps <= source.len(), "lexer did not reach EOF for {:?}", source);
        }
        for _ in 0..3 {
            assert_eq!(lexer.next_token().kind, TokenKind::EOF);
        }
    }
}

#[test]
fn test_parse_program_with_mixed_statements() {
    let source = "let x = 5;\nreturn x;\nx * -y + 2;\n";
    let (parser, program) = parse(source.to_string(), Some("mixed.bolt".to_string()));

    assert!(parser.errors().is_empty());
    assert_eq!(program.len(), 3);
    assert!(matches!(program.statements[0], Statement::Let(_)));
    assert!(matches!(program.statements[1], Statement::Return(_)));
    assert!(matches!(program.statements[2], Statement::Expression(_)));
    assert_eq!(program.token_literal(), "let");
    assert_eq!(program.to_string(), "let x = ;return ;((x * (-y)) + 2)");
}

#[test]
fn test_parse_program_with_values() {
    let source = "let x = 5 * (2 + 1);\nreturn !x == -1;";
    let options = ParserOptions {
        value_policy: ValuePolicy::Parse,
    };
    let mut parser = Parser::with_options(Lexer::new(source.to_string(), None), options);
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(
        program.to_string(),
        "let x = (5 * (2 + 1));return ((!x) == (-1));"
    );
}

#[test]
fn test_diagnostics_render_against_source() {
    let source = "let y = 1;\nlet x 5;";
    let (parser, program) = parse(source.to_string(), Some("bad.bolt".to_string()));

    assert_eq!(program.len(), 1);
    assert_eq!(parser.diagnostics().len(), 1);

    let rendered = render_error(&parser.diagnostics()[0], source);
    assert_eq!(
        rendered,
        "Error: UnexpectedToken: expected next token to be ASSIGN, got INT instead\n\
         -> bad.bolt\n  |\n2 | let x 5;\n  | ------^"
    );
}

#[test]
fn test_illegal_character_diagnostic_names_character() {
    let source = "1 + #";
    let (parser, _) = parse(source.to_string(), None);

    let rendered = render_error(&parser.diagnostics()[0], source);
    assert!(rendered.starts_with(
        "Error: NoPrefixRule: no prefix parse function for ILLEGAL found (unrecognised character `#`)"
    ));
}

#[test]
fn test_render_and_reparse_round_trip() {
    let sources = [
        "a + b * c - d / e",
        "-(a + b) * !c",
        "1 < 2 == 3 > 4 != 5",
        "((x))",
        "-1 - -1",
    ];

    for source in sources {
        let (parser, program) = parse(source.to_string(), None);
        assert!(parser.errors().is_empty(), "{:?}", parser.errors());

        let rendered = program.to_string();
        let (parser, reparsed) = parse(rendered.clone(), None);
        assert!(parser.errors().is_empty(), "{:?}", parser.errors());
        assert_eq!(reparsed.to_string(), rendered);
    }
}
