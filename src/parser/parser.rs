//! Parser state and the program-level parsing loop.
//!
//! The parser pulls tokens from a [`Lexer`] one at a time and always holds
//! exactly two of them: the current token and a single lookahead ("peek")
//! token. Statement and expression rules live in `stmt` and `expr`; they are
//! reached through the lookup tables registered in `lookups`.
//!
//! Diagnostics never stop parsing. A rule that fails returns an error, the
//! statement dispatcher records it and drops that statement, and the loop
//! in [`Parser::parse_program`] moves on to the next token.

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        binding_power, create_token_lookups, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// How the values of `let` and `return` statements are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValuePolicy {
    /// Discard every token up to the terminating semicolon (or end of
    /// input). The statement's value is left empty.
    #[default]
    Skip,
    /// Parse the value as an expression and store it on the statement.
    Parse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserOptions {
    pub value_policy: ValuePolicy,
}

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, pulled only when the cursor advances
    lexer: Lexer,
    current_token: Token,
    peek_token: Token,
    /// Diagnostics in the order they were raised
    errors: Vec<Error>,
    options: ParserOptions,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Parser::with_options(lexer, ParserOptions::default())
    }

    pub fn with_options(mut lexer: Lexer, options: ParserOptions) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current_token,
            peek_token,
            errors: vec![],
            options,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Parses statements until the end of input.
    ///
    /// Statements that fail to parse are left out; their diagnostics are
    /// available from [`Parser::errors`] afterwards.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_token_is(TokenKind::EOF) {
            if let Some(statement) = parse_stmt(self) {
                program.statements.push(statement);
            }
            self.advance();
        }

        program
    }

    /// Every diagnostic message recorded so far, in order.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    pub fn record_error(&mut self, error: Error) {
        self.errors.push(error);
    }

    pub fn get_options(&self) -> ParserOptions {
        self.options
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.is(kind)
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    /// Shifts the lookahead into the current slot and pulls the next token.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = std::mem::replace(&mut self.peek_token, next);
    }

    /// Advances onto the peek token if it is of the expected kind.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.peek_token_is(expected_kind) {
            self.advance();
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    received: self.peek_token_kind(),
                },
                self.peek_token.span.start.clone(),
            ))
        }
    }

    /// Moves the cursor onto the next semicolon, or the end of input.
    pub fn skip_statement(&mut self) {
        while !self.current_token_is(TokenKind::Semicolon) && !self.current_token_is(TokenKind::EOF)
        {
            self.advance();
        }
    }

    pub fn current_binding_power(&self) -> BindingPower {
        binding_power(self.current_token_kind())
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        binding_power(self.peek_token_kind())
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, led_fn: LEDHandler) {
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the position of the current token in the source.
    pub fn get_position(&self) -> Position {
        self.current_token.span.start.clone()
    }
}

/// Parses a source string with default options.
///
/// Returns the parser alongside the program so the caller can inspect
/// [`Parser::errors`].
pub fn parse(source: String, file: Option<String>) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (parser, program)
}
