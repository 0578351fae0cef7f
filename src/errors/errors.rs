use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq)]
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

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixRule { .. } => "NoPrefixRule",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken {
                received: TokenKind::EOF,
                ..
            } => ErrorTip::Suggestion(String::from("the input ended in the middle of a statement")),
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::NoPrefixRule {
                kind: TokenKind::Illegal,
                token,
            } => ErrorTip::Suggestion(format!("unrecognised character `{}`", token)),
            ErrorImpl::NoPrefixRule {
                kind: TokenKind::EOF,
                ..
            } => ErrorTip::Suggestion(String::from("expected an expression before the end of input")),
            ErrorImpl::NoPrefixRule { .. } => ErrorTip::None,
            ErrorImpl::IntegerParseError { .. } => {
                ErrorTip::Suggestion(String::from("is it above the integer limit?"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

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
    #[error("expected next token to be {expected}, got {received} instead")]
    UnexpectedToken {
        expected: TokenKind,
        received: TokenKind,
    },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixRule { kind: TokenKind, token: String },
    #[error("could not parse {token:?} as integer")]
    IntegerParseError { token: String },
}
