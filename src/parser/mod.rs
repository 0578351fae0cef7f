//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the lexer's token stream
//! into a [`Program`](crate::ast::ast::Program). It uses a Pratt parser for
//! expressions and handles:
//!
//! - Statement parsing (`let`, `return` and expression statements)
//! - Expression parsing (identifiers, integers, prefix and infix operators)
//! - Error recovery: diagnostics are collected and parsing carries on
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing, with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
