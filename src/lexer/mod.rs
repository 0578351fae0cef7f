//! Lexical analysis for Bolt source text.
//!
//! The lexer converts a source string into tokens on demand. It handles:
//!
//! - Keywords and identifiers (looked up in a shared reserved-word table)
//! - Integer literals
//! - One and two character operators and delimiters
//! - Whitespace, which is skipped
//! - Unrecognised characters, which become `Illegal` tokens instead of errors

pub mod lexer;
pub mod tokens;
