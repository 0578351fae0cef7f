//! Diagnostics produced while lexing and parsing.
//!
//! Every diagnostic carries the source position it was raised at, a
//! human-readable message and, where one exists, a suggestion for the user.
//! Diagnostics are collected by the parser rather than raised.

pub mod errors;
