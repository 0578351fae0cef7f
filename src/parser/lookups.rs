use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{Expression, Statement},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,        // f(x), no call syntax yet
}

lazy_static! {
    pub static ref BINDING_POWERS: HashMap<TokenKind, BindingPower> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Eq, BindingPower::Equals);
        map.insert(TokenKind::NotEq, BindingPower::Equals);
        map.insert(TokenKind::Lt, BindingPower::LessGreater);
        map.insert(TokenKind::Gt, BindingPower::LessGreater);
        map.insert(TokenKind::Plus, BindingPower::Sum);
        map.insert(TokenKind::Minus, BindingPower::Sum);
        map.insert(TokenKind::Asterisk, BindingPower::Product);
        map.insert(TokenKind::Slash, BindingPower::Product);
        map
    };
}

/// Binding power of a token kind; kinds that are not operators bind lowest.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    BINDING_POWERS
        .get(&kind)
        .copied()
        .unwrap_or(BindingPower::Lowest)
}

pub type StmtHandler = fn(&mut Parser) -> Result<Statement, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expression, Error>;
pub type LEDHandler = fn(&mut Parser, Expression, BindingPower) -> Result<Expression, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality and comparison
    parser.led(TokenKind::Eq, parse_infix_expr);
    parser.led(TokenKind::NotEq, parse_infix_expr);
    parser.led(TokenKind::Lt, parse_infix_expr);
    parser.led(TokenKind::Gt, parse_infix_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, parse_infix_expr);
    parser.led(TokenKind::Minus, parse_infix_expr);
    parser.led(TokenKind::Asterisk, parse_infix_expr);
    parser.led(TokenKind::Slash, parse_infix_expr);

    // Literals and symbols
    parser.nud(TokenKind::Ident, parse_primary_expr);
    parser.nud(TokenKind::Int, parse_primary_expr);
    parser.nud(TokenKind::Bang, parse_prefix_expr);
    parser.nud(TokenKind::Minus, parse_prefix_expr);
    parser.nud(TokenKind::LParen, parse_grouping_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
