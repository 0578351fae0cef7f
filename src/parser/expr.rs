use std::num::ParseIntError;

use crate::{
    ast::{
        ast::Expression,
        expressions::{Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses an expression starting at the current token.
///
/// Operators on the right keep being folded into the expression for as long
/// as they bind tighter than `bp`. On return the cursor sits on the last
/// token of the expression.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(no_prefix_rule(parser));
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than bp, continue parsing lhs
    while !parser.peek_token_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let Some(led) = parser.get_led_lookup().get(&parser.peek_token_kind()).copied() else {
            return Ok(left);
        };

        parser.advance();
        let operator_bp = parser.current_binding_power();
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Int => match parse_integer(&token.value) {
            Ok(value) => Ok(Expression::Integer(IntegerLiteral { token, value })),
            Err(_) => Err(Error::new(
                ErrorImpl::IntegerParseError {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            )),
        },
        TokenKind::Ident => Ok(Expression::Identifier(Identifier {
            value: token.value.clone(),
            token,
        })),
        _ => Err(no_prefix_rule(parser)),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expression::Prefix(PrefixExpression {
        span: Span {
            start: operator_token.span.start.clone(),
            end: right.get_span().end.clone(),
        },
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

/// `( expr )`. The parentheses only group; no node is created for them.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::RParen)?;

    Ok(expr)
}

pub fn parse_infix_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Result<Expression, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expression::Infix(InfixExpression {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

/// Integer literal value. A leading `0` on a multi-digit literal marks it as octal.
fn parse_integer(literal: &str) -> Result<i64, ParseIntError> {
    match literal.strip_prefix('0') {
        Some(digits) if !digits.is_empty() => i64::from_str_radix(digits, 8),
        _ => literal.parse::<i64>(),
    }
}

fn no_prefix_rule(parser: &Parser) -> Error {
    Error::new(
        ErrorImpl::NoPrefixRule {
            kind: parser.current_token_kind(),
            token: parser.current_token().value.clone(),
        },
        parser.get_position(),
    )
}
