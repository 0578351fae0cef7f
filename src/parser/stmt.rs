use crate::{
    ast::{
        ast::{Expression, Statement},
        expressions::Identifier,
        statements::{ExpressionStatement, LetStatement, ReturnStatement},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::{Parser, ValuePolicy};

/// Parses the statement starting at the current token.
///
/// A failed statement is recorded as a diagnostic and yields `None`.
pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    let handler = match parser.get_stmt_lookup().get(&parser.current_token_kind()) {
        Some(handler) => *handler,
        None => parse_expression_stmt,
    };

    match handler(parser) {
        Ok(statement) => Some(statement),
        Err(error) => {
            parser.record_error(error);
            None
        }
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    parser
        .expect_peek(TokenKind::Ident)
        .map_err(|error| skip_failed(parser, error))?;

    let name = Identifier {
        token: parser.current_token().clone(),
        value: parser.current_token().value.clone(),
    };

    parser
        .expect_peek(TokenKind::Assign)
        .map_err(|error| skip_failed(parser, error))?;

    let value = parse_value(parser)?;

    Ok(Statement::Let(LetStatement {
        span: Span {
            start: token.span.start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        token,
        name,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    let return_value = if parser.get_options().value_policy == ValuePolicy::Parse
        && (parser.peek_token_is(TokenKind::Semicolon) || parser.peek_token_is(TokenKind::EOF))
    {
        if parser.peek_token_is(TokenKind::Semicolon) {
            parser.advance();
        }
        None
    } else {
        parse_value(parser)?
    };

    Ok(Statement::Return(ReturnStatement {
        span: Span {
            start: token.span.start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        token,
        return_value,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();
    let expression =
        parse_expr(parser, BindingPower::Lowest).map_err(|error| close_failed(parser, error))?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Expression(ExpressionStatement {
        span: Span {
            start: token.span.start.clone(),
            end: expression.get_span().end.clone(),
        },
        token,
        expression,
    }))
}

/// Handles the value of a `let` or `return` once the cursor is on the
/// token just before it, according to the parser's value policy.
fn parse_value(parser: &mut Parser) -> Result<Option<Expression>, Error> {
    match parser.get_options().value_policy {
        ValuePolicy::Skip => {
            parser.skip_statement();
            Ok(None)
        }
        ValuePolicy::Parse => {
            parser.advance();
            let value =
                parse_expr(parser, BindingPower::Lowest).map_err(|error| skip_failed(parser, error))?;

            if parser.peek_token_is(TokenKind::Semicolon) {
                parser.advance();
            }

            Ok(Some(value))
        }
    }
}

/// Steps over the `;` right after a failed expression so it is not parsed
/// as a statement of its own.
fn close_failed(parser: &mut Parser, error: Error) -> Error {
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }
    error
}

/// Drops the rest of a failed statement so parsing resumes after it.
fn skip_failed(parser: &mut Parser, error: Error) -> Error {
    parser.skip_statement();
    error
}
