//! Unit tests for AST rendering.

use std::rc::Rc;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    ast::{Expression, Node, Program, Statement},
    expressions::{Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    statements::{ExpressionStatement, LetStatement, ReturnStatement},
};

fn span() -> Span {
    let file = Rc::new("test.bolt".to_string());
    Span {
        start: Position(0, Rc::clone(&file)),
        end: Position(0, file),
    }
}

fn token(kind: TokenKind, value: &str) -> Token {
    Token {
        kind,
        value: value.to_string(),
        span: span(),
    }
}

fn ident(name: &str) -> Identifier {
    Identifier {
        token: token(TokenKind::Ident, name),
        value: name.to_string(),
    }
}

fn int(value: i64) -> Expression {
    Expression::Integer(IntegerLiteral {
        token: token(TokenKind::Int, &value.to_string()),
        value,
    })
}

#[test]
fn test_let_statement_rendering() {
    let program = Program {
        statements: vec![Statement::Let(LetStatement {
            token: token(TokenKind::Let, "let"),
            name: ident("myVar"),
            value: Some(Expression::Identifier(ident("anotherVar"))),
            span: span(),
        })],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_let_statement_without_value() {
    let statement = LetStatement {
        token: token(TokenKind::Let, "let"),
        name: ident("x"),
        value: None,
        span: span(),
    };

    assert_eq!(statement.to_string(), "let x = ;");
}

#[test]
fn test_return_statement_rendering() {
    let with_value = ReturnStatement {
        token: token(TokenKind::Return, "return"),
        return_value: Some(int(5)),
        span: span(),
    };
    let without_value = ReturnStatement {
        token: token(TokenKind::Return, "return"),
        return_value: None,
        span: span(),
    };

    assert_eq!(with_value.to_string(), "return 5;");
    assert_eq!(without_value.to_string(), "return ;");
}

#[test]
fn test_nested_expression_rendering() {
    // -a * (b + 10)
    let product = Expression::Infix(InfixExpression {
        token: token(TokenKind::Asterisk, "*"),
        operator: "*".to_string(),
        left: Box::new(Expression::Prefix(PrefixExpression {
            token: token(TokenKind::Minus, "-"),
            operator: "-".to_string(),
            right: Box::new(Expression::Identifier(ident("a"))),
            span: span(),
        })),
        right: Box::new(Expression::Infix(InfixExpression {
            token: token(TokenKind::Plus, "+"),
            operator: "+".to_string(),
            left: Box::new(Expression::Identifier(ident("b"))),
            right: Box::new(int(10)),
            span: span(),
        })),
        span: span(),
    });

    assert_eq!(product.to_string(), "((-a) * (b + 10))");
    assert_eq!(product.token_literal(), "*");
}

#[test]
fn test_program_concatenates_statements() {
    let program = Program {
        statements: vec![
            Statement::Expression(ExpressionStatement {
                token: token(TokenKind::Ident, "a"),
                expression: Expression::Identifier(ident("a")),
                span: span(),
            }),
            Statement::Return(ReturnStatement {
                token: token(TokenKind::Return, "return"),
                return_value: Some(int(1)),
                span: span(),
            }),
        ],
    };

    assert_eq!(program.len(), 2);
    assert_eq!(program.to_string(), "areturn 1;");
}

#[test]
fn test_empty_program() {
    let program = Program::new();

    assert!(program.is_empty());
    assert_eq!(program.token_literal(), "");
    assert_eq!(program.to_string(), "");
}
