use std::fmt::{Display, Formatter, Result};

use crate::Span;

use super::{
    expressions::{Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    statements::{ExpressionStatement, LetStatement, ReturnStatement},
};

/// Behaviour shared by every node in the tree.
///
/// `Display` is the rendering contract: expressions render fully
/// parenthesised so that precedence is visible in the output.
pub trait Node: Display {
    /// Literal text of the token the node was built from.
    fn token_literal(&self) -> &str;
}

/// Root of every parsed tree. Statements are kept in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program { statements: vec![] }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(statement) => statement.token_literal(),
            None => "",
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Statement {
    pub fn get_span(&self) -> &Span {
        match self {
            Statement::Let(statement) => &statement.span,
            Statement::Return(statement) => &statement.span,
            Statement::Expression(statement) => &statement.span,
        }
    }
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(statement) => statement.token_literal(),
            Statement::Return(statement) => statement.token_literal(),
            Statement::Expression(statement) => statement.token_literal(),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Statement::Let(statement) => statement.fmt(f),
            Statement::Return(statement) => statement.fmt(f),
            Statement::Expression(statement) => statement.fmt(f),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
}

impl Expression {
    pub fn get_span(&self) -> &Span {
        match self {
            Expression::Identifier(expression) => &expression.token.span,
            Expression::Integer(expression) => &expression.token.span,
            Expression::Prefix(expression) => &expression.span,
            Expression::Infix(expression) => &expression.span,
        }
    }
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(expression) => expression.token_literal(),
            Expression::Integer(expression) => expression.token_literal(),
            Expression::Prefix(expression) => expression.token_literal(),
            Expression::Infix(expression) => expression.token_literal(),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expression::Identifier(expression) => expression.fmt(f),
            Expression::Integer(expression) => expression.fmt(f),
            Expression::Prefix(expression) => expression.fmt(f),
            Expression::Infix(expression) => expression.fmt(f),
        }
    }
}
