use std::fmt::{Display, Formatter, Result};

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{Expression, Node},
    expressions::Identifier,
};

/// `let <name> = <value>;`
///
/// `value` stays `None` when the parser skips let values instead of parsing them.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
    pub span: Span,
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {} = ", self.token_literal(), self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub token: Token,
    pub return_value: Option<Expression>,
    pub span: Span,
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ", self.token_literal())?;
        if let Some(value) = &self.return_value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

/// An expression in statement position. The token is the first token of the expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Expression,
    pub span: Span,
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.expression)
    }
}
