use crate::ast::{literal::Literal, operator::ArithmeticOperator, path::PropertyPath};
use std::fmt;

/// Value-producing expression nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    PropertyName(PropertyPath),
    Literal(Literal),
    Arithmetic {
        op: ArithmeticOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Function {
        name: String,
        arguments: Vec<Expression>,
    },
    /// An absent expression (e.g., a null operand handed over by a caller).
    Nil,
}

impl Expression {
    pub fn as_property(&self) -> Option<&PropertyPath> {
        match self {
            Expression::PropertyName(path) => Some(path),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Expression::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Expression::PropertyName(_) => "property",
            Expression::Literal(_) => "literal",
            Expression::Arithmetic { .. } => "arithmetic expression",
            Expression::Function { .. } => "function call",
            Expression::Nil => "nil",
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::PropertyName(path) => write!(f, "{path}"),
            Expression::Literal(lit) => write!(f, "{lit}"),
            Expression::Arithmetic { op, left, right } => write!(f, "({left} {op} {right})"),
            Expression::Function { name, arguments } => {
                let args = arguments
                    .iter()
                    .map(|a| a.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{name}({args})")
            }
            Expression::Nil => write!(f, "NIL"),
        }
    }
}
