//! Resolution of filter operands into a schema-aware field and a literal.

use crate::error::CompileError;
use filter_syntax::ast::{expr::Expression, literal::Literal, path::PropertyPath};
use model::core::{attribute::AttributeMetadata, data_type::GeometryKind, schema::AttributeSchema};

/// A property operand resolved against the schema.
#[derive(Debug, Clone)]
pub struct FieldRef<'a> {
    pub path: &'a PropertyPath,
    pub attribute: Option<&'a AttributeMetadata>,
}

impl<'a> FieldRef<'a> {
    pub fn resolve<S: AttributeSchema + ?Sized>(path: &'a PropertyPath, schema: &'a S) -> Self {
        let attribute = schema.attribute(&path.as_string());
        Self { path, attribute }
    }

    /// Name written into the compiled query.
    pub fn encoded_name(&self) -> String {
        match self.attribute {
            Some(attribute) => attribute.encoded_name().to_string(),
            None => self.path.as_string(),
        }
    }

    pub fn label(&self) -> String {
        self.path.as_string()
    }

    pub fn geometry_kind(&self) -> GeometryKind {
        self.attribute
            .map(|a| a.geometry_kind)
            .unwrap_or(GeometryKind::None)
    }

    pub fn is_analyzed(&self) -> bool {
        self.attribute.is_some_and(|a| a.analyzed)
    }
}

/// Property and literal of a binary predicate. `swapped` is set when the
/// literal came first.
#[derive(Debug, Clone)]
pub struct BinaryOperands<'a> {
    pub field: FieldRef<'a>,
    pub literal: &'a Literal,
    pub swapped: bool,
}

pub fn binary_operands<'a, S: AttributeSchema + ?Sized>(
    operator: &str,
    left: &'a Expression,
    right: &'a Expression,
    schema: &'a S,
) -> Result<BinaryOperands<'a>, CompileError> {
    check_operand(operator, left)?;
    check_operand(operator, right)?;

    match (left, right) {
        (Expression::PropertyName(path), Expression::Literal(literal)) => Ok(BinaryOperands {
            field: FieldRef::resolve(path, schema),
            literal,
            swapped: false,
        }),
        (Expression::Literal(literal), Expression::PropertyName(path)) => Ok(BinaryOperands {
            field: FieldRef::resolve(path, schema),
            literal,
            swapped: true,
        }),
        (Expression::PropertyName(_), Expression::PropertyName(_)) => Err(CompileError::unsupported(
            format!("{operator} between two properties"),
        )),
        _ => Err(CompileError::unsupported(format!(
            "{operator} between two literals"
        ))),
    }
}

/// The single property operand of a unary predicate (null checks, like, between).
pub fn property_operand<'a, S: AttributeSchema + ?Sized>(
    operator: &str,
    expression: &'a Expression,
    schema: &'a S,
) -> Result<FieldRef<'a>, CompileError> {
    check_operand(operator, expression)?;
    match expression {
        Expression::PropertyName(path) => Ok(FieldRef::resolve(path, schema)),
        other => Err(CompileError::unsupported(format!(
            "{operator} on a {} operand",
            other.describe()
        ))),
    }
}

pub fn literal_operand<'a>(
    operator: &str,
    expression: &'a Expression,
) -> Result<&'a Literal, CompileError> {
    check_operand(operator, expression)?;
    match expression {
        Expression::Literal(literal) => Ok(literal),
        other => Err(CompileError::unsupported(format!(
            "{operator} bound must be a literal, found a {}",
            other.describe()
        ))),
    }
}

fn check_operand(operator: &str, expression: &Expression) -> Result<(), CompileError> {
    match expression {
        Expression::PropertyName(_) | Expression::Literal(_) => Ok(()),
        Expression::Nil => Err(CompileError::precondition(format!(
            "{operator} is missing an operand"
        ))),
        Expression::Arithmetic { op, .. } => Err(CompileError::unsupported(format!(
            "arithmetic expression ({op}) as {operator} operand"
        ))),
        Expression::Function { name, .. } => Err(CompileError::unsupported(format!(
            "function call {name}() as {operator} operand"
        ))),
    }
}
