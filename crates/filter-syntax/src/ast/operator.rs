use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    EqualTo,
    NotEqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
}

impl ComparisonOperator {
    /// The operator that holds when the operands are swapped (`a > b` ⇔ `b < a`).
    pub fn inverse(self) -> Self {
        match self {
            ComparisonOperator::GreaterThan => ComparisonOperator::LessThan,
            ComparisonOperator::GreaterThanOrEqualTo => ComparisonOperator::LessThanOrEqualTo,
            ComparisonOperator::LessThan => ComparisonOperator::GreaterThan,
            ComparisonOperator::LessThanOrEqualTo => ComparisonOperator::GreaterThanOrEqualTo,
            symmetric => symmetric,
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonOperator::EqualTo => write!(f, "="),
            ComparisonOperator::NotEqualTo => write!(f, "<>"),
            ComparisonOperator::GreaterThan => write!(f, ">"),
            ComparisonOperator::GreaterThanOrEqualTo => write!(f, ">="),
            ComparisonOperator::LessThan => write!(f, "<"),
            ComparisonOperator::LessThanOrEqualTo => write!(f, "<="),
        }
    }
}

/// Binary spatial relations between two geometry-bearing expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpatialOperator {
    Intersects,
    Disjoint,
    Within,
    Contains,
    Crosses,
    Equals,
    Overlaps,
    Touches,
}

impl fmt::Display for SpatialOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpatialOperator::Intersects => "INTERSECTS",
            SpatialOperator::Disjoint => "DISJOINT",
            SpatialOperator::Within => "WITHIN",
            SpatialOperator::Contains => "CONTAINS",
            SpatialOperator::Crosses => "CROSSES",
            SpatialOperator::Equals => "EQUALS",
            SpatialOperator::Overlaps => "OVERLAPS",
            SpatialOperator::Touches => "TOUCHES",
        };
        write!(f, "{name}")
    }
}

/// Distance-buffer spatial operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceOperator {
    DWithin,
    Beyond,
}

impl fmt::Display for DistanceOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceOperator::DWithin => write!(f, "DWITHIN"),
            DistanceOperator::Beyond => write!(f, "BEYOND"),
        }
    }
}

/// Binary temporal operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemporalOperator {
    After,
    Before,
    Begins,
    BegunBy,
    Ends,
    EndedBy,
    During,
    TContains,
    TEquals,
    AnyInteracts,
    Meets,
    MetBy,
    OverlappedBy,
    TOverlaps,
}

impl fmt::Display for TemporalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemporalOperator::After => "After",
            TemporalOperator::Before => "Before",
            TemporalOperator::Begins => "Begins",
            TemporalOperator::BegunBy => "BegunBy",
            TemporalOperator::Ends => "Ends",
            TemporalOperator::EndedBy => "EndedBy",
            TemporalOperator::During => "During",
            TemporalOperator::TContains => "TContains",
            TemporalOperator::TEquals => "TEquals",
            TemporalOperator::AnyInteracts => "AnyInteracts",
            TemporalOperator::Meets => "Meets",
            TemporalOperator::MetBy => "MetBy",
            TemporalOperator::OverlappedBy => "OverlappedBy",
            TemporalOperator::TOverlaps => "TOverlaps",
        };
        write!(f, "{name}")
    }
}

/// Arithmetic operators; kept in the AST so they can be rejected explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArithmeticOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticOperator::Add => write!(f, "+"),
            ArithmeticOperator::Subtract => write!(f, "-"),
            ArithmeticOperator::Multiply => write!(f, "*"),
            ArithmeticOperator::Divide => write!(f, "/"),
        }
    }
}
