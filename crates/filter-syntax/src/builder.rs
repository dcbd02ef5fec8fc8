//! Constructor helpers for assembling filter trees in code.

use crate::ast::{
    expr::Expression,
    filter::Filter,
    literal::Literal,
    operator::{ComparisonOperator, DistanceOperator, SpatialOperator, TemporalOperator},
    path::PropertyPath,
    temporal::Period,
};
use chrono::{DateTime, Utc};
use geo_types::{Geometry, Rect, coord};

pub fn property(path: &str) -> Expression {
    Expression::PropertyName(PropertyPath::from(path))
}

pub fn literal(value: impl Into<Literal>) -> Expression {
    Expression::Literal(value.into())
}

pub fn geometry(value: impl Into<Geometry<f64>>) -> Expression {
    Expression::Literal(Literal::Geometry(value.into()))
}

pub fn instant(value: DateTime<Utc>) -> Expression {
    Expression::Literal(Literal::Instant(value))
}

pub fn period(value: Period) -> Expression {
    Expression::Literal(Literal::Period(value))
}

pub fn and(children: Vec<Filter>) -> Filter {
    Filter::And(children)
}

pub fn or(children: Vec<Filter>) -> Filter {
    Filter::Or(children)
}

pub fn not(child: Filter) -> Filter {
    Filter::Not(Box::new(child))
}

pub fn ids<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Filter {
    Filter::Id(values.into_iter().map(Into::into).collect())
}

pub fn is_null(expression: Expression) -> Filter {
    Filter::PropertyIsNull(expression)
}

pub fn compare(op: ComparisonOperator, left: Expression, right: Expression) -> Filter {
    Filter::Comparison {
        op,
        left,
        right,
        match_case: true,
    }
}

pub fn equal_to(left: Expression, right: Expression) -> Filter {
    compare(ComparisonOperator::EqualTo, left, right)
}

pub fn not_equal_to(left: Expression, right: Expression) -> Filter {
    compare(ComparisonOperator::NotEqualTo, left, right)
}

pub fn greater_than(left: Expression, right: Expression) -> Filter {
    compare(ComparisonOperator::GreaterThan, left, right)
}

pub fn greater_or_equal(left: Expression, right: Expression) -> Filter {
    compare(ComparisonOperator::GreaterThanOrEqualTo, left, right)
}

pub fn less_than(left: Expression, right: Expression) -> Filter {
    compare(ComparisonOperator::LessThan, left, right)
}

pub fn less_or_equal(left: Expression, right: Expression) -> Filter {
    compare(ComparisonOperator::LessThanOrEqualTo, left, right)
}

pub fn between(expression: Expression, lower: Expression, upper: Expression) -> Filter {
    Filter::Between {
        expression,
        lower,
        upper,
    }
}

/// `LIKE` with the conventional `*` / `.` / `!` wildcard characters.
pub fn like(expression: Expression, pattern: &str) -> Filter {
    Filter::Like {
        expression,
        pattern: pattern.to_string(),
        wildcard: '*',
        single_char: '.',
        escape: '!',
        match_case: true,
    }
}

pub fn bbox(expression: Expression, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Filter {
    Filter::BBox {
        expression,
        envelope: Rect::new(coord! { x: min_x, y: min_y }, coord! { x: max_x, y: max_y }),
    }
}

pub fn spatial(op: SpatialOperator, left: Expression, right: Expression) -> Filter {
    Filter::Spatial { op, left, right }
}

pub fn intersects(left: Expression, right: Expression) -> Filter {
    spatial(SpatialOperator::Intersects, left, right)
}

pub fn disjoint(left: Expression, right: Expression) -> Filter {
    spatial(SpatialOperator::Disjoint, left, right)
}

pub fn dwithin(left: Expression, right: Expression, distance: f64, units: &str) -> Filter {
    Filter::Distance {
        op: DistanceOperator::DWithin,
        left,
        right,
        distance,
        units: units.to_string(),
    }
}

pub fn beyond(left: Expression, right: Expression, distance: f64, units: &str) -> Filter {
    Filter::Distance {
        op: DistanceOperator::Beyond,
        left,
        right,
        distance,
        units: units.to_string(),
    }
}

pub fn temporal(op: TemporalOperator, left: Expression, right: Expression) -> Filter {
    Filter::Temporal { op, left, right }
}
