use crate::ast::{
    expr::Expression,
    kind::FilterKind,
    operator::{ComparisonOperator, DistanceOperator, SpatialOperator, TemporalOperator},
};
use geo_types::Rect;
use std::fmt;

/// Boolean predicate over a feature.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Matches everything.
    Include,
    /// Matches nothing.
    Exclude,
    Id(Vec<String>),
    And(Vec<Filter>),
    Or(Vec<Filter>),
    Not(Box<Filter>),
    PropertyIsNull(Expression),
    PropertyIsNil(Expression),
    Comparison {
        op: ComparisonOperator,
        left: Expression,
        right: Expression,
        match_case: bool,
    },
    Between {
        expression: Expression,
        lower: Expression,
        upper: Expression,
    },
    Like {
        expression: Expression,
        pattern: String,
        wildcard: char,
        single_char: char,
        escape: char,
        match_case: bool,
    },
    BBox {
        expression: Expression,
        envelope: Rect<f64>,
    },
    Spatial {
        op: SpatialOperator,
        left: Expression,
        right: Expression,
    },
    Distance {
        op: DistanceOperator,
        left: Expression,
        right: Expression,
        distance: f64,
        units: String,
    },
    Temporal {
        op: TemporalOperator,
        left: Expression,
        right: Expression,
    },
}

impl Filter {
    pub fn kind(&self) -> FilterKind {
        match self {
            Filter::Include => FilterKind::Include,
            Filter::Exclude => FilterKind::Exclude,
            Filter::Id(_) => FilterKind::Id,
            Filter::And(_) => FilterKind::And,
            Filter::Or(_) => FilterKind::Or,
            Filter::Not(_) => FilterKind::Not,
            Filter::PropertyIsNull(_) => FilterKind::PropertyIsNull,
            Filter::PropertyIsNil(_) => FilterKind::PropertyIsNil,
            Filter::Comparison { op, .. } => match op {
                ComparisonOperator::EqualTo => FilterKind::EqualTo,
                ComparisonOperator::NotEqualTo => FilterKind::NotEqualTo,
                ComparisonOperator::GreaterThan => FilterKind::GreaterThan,
                ComparisonOperator::GreaterThanOrEqualTo => FilterKind::GreaterThanOrEqualTo,
                ComparisonOperator::LessThan => FilterKind::LessThan,
                ComparisonOperator::LessThanOrEqualTo => FilterKind::LessThanOrEqualTo,
            },
            Filter::Between { .. } => FilterKind::Between,
            Filter::Like { .. } => FilterKind::Like,
            Filter::BBox { .. } => FilterKind::BBox,
            Filter::Spatial { op, .. } => match op {
                SpatialOperator::Intersects => FilterKind::Intersects,
                SpatialOperator::Disjoint => FilterKind::Disjoint,
                SpatialOperator::Within => FilterKind::Within,
                SpatialOperator::Contains => FilterKind::Contains,
                SpatialOperator::Crosses => FilterKind::Crosses,
                SpatialOperator::Equals => FilterKind::Equals,
                SpatialOperator::Overlaps => FilterKind::Overlaps,
                SpatialOperator::Touches => FilterKind::Touches,
            },
            Filter::Distance { op, .. } => match op {
                DistanceOperator::DWithin => FilterKind::DWithin,
                DistanceOperator::Beyond => FilterKind::Beyond,
            },
            Filter::Temporal { op, .. } => match op {
                TemporalOperator::After => FilterKind::After,
                TemporalOperator::Before => FilterKind::Before,
                TemporalOperator::Begins => FilterKind::Begins,
                TemporalOperator::BegunBy => FilterKind::BegunBy,
                TemporalOperator::Ends => FilterKind::Ends,
                TemporalOperator::EndedBy => FilterKind::EndedBy,
                TemporalOperator::During => FilterKind::During,
                TemporalOperator::TContains => FilterKind::TContains,
                TemporalOperator::TEquals => FilterKind::TEquals,
                TemporalOperator::AnyInteracts => FilterKind::AnyInteracts,
                TemporalOperator::Meets => FilterKind::Meets,
                TemporalOperator::MetBy => FilterKind::MetBy,
                TemporalOperator::OverlappedBy => FilterKind::OverlappedBy,
                TemporalOperator::TOverlaps => FilterKind::TOverlaps,
            },
        }
    }

    /// Direct child filters of a logical combinator.
    pub fn children(&self) -> Vec<&Filter> {
        match self {
            Filter::And(children) | Filter::Or(children) => children.iter().collect(),
            Filter::Not(child) => vec![child.as_ref()],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Include => write!(f, "INCLUDE"),
            Filter::Exclude => write!(f, "EXCLUDE"),
            Filter::Id(ids) => write!(f, "IN ({})", ids.join(", ")),
            Filter::And(children) | Filter::Or(children) => {
                let sep = if matches!(self, Filter::And(_)) {
                    " AND "
                } else {
                    " OR "
                };
                let parts = children
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(sep);
                write!(f, "({parts})")
            }
            Filter::Not(child) => write!(f, "NOT ({child})"),
            Filter::PropertyIsNull(expr) => write!(f, "{expr} IS NULL"),
            Filter::PropertyIsNil(expr) => write!(f, "{expr} IS NIL"),
            Filter::Comparison {
                op, left, right, ..
            } => write!(f, "{left} {op} {right}"),
            Filter::Between {
                expression,
                lower,
                upper,
            } => write!(f, "{expression} BETWEEN {lower} AND {upper}"),
            Filter::Like {
                expression,
                pattern,
                ..
            } => write!(f, "{expression} LIKE '{pattern}'"),
            Filter::BBox {
                expression,
                envelope,
            } => write!(
                f,
                "BBOX({expression}, {}, {}, {}, {})",
                envelope.min().x,
                envelope.min().y,
                envelope.max().x,
                envelope.max().y
            ),
            Filter::Spatial { op, left, right } => write!(f, "{op}({left}, {right})"),
            Filter::Distance {
                op,
                left,
                right,
                distance,
                units,
            } => write!(f, "{op}({left}, {right}, {distance}, {units})"),
            Filter::Temporal { op, left, right } => write!(f, "{left} {op} {right}"),
        }
    }
}
