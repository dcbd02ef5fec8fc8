//! Defines the compiled query tree handed to a backend renderer.

use crate::query::ast::shape::{DistanceUnit, GeoPoint, Shape, ShapeRelation};
use model::core::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryNode {
    MatchAll,
    Not(Box<QueryNode>),
    And(Vec<QueryNode>),
    Or(Vec<QueryNode>),
    Ids(Vec<String>),
    /// Field has no value.
    Missing {
        field: String,
    },
    Exists {
        field: String,
    },
    Term {
        field: String,
        value: Value,
    },
    Range {
        field: String,
        gt: Option<Value>,
        gte: Option<Value>,
        lt: Option<Value>,
        lte: Option<Value>,
    },
    /// Full-text query in query-string syntax (`*`, `?`, backslash escapes).
    QueryString {
        query: String,
        default_field: String,
    },
    /// Anchored regular expression over the whole field value.
    Regexp {
        field: String,
        pattern: String,
    },
    GeoShape {
        field: String,
        shape: Shape,
        relation: ShapeRelation,
    },
    GeoBoundingBox {
        field: String,
        top_left: GeoPoint,
        bottom_right: GeoPoint,
    },
    GeoPolygon {
        field: String,
        points: Vec<GeoPoint>,
    },
    GeoDistance {
        field: String,
        point: GeoPoint,
        distance: f64,
        unit: DistanceUnit,
    },
    Nested {
        path: String,
        query: Box<QueryNode>,
    },
    /// Opaque backend-native fragment, passed through verbatim.
    Wrapper(String),
}

impl QueryNode {
    /// `Not(MatchAll)`: matches nothing.
    pub fn match_none() -> Self {
        QueryNode::Not(Box::new(QueryNode::MatchAll))
    }

    pub fn not(node: QueryNode) -> Self {
        QueryNode::Not(Box::new(node))
    }

    pub fn nested(path: &str, node: QueryNode) -> Self {
        QueryNode::Nested {
            path: path.to_string(),
            query: Box::new(node),
        }
    }

    pub fn term(field: &str, value: Value) -> Self {
        QueryNode::Term {
            field: field.to_string(),
            value,
        }
    }

    /// Range with no bounds set; fill in via [`QueryNode::with_bound`].
    pub fn range(field: &str) -> Self {
        QueryNode::Range {
            field: field.to_string(),
            gt: None,
            gte: None,
            lt: None,
            lte: None,
        }
    }

    /// Sets one bound on a `Range` node; no effect on other variants.
    pub fn with_bound(mut self, bound: RangeBound, value: Value) -> Self {
        if let QueryNode::Range {
            gt, gte, lt, lte, ..
        } = &mut self
        {
            let slot = match bound {
                RangeBound::Gt => gt,
                RangeBound::Gte => gte,
                RangeBound::Lt => lt,
                RangeBound::Lte => lte,
            };
            *slot = Some(value);
        }
        self
    }

    pub fn is_match_all(&self) -> bool {
        matches!(self, QueryNode::MatchAll)
    }

    /// Field a leaf node targets, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            QueryNode::Missing { field }
            | QueryNode::Exists { field }
            | QueryNode::Term { field, .. }
            | QueryNode::Range { field, .. }
            | QueryNode::Regexp { field, .. }
            | QueryNode::GeoShape { field, .. }
            | QueryNode::GeoBoundingBox { field, .. }
            | QueryNode::GeoPolygon { field, .. }
            | QueryNode::GeoDistance { field, .. } => Some(field),
            QueryNode::QueryString { default_field, .. } => Some(default_field),
            QueryNode::Nested { query, .. } => query.field(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    Gt,
    Gte,
    Lt,
    Lte,
}
