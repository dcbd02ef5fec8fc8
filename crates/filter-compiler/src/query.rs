//! Recursive translation of filter trees into compiled query nodes.

use crate::{
    coercion::LiteralCoercer,
    compiler::FilterCompiler,
    error::CompileError,
    geometry::{self, EncodedGeometry},
    like::LikeSyntax,
    nested,
    operand::{self, BinaryOperands, FieldRef},
    temporal::{self, TemporalMatch, TemporalOperand},
};
use compiler_config::settings::{CompilerSettings, LikeStrategy};
use filter_syntax::ast::{
    expr::Expression,
    filter::Filter,
    literal::Literal,
    operator::{ComparisonOperator, DistanceOperator, SpatialOperator, TemporalOperator},
};
use geo_types::Rect;
use model::core::{
    data_type::{DataType, GeometryKind},
    date_format::DateFormat,
    schema::AttributeSchema,
};
use planner::query::ast::{
    node::{QueryNode, RangeBound},
    shape::{DistanceUnit, GeoPoint, Shape, ShapeRelation},
};
use tracing::{debug, trace, warn};

/// Compiles filters into [`QueryNode`] trees against an attribute schema.
///
/// Holds no per-call state, so one instance may compile any number of
/// filters, including concurrently.
pub struct QueryCompiler<'a, S: AttributeSchema + ?Sized> {
    schema: &'a S,
    settings: CompilerSettings,
    coercer: LiteralCoercer,
}

impl<'a, S: AttributeSchema + ?Sized> QueryCompiler<'a, S> {
    pub fn new(schema: &'a S, settings: CompilerSettings) -> Self {
        let default_format = match settings.date.default_format.parse::<DateFormat>() {
            Ok(format) => format,
            Err(err) => {
                warn!(
                    "Unusable default date format '{}', falling back to {}: {err}",
                    settings.date.default_format,
                    DateFormat::default()
                );
                DateFormat::default()
            }
        };

        Self {
            schema,
            settings,
            coercer: LiteralCoercer::new(default_format),
        }
    }

    pub fn with_defaults(schema: &'a S) -> Self {
        Self::new(schema, CompilerSettings::default())
    }

    pub fn settings(&self) -> &CompilerSettings {
        &self.settings
    }

    fn compile_node(&self, filter: &Filter) -> Result<QueryNode, CompileError> {
        trace!("Compiling {} filter", filter.kind());

        match filter {
            Filter::Include => Ok(QueryNode::MatchAll),
            Filter::Exclude => Ok(QueryNode::match_none()),
            Filter::Id(ids) => Ok(QueryNode::Ids(ids.clone())),
            Filter::And(children) => Ok(QueryNode::And(self.compile_all(children)?)),
            Filter::Or(children) => Ok(QueryNode::Or(self.compile_all(children)?)),
            Filter::Not(child) => match child.as_ref() {
                Filter::PropertyIsNull(expression) => {
                    let field = operand::property_operand("Not(PropertyIsNull)", expression, self.schema)?;
                    Ok(QueryNode::Exists {
                        field: field.encoded_name(),
                    })
                }
                other => Ok(QueryNode::not(self.compile_node(other)?)),
            },
            Filter::PropertyIsNull(expression) => {
                let field = operand::property_operand("PropertyIsNull", expression, self.schema)?;
                Ok(QueryNode::Missing {
                    field: field.encoded_name(),
                })
            }
            Filter::PropertyIsNil(_) => Err(CompileError::unsupported("PropertyIsNil")),
            Filter::Comparison {
                op,
                left,
                right,
                match_case,
            } => self.compile_comparison(*op, left, right, *match_case),
            Filter::Between {
                expression,
                lower,
                upper,
            } => self.compile_between(expression, lower, upper),
            Filter::Like {
                expression,
                pattern,
                wildcard,
                single_char,
                escape,
                match_case,
            } => {
                let syntax = LikeSyntax {
                    wildcard: *wildcard,
                    single_char: *single_char,
                    escape: *escape,
                };
                self.compile_like(expression, pattern, syntax, *match_case)
            }
            Filter::BBox {
                expression,
                envelope,
            } => self.compile_bbox(expression, envelope),
            Filter::Spatial { op, left, right } => self.compile_spatial(*op, left, right),
            Filter::Distance {
                op,
                left,
                right,
                distance,
                units,
            } => self.compile_distance(*op, left, right, *distance, units),
            Filter::Temporal { op, left, right } => self.compile_temporal(*op, left, right),
        }
    }

    fn compile_all(&self, children: &[Filter]) -> Result<Vec<QueryNode>, CompileError> {
        children.iter().map(|child| self.compile_node(child)).collect()
    }

    fn compile_comparison(
        &self,
        op: ComparisonOperator,
        left: &Expression,
        right: &Expression,
        match_case: bool,
    ) -> Result<QueryNode, CompileError> {
        let name = op_name(op);
        let BinaryOperands {
            field,
            literal,
            swapped,
        } = operand::binary_operands(name, left, right, self.schema)?;
        let value = self.coercer.coerce(&field, literal)?;
        let encoded = field.encoded_name();

        let op = if swapped { op.inverse() } else { op };
        let node = match op {
            ComparisonOperator::EqualTo | ComparisonOperator::NotEqualTo => {
                if !match_case {
                    debug!("Case-insensitive {name} on '{encoded}' is matched exactly");
                }
                let term = QueryNode::term(&encoded, value);
                if op == ComparisonOperator::NotEqualTo {
                    QueryNode::not(term)
                } else {
                    term
                }
            }
            ComparisonOperator::GreaterThan => {
                QueryNode::range(&encoded).with_bound(RangeBound::Gt, value)
            }
            ComparisonOperator::GreaterThanOrEqualTo => {
                QueryNode::range(&encoded).with_bound(RangeBound::Gte, value)
            }
            ComparisonOperator::LessThan => {
                QueryNode::range(&encoded).with_bound(RangeBound::Lt, value)
            }
            ComparisonOperator::LessThanOrEqualTo => {
                QueryNode::range(&encoded).with_bound(RangeBound::Lte, value)
            }
        };

        Ok(nested::wrap(&field, node))
    }

    fn compile_between(
        &self,
        expression: &Expression,
        lower: &Expression,
        upper: &Expression,
    ) -> Result<QueryNode, CompileError> {
        let field = operand::property_operand("Between", expression, self.schema)?;
        let lower = self
            .coercer
            .coerce(&field, operand::literal_operand("Between", lower)?)?;
        let upper = self
            .coercer
            .coerce(&field, operand::literal_operand("Between", upper)?)?;

        let node = QueryNode::range(&field.encoded_name())
            .with_bound(RangeBound::Gte, lower)
            .with_bound(RangeBound::Lte, upper);
        Ok(nested::wrap(&field, node))
    }

    fn compile_like(
        &self,
        expression: &Expression,
        pattern: &str,
        syntax: LikeSyntax,
        match_case: bool,
    ) -> Result<QueryNode, CompileError> {
        let field = operand::property_operand("Like", expression, self.schema)?;
        let encoded = field.encoded_name();
        if !match_case {
            debug!("Case-insensitive Like on '{encoded}' relies on the field analyzer");
        }

        let use_regexp = self.settings.like.strategy == LikeStrategy::RegexpForKeyword
            && field.attribute.is_some()
            && !field.is_analyzed();

        let node = if use_regexp {
            QueryNode::Regexp {
                field: encoded,
                pattern: syntax.to_regex(pattern),
            }
        } else {
            QueryNode::QueryString {
                query: syntax.to_query_string(pattern),
                default_field: encoded,
            }
        };
        Ok(nested::wrap(&field, node))
    }

    fn compile_bbox(
        &self,
        expression: &Expression,
        envelope: &Rect<f64>,
    ) -> Result<QueryNode, CompileError> {
        let field = operand::property_operand("BBOX", expression, self.schema)?;
        let Some(envelope) = geometry::clip_envelope(envelope)? else {
            return Ok(QueryNode::match_none());
        };

        let (min, max) = (envelope.min(), envelope.max());
        let encoded = field.encoded_name();
        let node = match field.geometry_kind() {
            GeometryKind::Point => QueryNode::GeoBoundingBox {
                field: encoded,
                top_left: GeoPoint::new(max.y, min.x),
                bottom_right: GeoPoint::new(min.y, max.x),
            },
            _ => QueryNode::GeoShape {
                field: encoded,
                shape: Shape::envelope(min.x, min.y, max.x, max.y),
                relation: ShapeRelation::Intersects,
            },
        };
        Ok(nested::wrap(&field, node))
    }

    fn compile_spatial(
        &self,
        op: SpatialOperator,
        left: &Expression,
        right: &Expression,
    ) -> Result<QueryNode, CompileError> {
        let name = op.to_string();
        let BinaryOperands {
            field,
            literal,
            swapped,
        } = operand::binary_operands(&name, left, right, self.schema)?;

        let relation = match (op, swapped) {
            (SpatialOperator::Intersects, _) => ShapeRelation::Intersects,
            (SpatialOperator::Disjoint, _) => ShapeRelation::Disjoint,
            (SpatialOperator::Within, false) | (SpatialOperator::Contains, true) => {
                ShapeRelation::Within
            }
            (SpatialOperator::Contains, false) | (SpatialOperator::Within, true) => {
                ShapeRelation::Contains
            }
            (
                SpatialOperator::Crosses
                | SpatialOperator::Equals
                | SpatialOperator::Overlaps
                | SpatialOperator::Touches,
                _,
            ) => return Err(CompileError::unsupported(format!("spatial operator {name}"))),
        };

        let Some(encoded_geometry) = self.encode_geometry(&name, &field, literal)? else {
            debug!("Empty geometry operand for {name} on '{}'", field.label());
            return Ok(match relation {
                ShapeRelation::Disjoint => QueryNode::MatchAll,
                _ => QueryNode::match_none(),
            });
        };

        let encoded = field.encoded_name();
        let node = if field.geometry_kind() == GeometryKind::Point
            && let Some(points) = encoded_geometry.polygon_points()
        {
            let polygon = QueryNode::GeoPolygon {
                field: encoded,
                points,
            };
            match relation {
                ShapeRelation::Intersects | ShapeRelation::Within => polygon,
                ShapeRelation::Disjoint => QueryNode::not(polygon),
                ShapeRelation::Contains => {
                    return Err(CompileError::unsupported(format!(
                        "{name} with a polygon on point attribute '{}'",
                        field.label()
                    )));
                }
            }
        } else {
            QueryNode::GeoShape {
                field: encoded,
                shape: encoded_geometry.shape,
                relation,
            }
        };

        Ok(nested::wrap(&field, node))
    }

    fn compile_distance(
        &self,
        op: DistanceOperator,
        left: &Expression,
        right: &Expression,
        distance: f64,
        units: &str,
    ) -> Result<QueryNode, CompileError> {
        let name = op.to_string();
        let BinaryOperands { field, literal, .. } =
            operand::binary_operands(&name, left, right, self.schema)?;

        if let Some(attribute) = field.attribute {
            if attribute.data_type != DataType::Geometry
                || attribute.geometry_kind == GeometryKind::Shape
            {
                return Err(CompileError::unsupported(format!(
                    "{name} requires a point attribute, '{}' is not one",
                    field.label()
                )));
            }
        }
        if !distance.is_finite() || distance < 0.0 {
            return Err(CompileError::precondition(format!(
                "{name} distance must be a non-negative number, got {distance}"
            )));
        }
        let unit = units
            .parse::<DistanceUnit>()
            .map_err(CompileError::IllegalArgument)?;

        let point = self
            .encode_geometry(&name, &field, literal)?
            .and_then(|encoded| encoded.representative_point());
        let Some(point) = point else {
            debug!("Empty geometry operand for {name} on '{}'", field.label());
            return Ok(match op {
                DistanceOperator::DWithin => QueryNode::match_none(),
                DistanceOperator::Beyond => QueryNode::MatchAll,
            });
        };

        let within = QueryNode::GeoDistance {
            field: field.encoded_name(),
            point,
            distance,
            unit,
        };
        let node = match op {
            DistanceOperator::DWithin => within,
            DistanceOperator::Beyond => QueryNode::not(within),
        };
        Ok(nested::wrap(&field, node))
    }

    fn encode_geometry(
        &self,
        name: &str,
        field: &FieldRef,
        literal: &Literal,
    ) -> Result<Option<EncodedGeometry>, CompileError> {
        match literal {
            Literal::Geometry(geometry) => geometry::encode(geometry),
            other => Err(CompileError::illegal(format!(
                "{name} on '{}' requires a geometry literal, found {other}",
                field.label()
            ))),
        }
    }

    fn compile_temporal(
        &self,
        op: TemporalOperator,
        left: &Expression,
        right: &Expression,
    ) -> Result<QueryNode, CompileError> {
        let name = op.to_string();
        let BinaryOperands {
            field,
            literal,
            swapped,
        } = operand::binary_operands(&name, left, right, self.schema)?;

        let operand = match literal {
            Literal::Period(period) => TemporalOperand::Period(
                self.coercer.render_instant(&field, &period.begin),
                self.coercer.render_instant(&field, &period.end),
            ),
            Literal::Geometry(_) => {
                return Err(CompileError::illegal(format!(
                    "{name} requires a temporal literal, found a geometry"
                )));
            }
            other => TemporalOperand::Instant(self.coercer.temporal_value(&field, other)?),
        };

        let encoded = field.encoded_name();
        let node = match temporal::normalize(op, operand, swapped)? {
            TemporalMatch::Equals(value) => QueryNode::term(&encoded, value),
            TemporalMatch::After(value) => {
                QueryNode::range(&encoded).with_bound(RangeBound::Gt, value)
            }
            TemporalMatch::Before(value) => {
                QueryNode::range(&encoded).with_bound(RangeBound::Lt, value)
            }
            TemporalMatch::Between(begin, end) => QueryNode::range(&encoded)
                .with_bound(RangeBound::Gt, begin)
                .with_bound(RangeBound::Lt, end),
        };
        Ok(nested::wrap(&field, node))
    }
}

impl<S: AttributeSchema + ?Sized> FilterCompiler for QueryCompiler<'_, S> {
    type Output = QueryNode;

    fn compile(&self, filter: &Filter) -> Result<QueryNode, CompileError> {
        self.compile_node(filter)
    }
}

fn op_name(op: ComparisonOperator) -> &'static str {
    match op {
        ComparisonOperator::EqualTo => "EqualTo",
        ComparisonOperator::NotEqualTo => "NotEqualTo",
        ComparisonOperator::GreaterThan => "GreaterThan",
        ComparisonOperator::GreaterThanOrEqualTo => "GreaterThanOrEqualTo",
        ComparisonOperator::LessThan => "LessThan",
        ComparisonOperator::LessThanOrEqualTo => "LessThanOrEqualTo",
    }
}
