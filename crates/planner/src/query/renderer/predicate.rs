use crate::query::{
    ast::{
        node::QueryNode,
        shape::{GeoPoint, Shape, ShapeRelation},
    },
    renderer::{Render, Renderer},
};
use model::core::value::Value;

impl Render for QueryNode {
    fn render(&self, r: &mut Renderer) {
        match self {
            QueryNode::MatchAll => r.sql.push_str("1 = 1"),
            QueryNode::Not(inner) => {
                r.sql.push_str("NOT (");
                inner.render(r);
                r.sql.push(')');
            }
            QueryNode::And(nodes) => render_joined(nodes, " AND ", "1 = 1", r),
            QueryNode::Or(nodes) => render_joined(nodes, " OR ", "1 = 0", r),
            QueryNode::Ids(ids) => {
                if ids.is_empty() {
                    r.sql.push_str("1 = 0");
                    return;
                }
                let column = r.quote_field(&r.id_column);
                r.sql.push_str(&column);
                r.sql.push_str(" IN (");
                for (i, id) in ids.iter().enumerate() {
                    if i > 0 {
                        r.sql.push_str(", ");
                    }
                    r.add_param(Value::String(id.clone()));
                }
                r.sql.push(')');
            }
            QueryNode::Missing { field } => {
                let column = r.quote_field(field);
                r.sql.push_str(&format!("{column} IS NULL"));
            }
            QueryNode::Exists { field } => {
                let column = r.quote_field(field);
                r.sql.push_str(&format!("{column} IS NOT NULL"));
            }
            QueryNode::Term { field, value } => {
                let column = r.quote_field(field);
                r.sql.push_str(&format!("{column} = "));
                r.add_param(value.clone());
            }
            QueryNode::Range {
                field,
                gt,
                gte,
                lt,
                lte,
            } => render_range(field, [(">", gt), (">=", gte), ("<", lt), ("<=", lte)], r),
            QueryNode::QueryString {
                query,
                default_field,
            } => {
                let column = r.quote_field(default_field);
                r.sql.push_str(&format!("{column} LIKE "));
                r.add_param(Value::String(query_string_to_like(query)));
            }
            QueryNode::Regexp { field, pattern } => {
                let column = r.quote_field(field);
                let placeholder = r.next_placeholder(Value::String(format!("^({pattern})$")));
                let sql = r.dialect.regex_match(&column, &placeholder);
                r.sql.push_str(&sql);
            }
            QueryNode::GeoShape {
                field,
                shape,
                relation,
            } => render_spatial(field, *relation, shape, r),
            QueryNode::GeoBoundingBox {
                field,
                top_left,
                bottom_right,
            } => {
                let envelope = Shape::envelope(
                    top_left.lon,
                    bottom_right.lat,
                    bottom_right.lon,
                    top_left.lat,
                );
                render_spatial(field, ShapeRelation::Intersects, &envelope, r);
            }
            QueryNode::GeoPolygon { field, points } => {
                let ring = points.iter().map(|p| [p.lon, p.lat]).collect();
                render_spatial(field, ShapeRelation::Intersects, &Shape::Polygon(vec![ring]), r);
            }
            QueryNode::GeoDistance {
                field,
                point,
                distance,
                unit,
            } => {
                let column = r.quote_field(field);
                let geometry = geometry_expr(&point_shape(point), r);
                let meters = r.next_placeholder(Value::Float(unit.to_meters(*distance)));
                let sql = r.dialect.distance_within(&column, &geometry, &meters);
                r.sql.push_str(&sql);
            }
            QueryNode::Nested { query, .. } => query.render(r),
            QueryNode::Wrapper(fragment) => {
                r.sql.push('(');
                r.sql.push_str(fragment);
                r.sql.push(')');
            }
        }
    }
}

fn render_joined(nodes: &[QueryNode], separator: &str, empty: &str, r: &mut Renderer) {
    if nodes.is_empty() {
        r.sql.push_str(empty);
        return;
    }

    r.sql.push('(');
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            r.sql.push_str(separator);
        }
        node.render(r);
    }
    r.sql.push(')');
}

fn render_range(field: &str, bounds: [(&str, &Option<Value>); 4], r: &mut Renderer) {
    let column = r.quote_field(field);
    let present: Vec<(&str, &Value)> = bounds
        .iter()
        .filter_map(|(op, bound)| bound.as_ref().map(|value| (*op, value)))
        .collect();

    if present.is_empty() {
        r.sql.push_str("1 = 1");
        return;
    }

    let wrap = present.len() > 1;
    if wrap {
        r.sql.push('(');
    }
    for (i, (op, value)) in present.into_iter().enumerate() {
        if i > 0 {
            r.sql.push_str(" AND ");
        }
        r.sql.push_str(&format!("{column} {op} "));
        r.add_param(value.clone());
    }
    if wrap {
        r.sql.push(')');
    }
}

fn render_spatial(field: &str, relation: ShapeRelation, shape: &Shape, r: &mut Renderer) {
    let column = r.quote_field(field);
    let function = match relation {
        ShapeRelation::Intersects => "ST_Intersects",
        ShapeRelation::Disjoint => "ST_Disjoint",
        ShapeRelation::Within => "ST_Within",
        ShapeRelation::Contains => "ST_Contains",
    };
    let geometry = geometry_expr(shape, r);
    r.sql.push_str(&format!("{function}({column}, {geometry})"));
}

fn geometry_expr(shape: &Shape, r: &mut Renderer) -> String {
    let placeholder = r.next_placeholder(Value::String(shape.to_string()));
    format!("ST_GeomFromText({placeholder}, {})", r.srid)
}

fn point_shape(point: &GeoPoint) -> Shape {
    Shape::Point([point.lon, point.lat])
}

/// Converts query-string wildcards back to `LIKE` syntax.
fn query_string_to_like(query: &str) -> String {
    let mut like = String::with_capacity(query.len());
    let mut chars = query.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped @ ('%' | '_' | '\\')) => {
                    like.push('\\');
                    like.push(escaped);
                }
                Some(escaped) => like.push(escaped),
                None => {}
            },
            '*' => like.push('%'),
            '?' => like.push('_'),
            '%' | '_' => {
                like.push('\\');
                like.push(c);
            }
            other => like.push(other),
        }
    }

    like
}
