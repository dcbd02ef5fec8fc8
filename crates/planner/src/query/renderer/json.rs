//! Renders a compiled query tree into the document-search JSON DSL.

use crate::query::ast::{
    node::QueryNode,
    shape::{GeoPoint, Shape},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::{Map, Value as Json, json};

impl QueryNode {
    pub fn to_json(&self) -> Json {
        match self {
            QueryNode::MatchAll => json!({ "match_all": {} }),
            QueryNode::Not(inner) => json!({ "bool": { "must_not": inner.to_json() } }),
            QueryNode::And(nodes) => json!({ "bool": { "must": render_all(nodes) } }),
            QueryNode::Or(nodes) => json!({ "bool": { "should": render_all(nodes) } }),
            QueryNode::Ids(ids) => json!({ "ids": { "values": ids } }),
            QueryNode::Missing { field } => {
                json!({ "bool": { "must_not": { "exists": { "field": field } } } })
            }
            QueryNode::Exists { field } => json!({ "exists": { "field": field } }),
            QueryNode::Term { field, value } => {
                json!({ "term": keyed(field, value.to_json()) })
            }
            QueryNode::Range {
                field,
                gt,
                gte,
                lt,
                lte,
            } => {
                let mut bounds = Map::new();
                for (key, bound) in [("gt", gt), ("gte", gte), ("lt", lt), ("lte", lte)] {
                    if let Some(value) = bound {
                        bounds.insert(key.to_string(), value.to_json());
                    }
                }
                json!({ "range": keyed(field, Json::Object(bounds)) })
            }
            QueryNode::QueryString {
                query,
                default_field,
            } => json!({ "query_string": { "query": query, "default_field": default_field } }),
            QueryNode::Regexp { field, pattern } => {
                json!({ "regexp": keyed(field, Json::from(pattern.as_str())) })
            }
            QueryNode::GeoShape {
                field,
                shape,
                relation,
            } => json!({
                "geo_shape": keyed(field, json!({
                    "shape": shape_json(shape),
                    "relation": relation.as_str(),
                }))
            }),
            QueryNode::GeoBoundingBox {
                field,
                top_left,
                bottom_right,
            } => json!({
                "geo_bounding_box": keyed(field, json!({
                    "top_left": point_json(top_left),
                    "bottom_right": point_json(bottom_right),
                }))
            }),
            QueryNode::GeoPolygon { field, points } => {
                let points: Vec<Json> = points.iter().map(point_json).collect();
                json!({ "geo_polygon": keyed(field, json!({ "points": points })) })
            }
            QueryNode::GeoDistance {
                field,
                point,
                distance,
                unit,
            } => {
                let mut body = Map::new();
                body.insert("distance".into(), Json::from(format!("{distance}{unit}")));
                body.insert(field.clone(), point_json(point));
                json!({ "geo_distance": Json::Object(body) })
            }
            QueryNode::Nested { path, query } => {
                json!({ "nested": { "path": path, "query": query.to_json() } })
            }
            QueryNode::Wrapper(fragment) => {
                json!({ "wrapper": { "query": STANDARD.encode(fragment.as_bytes()) } })
            }
        }
    }
}

fn render_all(nodes: &[QueryNode]) -> Vec<Json> {
    nodes.iter().map(QueryNode::to_json).collect()
}

fn keyed(field: &str, value: Json) -> Json {
    let mut map = Map::new();
    map.insert(field.to_string(), value);
    Json::Object(map)
}

fn point_json(point: &GeoPoint) -> Json {
    json!({ "lat": point.lat, "lon": point.lon })
}

fn shape_json(shape: &Shape) -> Json {
    match shape {
        Shape::Point(p) => json!({ "type": shape.type_name(), "coordinates": p }),
        Shape::LineString(points) | Shape::MultiPoint(points) => {
            json!({ "type": shape.type_name(), "coordinates": points })
        }
        Shape::Polygon(rings) | Shape::MultiLineString(rings) => {
            json!({ "type": shape.type_name(), "coordinates": rings })
        }
        Shape::MultiPolygon(polygons) => {
            json!({ "type": shape.type_name(), "coordinates": polygons })
        }
        Shape::GeometryCollection(shapes) => {
            let geometries: Vec<Json> = shapes.iter().map(shape_json).collect();
            json!({ "type": shape.type_name(), "geometries": geometries })
        }
    }
}
