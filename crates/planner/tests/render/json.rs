use model::core::value::Value;
use planner::{
    all_of,
    query::ast::{
        node::QueryNode,
        shape::{GeoPoint, Shape, ShapeRelation},
    },
};
use serde_json::json;

#[test]
fn test_render_logical_tree() {
    let node = all_of!(
        QueryNode::term("stringAttr", Value::from("a")),
        QueryNode::Or(vec![
            QueryNode::Exists {
                field: "b".into()
            },
            QueryNode::Missing {
                field: "c".into()
            },
        ]),
    );

    assert_eq!(
        node.to_json(),
        json!({
            "bool": {
                "must": [
                    { "term": { "stringAttr": "a" } },
                    { "bool": { "should": [
                        { "exists": { "field": "b" } },
                        { "bool": { "must_not": { "exists": { "field": "c" } } } }
                    ] } }
                ]
            }
        })
    );
}

#[test]
fn test_render_nested_term() {
    let node = QueryNode::nested("nested", QueryNode::term("nested.hej", Value::from("value")));

    assert_eq!(
        node.to_json(),
        json!({
            "nested": {
                "path": "nested",
                "query": { "term": { "nested.hej": "value" } }
            }
        })
    );
}

#[test]
fn test_render_bounding_box_and_polygon() {
    let bbox = QueryNode::GeoBoundingBox {
        field: "geo_point".into(),
        top_left: GeoPoint::new(1.0, 0.0),
        bottom_right: GeoPoint::new(0.0, 1.0),
    };
    assert_eq!(
        bbox.to_json(),
        json!({
            "geo_bounding_box": {
                "geo_point": {
                    "top_left": { "lat": 1.0, "lon": 0.0 },
                    "bottom_right": { "lat": 0.0, "lon": 1.0 }
                }
            }
        })
    );

    let polygon = QueryNode::GeoPolygon {
        field: "geo_point".into(),
        points: vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0)],
    };
    assert_eq!(
        polygon.to_json(),
        json!({
            "geo_polygon": {
                "geo_point": { "points": [ { "lat": 0.0, "lon": 0.0 }, { "lat": 1.0, "lon": 0.0 } ] }
            }
        })
    );
}

#[test]
fn test_render_geometry_collection() {
    let node = QueryNode::GeoShape {
        field: "geom".into(),
        shape: Shape::GeometryCollection(vec![
            Shape::Point([1.0, 2.0]),
            Shape::LineString(vec![[0.0, 0.0], [1.0, 1.0]]),
        ]),
        relation: ShapeRelation::Within,
    };

    assert_eq!(
        node.to_json(),
        json!({
            "geo_shape": {
                "geom": {
                    "shape": {
                        "type": "geometrycollection",
                        "geometries": [
                            { "type": "point", "coordinates": [1.0, 2.0] },
                            { "type": "linestring", "coordinates": [[0.0, 0.0], [1.0, 1.0]] }
                        ]
                    },
                    "relation": "WITHIN"
                }
            }
        })
    );
}
