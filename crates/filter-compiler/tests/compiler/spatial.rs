use crate::compile;
use filter_compiler::CompileError;
use filter_syntax::{
    ast::operator::SpatialOperator,
    builder::*,
};
use geo_types::{Geometry, LineString, point, polygon};
use planner::query::ast::{
    node::QueryNode,
    shape::{DistanceUnit, GeoPoint, Shape, ShapeRelation},
};

fn empty_line() -> Geometry<f64> {
    Geometry::LineString(LineString::new(vec![]))
}

fn unit_square() -> Geometry<f64> {
    Geometry::Polygon(polygon![
        (x: 0.0, y: 0.0),
        (x: 0.0, y: 1.0),
        (x: 1.0, y: 1.0),
        (x: 1.0, y: 0.0),
    ])
}

#[test]
fn test_empty_geometry_complements() {
    assert_eq!(
        compile(&intersects(property("geom"), geometry(empty_line()))),
        Ok(QueryNode::match_none())
    );
    assert_eq!(
        compile(&disjoint(property("geom"), geometry(empty_line()))),
        Ok(QueryNode::MatchAll)
    );
}

#[test]
fn test_intersects_shape() {
    let expected = QueryNode::GeoShape {
        field: "geom".into(),
        shape: Shape::envelope(0.0, 0.0, 1.0, 1.0),
        relation: ShapeRelation::Intersects,
    };

    assert_eq!(
        compile(&intersects(property("geom"), geometry(unit_square()))),
        Ok(expected.clone())
    );
    assert_eq!(
        compile(&intersects(geometry(unit_square()), property("geom"))),
        Ok(expected)
    );
}

#[test]
fn test_within_swaps_to_contains() {
    let filter = spatial(
        SpatialOperator::Within,
        geometry(point!(x: 10.0, y: 20.0)),
        property("geom"),
    );

    assert_eq!(
        compile(&filter),
        Ok(QueryNode::GeoShape {
            field: "geom".into(),
            shape: Shape::Point([10.0, 20.0]),
            relation: ShapeRelation::Contains,
        })
    );
}

#[test]
fn test_unsupported_relations() {
    for op in [
        SpatialOperator::Crosses,
        SpatialOperator::Equals,
        SpatialOperator::Overlaps,
        SpatialOperator::Touches,
    ] {
        let filter = spatial(op, property("geom"), geometry(unit_square()));
        assert!(
            matches!(compile(&filter), Err(CompileError::UnsupportedOperation(_))),
            "{op}"
        );
    }
}

#[test]
fn test_polygon_on_point_attribute() {
    let polygon = QueryNode::GeoPolygon {
        field: "geo_point".into(),
        points: vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(1.0, 0.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(0.0, 0.0),
        ],
    };

    assert_eq!(
        compile(&intersects(property("geo_point"), geometry(unit_square()))),
        Ok(polygon.clone())
    );
    assert_eq!(
        compile(&disjoint(property("geo_point"), geometry(unit_square()))),
        Ok(QueryNode::not(polygon))
    );
}

#[test]
fn test_bbox_on_shape_attribute_is_closed_polygon() {
    let node = compile(&bbox(property("geom"), -10.0, -5.0, 10.0, 5.0)).unwrap();

    match node {
        QueryNode::GeoShape {
            shape: Shape::Polygon(rings),
            relation,
            ..
        } => {
            assert_eq!(relation, ShapeRelation::Intersects);
            assert_eq!(rings[0].len(), 5);
            assert_eq!(rings[0].first(), rings[0].last());
            assert_eq!(rings[0][0], [-10.0, -5.0]);
        }
        other => panic!("Expected a polygon shape, got {other:?}"),
    }
}

#[test]
fn test_bbox_on_point_attribute() {
    assert_eq!(
        compile(&bbox(property("geo_point"), -10.0, -5.0, 10.0, 5.0)),
        Ok(QueryNode::GeoBoundingBox {
            field: "geo_point".into(),
            top_left: GeoPoint::new(5.0, -10.0),
            bottom_right: GeoPoint::new(-5.0, 10.0),
        })
    );
}

#[test]
fn test_bbox_is_clipped_to_world() {
    assert_eq!(
        compile(&bbox(property("geo_point"), -200.0, -100.0, 200.0, 100.0)),
        Ok(QueryNode::GeoBoundingBox {
            field: "geo_point".into(),
            top_left: GeoPoint::new(90.0, -180.0),
            bottom_right: GeoPoint::new(-90.0, 180.0),
        })
    );
    assert_eq!(
        compile(&bbox(property("geo_point"), 190.0, 0.0, 200.0, 10.0)),
        Ok(QueryNode::match_none())
    );
}

#[test]
fn test_dwithin_uses_centroid() {
    assert_eq!(
        compile(&dwithin(property("geo_point"), geometry(unit_square()), 12.0, "km")),
        Ok(QueryNode::GeoDistance {
            field: "geo_point".into(),
            point: GeoPoint::new(0.5, 0.5),
            distance: 12.0,
            unit: DistanceUnit::Kilometers,
        })
    );
}

#[test]
fn test_beyond_negates_distance() {
    assert_eq!(
        compile(&beyond(property("geo_point"), geometry(point!(x: 3.0, y: 4.0)), 100.0, "m")),
        Ok(QueryNode::not(QueryNode::GeoDistance {
            field: "geo_point".into(),
            point: GeoPoint::new(4.0, 3.0),
            distance: 100.0,
            unit: DistanceUnit::Meters,
        }))
    );
}

#[test]
fn test_distance_preconditions() {
    let point = || geometry(point!(x: 3.0, y: 4.0));

    assert!(matches!(
        compile(&dwithin(property("geo_point"), point(), -1.0, "m")),
        Err(CompileError::Precondition(_))
    ));
    assert!(matches!(
        compile(&dwithin(property("geo_point"), point(), 1.0, "parsecs")),
        Err(CompileError::IllegalArgument(_))
    ));
    assert!(matches!(
        compile(&dwithin(property("geom"), point(), 1.0, "m")),
        Err(CompileError::UnsupportedOperation(_))
    ));
}

#[test]
fn test_distance_with_empty_geometry() {
    assert_eq!(
        compile(&dwithin(property("geo_point"), geometry(empty_line()), 1.0, "m")),
        Ok(QueryNode::match_none())
    );
    assert_eq!(
        compile(&beyond(property("geo_point"), geometry(empty_line()), 1.0, "m")),
        Ok(QueryNode::MatchAll)
    );
}

#[test]
fn test_scalar_operand_for_spatial_predicate() {
    assert!(matches!(
        compile(&intersects(property("geom"), literal("POINT (1 2)"))),
        Err(CompileError::IllegalArgument(_))
    ));
}

#[test]
fn test_empty_collection_member_is_dropped() {
    let collection = Geometry::GeometryCollection(geo_types::GeometryCollection(vec![
        Geometry::Point(point!(x: 1.0, y: 1.0)),
        empty_line(),
    ]));

    assert_eq!(
        compile(&intersects(property("geom"), geometry(collection))),
        Ok(QueryNode::GeoShape {
            field: "geom".into(),
            shape: Shape::GeometryCollection(vec![Shape::Point([1.0, 1.0])]),
            relation: ShapeRelation::Intersects,
        })
    );
}
