use filter_syntax::{
    ast::{
        expr::Expression,
        filter::Filter,
        kind::FilterKind,
        literal::Literal,
        operator::{ComparisonOperator, TemporalOperator},
        temporal::Period,
    },
    builder::*,
};
use chrono::{TimeZone, Utc};
use geo_types::{LineString, point};

#[test]
fn test_comparison_builders() {
    let filter = greater_than(property("doubleAttr"), literal(4.5));

    match filter {
        Filter::Comparison {
            op,
            left,
            right,
            match_case,
        } => {
            assert_eq!(op, ComparisonOperator::GreaterThan);
            assert_eq!(left.as_property().map(|p| p.to_string()), Some("doubleAttr".into()));
            assert_eq!(right, Expression::Literal(Literal::Number(4.5)));
            assert!(match_case);
        }
        other => panic!("unexpected filter: {other:?}"),
    }
}

#[test]
fn test_spatial_builders() {
    let filter = intersects(property("geom"), geometry(LineString::<f64>::new(vec![])));
    assert_eq!(filter.kind(), FilterKind::Intersects);

    let filter = dwithin(property("geo_point"), geometry(point!(x: 0.0, y: 1.0)), 1.0, "m");
    assert_eq!(filter.kind(), FilterKind::DWithin);

    let filter = bbox(property("geo"), 0.0, 0.0, 1.0, 1.0);
    assert_eq!(filter.to_string(), "BBOX(geo, 0, 0, 1, 1)");
}

#[test]
fn test_temporal_builders() {
    let begin = Utc.with_ymd_and_hms(2004, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2005, 1, 1, 0, 0, 0).unwrap();
    let filter = temporal(
        TemporalOperator::During,
        property("dateAttr"),
        period(Period::new(begin, end).unwrap()),
    );

    assert_eq!(filter.kind(), FilterKind::During);
}

#[test]
fn test_ids_builder() {
    let filter = ids(["id1", "id2"]);
    assert_eq!(filter, Filter::Id(vec!["id1".to_string(), "id2".to_string()]));
}
