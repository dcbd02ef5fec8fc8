use crate::schema;
use compiler_config::settings::{CapabilitySettings, CompilerSettings};
use filter_compiler::{
    CompileError,
    encoder::{Query, QueryEncoder},
};
use filter_syntax::{ast::operator::SpatialOperator, builder::*};
use geo_types::point;
use model::core::value::Value;
use planner::query::ast::node::QueryNode;
use std::collections::HashMap;

#[test]
fn test_absent_filter() {
    let schema = schema();
    let encoder = QueryEncoder::new(&schema, CompilerSettings::default());

    let encoded = encoder.encode(&Query::default()).unwrap();
    assert_eq!(encoded.filter, QueryNode::MatchAll);
    assert_eq!(encoded.query, QueryNode::MatchAll);
    assert!(encoded.fully_supported);
    assert!(encoded.post_filter.is_none());
}

#[test]
fn test_unsupported_conjunct_becomes_post_filter() {
    let schema = schema();
    let encoder = QueryEncoder::new(&schema, CompilerSettings::default());
    let touches = spatial(
        SpatialOperator::Touches,
        property("geom"),
        geometry(point!(x: 1.0, y: 1.0)),
    );
    let query = Query {
        filter: Some(and(vec![
            equal_to(property("stringAttr"), literal("a")),
            touches.clone(),
        ])),
        view_params: HashMap::new(),
    };

    let encoded = encoder.encode(&query).unwrap();
    assert!(!encoded.fully_supported);
    assert_eq!(
        encoded.filter,
        QueryNode::term("stringAttr", Value::from("a"))
    );
    assert_eq!(encoded.post_filter, Some(touches));
}

#[test]
fn test_excluded_capability_still_compiles() {
    let schema = schema();
    let settings = CompilerSettings {
        capabilities: CapabilitySettings {
            exclude: vec!["like".into()],
        },
        ..CompilerSettings::default()
    };
    let encoder = QueryEncoder::new(&schema, settings);
    let filter = like(property("analyzed"), "a*");

    assert!(!encoder.capabilities().fully_supports(&filter));
    let encoded = encoder
        .encode(&Query {
            filter: Some(filter.clone()),
            view_params: HashMap::new(),
        })
        .unwrap();
    assert_eq!(encoded.filter, QueryNode::MatchAll);
    assert_eq!(encoded.post_filter, Some(filter));
}

#[test]
fn test_view_params_are_merged() {
    let schema = schema();
    let encoder = QueryEncoder::new(&schema, CompilerSettings::default());
    let query = Query {
        filter: Some(equal_to(property("stringAttr"), literal("a"))),
        view_params: HashMap::from([
            ("q".to_string(), r#"{"match_all":{}}"#.to_string()),
            ("a".to_string(), r#"{"n":{"max":{"field":"doubleAttr"}}}"#.to_string()),
        ]),
    };

    let encoded = encoder.encode(&query).unwrap();
    assert_eq!(encoded.query, QueryNode::Wrapper(r#"{"match_all":{}}"#.into()));
    assert!(encoded.aggregations.is_some_and(|a| a.contains_key("n")));
}

#[test]
fn test_compile_errors_propagate() {
    let schema = schema();
    let encoder = QueryEncoder::new(&schema, CompilerSettings::default());
    let query = Query {
        filter: Some(equal_to(property("doubleAttr"), literal("abc"))),
        view_params: HashMap::new(),
    };

    assert!(matches!(
        encoder.encode(&query),
        Err(CompileError::Coercion { .. })
    ));
}
