use crate::compile;
use compiler_config::settings::ViewParamKeys;
use filter_compiler::view_params::ViewParams;
use filter_syntax::builder::*;
use model::core::value::Value;
use planner::query::ast::node::QueryNode;
use std::collections::HashMap;

const NATIVE_FILTER: &str = r#"{"term":{"type":"road"}}"#;

fn view(pairs: &[(&str, &str)]) -> ViewParams {
    let raw: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ViewParams::from_map(&raw, &ViewParamKeys::default())
}

fn compiled() -> QueryNode {
    compile(&equal_to(property("stringAttr"), literal("a"))).unwrap()
}

#[test]
fn test_native_filter_is_conjoined() {
    let merged = view(&[("f", NATIVE_FILTER)]).merge(compiled()).unwrap();

    assert_eq!(
        merged.filter,
        QueryNode::And(vec![
            QueryNode::term("stringAttr", Value::from("a")),
            QueryNode::Wrapper(NATIVE_FILTER.into()),
        ])
    );
    assert_eq!(merged.query, QueryNode::MatchAll);
}

#[test]
fn test_native_only_replaces_compiled_filter() {
    let merged = view(&[("f", NATIVE_FILTER), ("native-only", "true")])
        .merge(compiled())
        .unwrap();

    assert_eq!(merged.filter, QueryNode::Wrapper(NATIVE_FILTER.into()));
}

#[test]
fn test_native_only_without_fragment_matches_all() {
    let merged = view(&[("native-only", "TRUE")]).merge(compiled()).unwrap();
    assert_eq!(merged.filter, QueryNode::MatchAll);
}

#[test]
fn test_no_fragment_keeps_compiled_filter() {
    let merged = view(&[]).merge(compiled()).unwrap();
    assert_eq!(merged.filter, compiled());
    assert!(merged.aggregations.is_none());
}

#[test]
fn test_native_query_is_wrapped() {
    let merged = view(&[("q", r#"{"match":{"name":"x"}}"#)])
        .merge(QueryNode::MatchAll)
        .unwrap();

    assert_eq!(merged.query, QueryNode::Wrapper(r#"{"match":{"name":"x"}}"#.into()));
    assert_eq!(merged.filter, QueryNode::MatchAll);
    assert_eq!(merged.combined(), merged.query);
}

#[test]
fn test_wrapper_json_is_base64() {
    let json = QueryNode::Wrapper(NATIVE_FILTER.into()).to_json();
    assert_eq!(
        json["wrapper"]["query"],
        "eyJ0ZXJtIjp7InR5cGUiOiJyb2FkIn19"
    );
}

#[test]
fn test_aggregations_are_parsed() {
    let merged = view(&[("a", r#"{"types":{"terms":{"field":"type"}}}"#)])
        .merge(QueryNode::MatchAll)
        .unwrap();

    let aggregations = merged.aggregations.unwrap();
    assert_eq!(aggregations["types"]["terms"]["field"], "type");
}

#[test]
fn test_custom_keys() {
    let keys = ViewParamKeys {
        filter: "native_filter".into(),
        ..ViewParamKeys::default()
    };
    let raw = HashMap::from([("NATIVE_FILTER".to_string(), NATIVE_FILTER.to_string())]);
    let view = ViewParams::from_map(&raw, &keys);

    assert_eq!(view.filter.as_deref(), Some(NATIVE_FILTER));
}
