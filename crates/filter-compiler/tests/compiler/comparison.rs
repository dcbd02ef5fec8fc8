use crate::{compile, sample_instant};
use filter_compiler::CompileError;
use filter_syntax::builder::*;
use model::core::value::Value;
use planner::query::ast::node::{QueryNode, RangeBound};

#[test]
fn test_equal_to_is_symmetric() {
    let expected = QueryNode::term("stringAttr", Value::from("value"));

    assert_eq!(
        compile(&equal_to(property("stringAttr"), literal("value"))),
        Ok(expected.clone())
    );
    assert_eq!(
        compile(&equal_to(literal("value"), property("stringAttr"))),
        Ok(expected)
    );
}

#[test]
fn test_not_equal_to() {
    assert_eq!(
        compile(&not_equal_to(literal(3), property("longAttr"))),
        Ok(QueryNode::not(QueryNode::term("longAttr", Value::Int(3))))
    );
}

#[test]
fn test_greater_than_inverts_when_swapped() {
    assert_eq!(
        compile(&greater_than(property("doubleAttr"), literal(4.5))),
        Ok(QueryNode::range("doubleAttr").with_bound(RangeBound::Gt, Value::Float(4.5)))
    );
    assert_eq!(
        compile(&greater_than(literal(4.5), property("doubleAttr"))),
        Ok(QueryNode::range("doubleAttr").with_bound(RangeBound::Lt, Value::Float(4.5)))
    );
}

#[test]
fn test_range_operators() {
    let cases = [
        (greater_or_equal(property("longAttr"), literal(1)), RangeBound::Gte),
        (less_than(property("longAttr"), literal(1)), RangeBound::Lt),
        (less_or_equal(property("longAttr"), literal(1)), RangeBound::Lte),
        (less_or_equal(literal(1), property("longAttr")), RangeBound::Gte),
    ];

    for (filter, bound) in cases {
        assert_eq!(
            compile(&filter),
            Ok(QueryNode::range("longAttr").with_bound(bound, Value::Int(1))),
            "{filter}"
        );
    }
}

#[test]
fn test_between() {
    assert_eq!(
        compile(&between(property("doubleAttr"), literal(1), literal("2.5"))),
        Ok(QueryNode::range("doubleAttr")
            .with_bound(RangeBound::Gte, Value::Float(1.0))
            .with_bound(RangeBound::Lte, Value::Float(2.5)))
    );
}

#[test]
fn test_literals_are_coerced_to_attribute_type() {
    assert_eq!(
        compile(&equal_to(property("doubleAttr"), literal("4.5"))),
        Ok(QueryNode::term("doubleAttr", Value::Float(4.5)))
    );
    assert_eq!(
        compile(&equal_to(property("boolAttr"), literal("true"))),
        Ok(QueryNode::term("boolAttr", Value::Boolean(true)))
    );
    assert_eq!(
        compile(&equal_to(property("dateAttr"), instant(sample_instant()))),
        Ok(QueryNode::term("dateAttr", Value::from("1970-07-19T02:02:03.456Z")))
    );
    assert_eq!(
        compile(&equal_to(property("basicDateAttr"), instant(sample_instant()))),
        Ok(QueryNode::term("basicDateAttr", Value::from("19700719T020203.456Z")))
    );
}

#[test]
fn test_coercion_failure_on_known_attribute() {
    assert!(matches!(
        compile(&equal_to(property("doubleAttr"), literal("not a number"))),
        Err(CompileError::Coercion { .. })
    ));
}

#[test]
fn test_unknown_attribute_passes_literal_through() {
    assert_eq!(
        compile(&equal_to(property("dynamicAttr"), literal("4.5"))),
        Ok(QueryNode::term("dynamicAttr", Value::from("4.5")))
    );
}

#[test]
fn test_full_name_is_used_as_field() {
    assert_eq!(
        compile(&equal_to(property("alias"), literal("x"))),
        Ok(QueryNode::term("properties.alias", Value::from("x")))
    );
}

#[test]
fn test_two_properties_are_unsupported() {
    assert!(matches!(
        compile(&equal_to(property("stringAttr"), property("analyzed"))),
        Err(CompileError::UnsupportedOperation(_))
    ));
    assert!(matches!(
        compile(&equal_to(literal(1), literal(1))),
        Err(CompileError::UnsupportedOperation(_))
    ));
}
