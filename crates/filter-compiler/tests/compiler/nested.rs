use crate::compile;
use filter_syntax::builder::*;
use model::core::value::Value;
use planner::query::ast::node::{QueryNode, RangeBound};

#[test]
fn test_nested_term_is_wrapped_regardless_of_order() {
    let expected = QueryNode::nested("nested", QueryNode::term("nested.hej", Value::from("value")));

    assert_eq!(
        compile(&equal_to(property("nested.hej"), literal("value"))),
        Ok(expected.clone())
    );
    assert_eq!(
        compile(&equal_to(literal("value"), property("nested.hej"))),
        Ok(expected)
    );
}

#[test]
fn test_each_leaf_is_wrapped_once() {
    let filter = and(vec![
        equal_to(property("nested.hej"), literal("a")),
        or(vec![
            greater_than(property("nested.num"), literal(5)),
            equal_to(property("stringAttr"), literal("b")),
        ]),
    ]);

    assert_eq!(
        compile(&filter),
        Ok(QueryNode::And(vec![
            QueryNode::nested("nested", QueryNode::term("nested.hej", Value::from("a"))),
            QueryNode::Or(vec![
                QueryNode::nested(
                    "nested",
                    QueryNode::range("nested.num").with_bound(RangeBound::Gt, Value::Int(5)),
                ),
                QueryNode::term("stringAttr", Value::from("b")),
            ]),
        ]))
    );
}

#[test]
fn test_negated_nested_leaf() {
    assert_eq!(
        compile(&not_equal_to(property("nested.hej"), literal("a"))),
        Ok(QueryNode::nested(
            "nested",
            QueryNode::not(QueryNode::term("nested.hej", Value::from("a")))
        ))
    );
}

#[test]
fn test_like_on_nested_attribute() {
    assert_eq!(
        compile(&like(property("nested.hej"), "va*")),
        Ok(QueryNode::nested(
            "nested",
            QueryNode::QueryString {
                query: "va*".into(),
                default_field: "nested.hej".into(),
            }
        ))
    );
}

#[test]
fn test_dotted_unknown_path_is_not_nested() {
    assert_eq!(
        compile(&equal_to(property("other.field"), literal("a"))),
        Ok(QueryNode::term("other.field", Value::from("a")))
    );
}
