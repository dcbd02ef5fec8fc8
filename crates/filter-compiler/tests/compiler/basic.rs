use crate::compile;
use filter_compiler::{CompileError, FilterCompiler, QueryCompiler};
use filter_syntax::{
    ast::{expr::Expression, filter::Filter, operator::ArithmeticOperator},
    builder::*,
};
use model::core::schema::FeatureSchema;
use planner::query::ast::node::QueryNode;

#[test]
fn test_include_and_exclude() {
    assert_eq!(compile(&Filter::Include), Ok(QueryNode::MatchAll));
    assert_eq!(
        compile(&Filter::Exclude),
        Ok(QueryNode::Not(Box::new(QueryNode::MatchAll)))
    );
}

#[test]
fn test_absent_filter_matches_all() {
    let schema = FeatureSchema::new();
    let compiler = QueryCompiler::with_defaults(&schema);
    assert_eq!(compiler.compile_optional(None), Ok(QueryNode::MatchAll));
}

#[test]
fn test_ids() {
    assert_eq!(
        compile(&ids(["a.1", "a.2"])),
        Ok(QueryNode::Ids(vec!["a.1".to_string(), "a.2".to_string()]))
    );
}

#[test]
fn test_logical_composition() {
    let filter = or(vec![
        and(vec![Filter::Include, ids(["1"])]),
        not(Filter::Exclude),
    ]);

    assert_eq!(
        compile(&filter),
        Ok(QueryNode::Or(vec![
            QueryNode::And(vec![QueryNode::MatchAll, QueryNode::Ids(vec!["1".into()])]),
            QueryNode::not(QueryNode::match_none()),
        ]))
    );
}

#[test]
fn test_null_checks() {
    assert_eq!(
        compile(&is_null(property("stringAttr"))),
        Ok(QueryNode::Missing {
            field: "stringAttr".into()
        })
    );
    assert_eq!(
        compile(&not(is_null(property("stringAttr")))),
        Ok(QueryNode::Exists {
            field: "stringAttr".into()
        })
    );
}

#[test]
fn test_null_check_on_nested_attribute_is_not_wrapped() {
    assert_eq!(
        compile(&is_null(property("nested.hej"))),
        Ok(QueryNode::Missing {
            field: "nested.hej".into()
        })
    );
}

#[test]
fn test_nil_check_is_unsupported() {
    let filter = Filter::PropertyIsNil(property("stringAttr"));
    assert!(matches!(
        compile(&filter),
        Err(CompileError::UnsupportedOperation(_))
    ));
}

#[test]
fn test_failure_aborts_whole_tree() {
    let sum = Expression::Arithmetic {
        op: ArithmeticOperator::Add,
        left: Box::new(property("longAttr")),
        right: Box::new(literal(1)),
    };
    let filter = and(vec![
        equal_to(property("stringAttr"), literal("a")),
        equal_to(sum, literal(3)),
    ]);

    assert!(matches!(
        compile(&filter),
        Err(CompileError::UnsupportedOperation(_))
    ));
}

#[test]
fn test_function_operand_is_unsupported() {
    let call = Expression::Function {
        name: "strToUpperCase".into(),
        arguments: vec![property("stringAttr")],
    };
    assert!(matches!(
        compile(&equal_to(call, literal("A"))),
        Err(CompileError::UnsupportedOperation(_))
    ));
}

#[test]
fn test_missing_operand_is_a_precondition_failure() {
    assert!(matches!(
        compile(&equal_to(property("stringAttr"), Expression::Nil)),
        Err(CompileError::Precondition(_))
    ));
}
