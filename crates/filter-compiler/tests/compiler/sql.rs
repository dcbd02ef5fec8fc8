use crate::schema;
use compiler_config::settings::CompilerSettings;
use filter_compiler::{CompileError, FilterCompiler, sql::SqlFilterCompiler};
use filter_syntax::{ast::filter::Filter, builder::*};
use model::core::value::Value;
use planner::query::dialect::{MySql, Postgres};

#[test]
fn test_postgres_placeholders() {
    let schema = schema();
    let compiler = SqlFilterCompiler::new(&schema, CompilerSettings::default(), &Postgres);
    let filter = and(vec![
        equal_to(property("stringAttr"), literal("a")),
        greater_than(literal(4.5), property("doubleAttr")),
    ]);

    let predicate = compiler.compile(&filter).unwrap();
    assert_eq!(
        predicate.sql,
        r#"("stringAttr" = $1 AND "doubleAttr" < $2)"#
    );
    assert_eq!(
        predicate.params,
        vec![Value::from("a"), Value::Float(4.5)]
    );
}

#[test]
fn test_mysql_ids_and_null_checks() {
    let schema = schema();
    let mut settings = CompilerSettings::default();
    settings.sql.id_column = "fid".into();
    let compiler = SqlFilterCompiler::new(&schema, settings, &MySql);
    let filter = or(vec![ids(["1", "2"]), not(is_null(property("stringAttr")))]);

    let predicate = compiler.compile(&filter).unwrap();
    assert_eq!(
        predicate.sql,
        "(`fid` IN (?, ?) OR `stringAttr` IS NOT NULL)"
    );
    assert_eq!(predicate.params, vec![Value::from("1"), Value::from("2")]);
}

#[test]
fn test_like_and_between() {
    let schema = schema();
    let compiler = SqlFilterCompiler::new(&schema, CompilerSettings::default(), &Postgres);
    let filter = and(vec![
        like(property("analyzed"), "Broad.ay*"),
        between(property("longAttr"), literal(1), literal(10)),
    ]);

    let predicate = compiler.compile(&filter).unwrap();
    assert_eq!(
        predicate.sql,
        r#"("analyzed" LIKE $1 AND ("longAttr" >= $2 AND "longAttr" <= $3))"#
    );
    assert_eq!(
        predicate.params,
        vec![Value::from("Broad_ay%"), Value::Int(1), Value::Int(10)]
    );
}

#[test]
fn test_spatial_predicate_uses_srid() {
    let schema = schema();
    let mut settings = CompilerSettings::default();
    settings.sql.srid = 3857;
    let compiler = SqlFilterCompiler::new(&schema, settings, &Postgres);

    let predicate = compiler
        .compile(&bbox(property("geom"), 0.0, 0.0, 1.0, 2.0))
        .unwrap();
    assert_eq!(
        predicate.sql,
        r#"ST_Intersects("geom", ST_GeomFromText($1, 3857))"#
    );
    assert_eq!(
        predicate.params,
        vec![Value::from("POLYGON ((0 0, 0 2, 1 2, 1 0, 0 0))")]
    );
}

#[test]
fn test_exclude_and_errors() {
    let schema = schema();
    let compiler = SqlFilterCompiler::new(&schema, CompilerSettings::default(), &Postgres);

    assert_eq!(compiler.compile(&Filter::Exclude).unwrap().sql, "NOT (1 = 1)");
    assert!(matches!(
        compiler.compile(&Filter::PropertyIsNil(property("stringAttr"))),
        Err(CompileError::UnsupportedOperation(_))
    ));
}
