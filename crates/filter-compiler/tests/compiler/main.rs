//! Filter compiler tests
//!
//! These tests compile filter trees against a shared feature schema and
//! check the resulting query nodes, SQL predicates and merged requests.

mod basic;
mod comparison;
mod encoder;
mod nested;
mod spatial;
mod sql;
mod view_params;

use chrono::{DateTime, TimeZone, Utc};
use filter_compiler::{CompileError, FilterCompiler, QueryCompiler};
use filter_syntax::ast::filter::Filter;
use model::core::{
    attribute::AttributeMetadata,
    data_type::{DataType, GeometryKind},
    schema::FeatureSchema,
};
use planner::query::ast::node::QueryNode;

pub fn schema() -> FeatureSchema {
    FeatureSchema::new()
        .with_attribute(AttributeMetadata::new("stringAttr", DataType::String))
        .with_attribute(AttributeMetadata::new("analyzed", DataType::String).analyzed(true))
        .with_attribute(AttributeMetadata::new("doubleAttr", DataType::Double))
        .with_attribute(AttributeMetadata::new("longAttr", DataType::Long))
        .with_attribute(AttributeMetadata::new("boolAttr", DataType::Boolean))
        .with_attribute(AttributeMetadata::new("dateAttr", DataType::Date))
        .with_attribute(
            AttributeMetadata::new("basicDateAttr", DataType::Date)
                .with_date_format("basic_date_time"),
        )
        .with_attribute(
            AttributeMetadata::new("dayAttr", DataType::Date).with_date_format("yyyy-MM-dd"),
        )
        .with_attribute(
            AttributeMetadata::new("geom", DataType::Geometry)
                .with_geometry_kind(GeometryKind::Shape),
        )
        .with_attribute(
            AttributeMetadata::new("geo_point", DataType::Geometry)
                .with_geometry_kind(GeometryKind::Point),
        )
        .with_attribute(AttributeMetadata::new("nested.hej", DataType::String).nested(true))
        .with_attribute(AttributeMetadata::new("nested.num", DataType::Long).nested(true))
        .with_attribute(
            AttributeMetadata::new("alias", DataType::String).with_full_name("properties.alias"),
        )
}

pub fn compile(filter: &Filter) -> Result<QueryNode, CompileError> {
    let schema = schema();
    QueryCompiler::with_defaults(&schema).compile(filter)
}

/// 1970-07-19T02:02:03.456Z
pub fn sample_instant() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(17_200_923_456).unwrap()
}
