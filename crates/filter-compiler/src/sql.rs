//! One-step compilation of filters into parameterized SQL predicates.

use crate::{compiler::FilterCompiler, error::CompileError, query::QueryCompiler};
use compiler_config::settings::CompilerSettings;
use filter_syntax::ast::filter::Filter;
use model::core::{schema::AttributeSchema, value::Value};
use planner::query::{
    dialect::Dialect,
    renderer::{Render, Renderer},
};
use tracing::debug;

/// A rendered `WHERE` predicate and its positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlPredicate {
    pub sql: String,
    pub params: Vec<Value>,
}

pub struct SqlFilterCompiler<'a, S: AttributeSchema + ?Sized> {
    compiler: QueryCompiler<'a, S>,
    dialect: &'a dyn Dialect,
}

impl<'a, S: AttributeSchema + ?Sized> SqlFilterCompiler<'a, S> {
    pub fn new(schema: &'a S, settings: CompilerSettings, dialect: &'a dyn Dialect) -> Self {
        Self {
            compiler: QueryCompiler::new(schema, settings),
            dialect,
        }
    }
}

impl<S: AttributeSchema + ?Sized> FilterCompiler for SqlFilterCompiler<'_, S> {
    type Output = SqlPredicate;

    fn compile(&self, filter: &Filter) -> Result<SqlPredicate, CompileError> {
        let node = self.compiler.compile(filter)?;
        let sql = &self.compiler.settings().sql;

        let mut renderer = Renderer::new(self.dialect)
            .with_id_column(&sql.id_column)
            .with_srid(sql.srid);
        node.render(&mut renderer);
        let (sql, params) = renderer.finish();

        debug!(
            "Rendered {} predicate with {} parameter(s): {sql}",
            self.dialect.name(),
            params.len()
        );
        Ok(SqlPredicate { sql, params })
    }
}
