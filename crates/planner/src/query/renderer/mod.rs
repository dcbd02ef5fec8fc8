//! Defines the core rendering trait and context for converting a compiled
//! query tree to a SQL predicate.

use model::core::value::Value;

use crate::query::dialect::Dialect;

pub mod json;
pub mod predicate;

pub const DEFAULT_SRID: i32 = 4326;
pub const DEFAULT_ID_COLUMN: &str = "id";

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the parameters, and provides
/// access to the dialect for syntax-specific details.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<Value>,
    pub dialect: &'a dyn Dialect,
    /// Column matched by identifier-set queries.
    pub id_column: String,
    /// Spatial reference id attached to geometry literals.
    pub srid: i32,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
            id_column: DEFAULT_ID_COLUMN.to_string(),
            srid: DEFAULT_SRID,
        }
    }

    pub fn with_id_column(mut self, id_column: &str) -> Self {
        self.id_column = id_column.to_string();
        self
    }

    pub fn with_srid(mut self, srid: i32) -> Self {
        self.srid = srid;
        self
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    pub fn add_param(&mut self, value: Value) {
        let placeholder = self.next_placeholder(value);
        self.sql.push_str(&placeholder);
    }

    /// Registers a parameter and returns its placeholder without writing it.
    pub fn next_placeholder(&mut self, value: Value) -> String {
        self.params.push(value);
        self.dialect.get_placeholder(self.params.len() - 1)
    }

    /// Quotes each segment of a dotted field path.
    pub fn quote_field(&self, field: &str) -> String {
        field
            .split('.')
            .map(|segment| self.dialect.quote_identifier(segment))
            .collect::<Vec<_>>()
            .join(".")
    }
}
