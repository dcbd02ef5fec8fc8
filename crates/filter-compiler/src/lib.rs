pub mod capabilities;
pub mod coercion;
pub mod compiler;
pub mod encoder;
pub mod error;
pub mod geometry;
pub mod like;
pub mod nested;
pub mod operand;
pub mod query;
pub mod sql;
pub mod temporal;
pub mod view_params;

pub use compiler::FilterCompiler;
pub use error::CompileError;
pub use query::QueryCompiler;
