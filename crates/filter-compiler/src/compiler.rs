use filter_syntax::ast::filter::Filter;

use crate::error::CompileError;

/// A trait for compiling filter trees into a specific backend format.
pub trait FilterCompiler {
    /// The type of filter that this compiler produces.
    type Output;

    /// Compile the filter tree. Fails without a partial result.
    fn compile(&self, filter: &Filter) -> Result<Self::Output, CompileError>;

    /// Compile an optional filter; an absent filter matches everything.
    fn compile_optional(&self, filter: Option<&Filter>) -> Result<Self::Output, CompileError> {
        self.compile(filter.unwrap_or(&Filter::Include))
    }
}
