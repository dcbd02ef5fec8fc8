use thiserror::Error;

/// Errors raised while compiling a filter. Compilation is all-or-nothing:
/// any of these aborts the whole tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    /// The filter or expression kind has no translation rule.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Operands are arranged in a way the operator does not accept.
    #[error("Illegal argument: {0}")]
    IllegalArgument(String),

    /// A required operand is absent or unusable.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// A literal could not be converted to a known attribute's binding.
    #[error("Cannot coerce {literal} to {target} for attribute '{attribute}': {reason}")]
    Coercion {
        attribute: String,
        literal: String,
        target: String,
        reason: String,
    },

    /// A view parameter value could not be interpreted.
    #[error("Invalid view parameter '{key}': {reason}")]
    ViewParam { key: String, reason: String },
}

impl CompileError {
    pub(crate) fn unsupported(what: impl Into<String>) -> Self {
        CompileError::UnsupportedOperation(what.into())
    }

    pub(crate) fn illegal(what: impl Into<String>) -> Self {
        CompileError::IllegalArgument(what.into())
    }

    pub(crate) fn precondition(what: impl Into<String>) -> Self {
        CompileError::Precondition(what.into())
    }
}
