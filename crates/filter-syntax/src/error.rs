use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    /// A filter kind name that is not part of the closed kind set.
    #[error("Unknown filter kind: {0}")]
    UnknownFilterKind(String),

    /// A period whose end lies before its begin.
    #[error("Invalid period: end {end} is before begin {begin}")]
    InvalidPeriod { begin: String, end: String },

    #[error("Property path must not be empty")]
    EmptyPath,
}
