use crate::error::SyntaxError;
use chrono::{DateTime, Utc};
use std::fmt;

/// A closed time interval `[begin, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub begin: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Period {
    pub fn new(begin: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, SyntaxError> {
        if end < begin {
            return Err(SyntaxError::InvalidPeriod {
                begin: begin.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        Ok(Self { begin, end })
    }

    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        self.begin <= *instant && *instant <= self.end
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.begin.to_rfc3339(), self.end.to_rfc3339())
    }
}
