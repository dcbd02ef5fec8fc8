use crate::error::SyntaxError;
use std::fmt;

/// Dot-separated property path (e.g., `name`, `nested.hej`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    pub segments: Vec<String>,
}

impl PropertyPath {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    pub fn parse(path: &str) -> Result<Self, SyntaxError> {
        let path = path.trim();
        if path.is_empty() {
            return Err(SyntaxError::EmptyPath);
        }

        Ok(Self {
            segments: path.split('.').map(|s| s.to_string()).collect(),
        })
    }

    /// The segment before the first dot, if the path has more than one segment.
    pub fn nested_root(&self) -> Option<&str> {
        match self.segments.as_slice() {
            [root, _, ..] => Some(root.as_str()),
            _ => None,
        }
    }

    pub fn is_qualified(&self) -> bool {
        self.segments.len() > 1
    }

    pub fn as_string(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl From<&str> for PropertyPath {
    fn from(path: &str) -> Self {
        Self {
            segments: path.split('.').map(|s| s.to_string()).collect(),
        }
    }
}
