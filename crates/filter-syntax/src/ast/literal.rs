use crate::ast::temporal::Period;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use geo_types::Geometry;
use std::fmt;

/// Typed literal values carried by filter expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    Date(NaiveDate),
    Instant(DateTime<Utc>),
    Period(Period),
    Geometry(Geometry<f64>),
}

impl Literal {
    pub fn as_string(&self) -> Option<String> {
        match self {
            Literal::String(s) => Some(s.clone()),
            Literal::Integer(i) => Some(i.to_string()),
            Literal::Number(n) => Some(n.to_string()),
            Literal::Boolean(b) => Some(b.to_string()),
            Literal::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            Literal::Instant(t) => Some(t.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Literal::Period(_) | Literal::Geometry(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Literal::Integer(i) => Some(*i),
            Literal::Number(n)
                if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n < i64::MAX as f64 =>
            {
                Some(*n as i64)
            }
            Literal::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Integer(i) => Some(*i as f64),
            Literal::Number(n) => Some(*n),
            Literal::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Literal::Boolean(b) => Some(*b),
            Literal::Integer(1) => Some(true),
            Literal::Integer(0) => Some(false),
            Literal::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn as_period(&self) -> Option<&Period> {
        match self {
            Literal::Period(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_geometry(&self) -> Option<&Geometry<f64>> {
        match self {
            Literal::Geometry(g) => Some(g),
            _ => None,
        }
    }

    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            Literal::Date(_) | Literal::Instant(_) | Literal::Period(_)
        )
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "'{}'", s),
            Literal::Integer(i) => write!(f, "{}", i),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Literal::Instant(t) => write!(f, "{}", t.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Literal::Period(p) => write!(f, "{}", p),
            Literal::Geometry(g) => write!(f, "{:?}", g),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Integer(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Integer(value as i64)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Number(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

impl From<NaiveDate> for Literal {
    fn from(value: NaiveDate) -> Self {
        Literal::Date(value)
    }
}

impl From<DateTime<Utc>> for Literal {
    fn from(value: DateTime<Utc>) -> Self {
        Literal::Instant(value)
    }
}

impl From<Period> for Literal {
    fn from(value: Period) -> Self {
        Literal::Period(value)
    }
}

impl From<Geometry<f64>> for Literal {
    fn from(value: Geometry<f64>) -> Self {
        Literal::Geometry(value)
    }
}
