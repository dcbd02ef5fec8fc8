//! Converts literal operands into backend-ready values for an attribute.

use crate::{error::CompileError, operand::FieldRef};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use filter_syntax::ast::literal::Literal;
use model::core::{
    attribute::AttributeMetadata, data_type::DataType, date_format::DateFormat, value::Value,
};
use tracing::debug;

pub struct LiteralCoercer {
    default_format: DateFormat,
}

impl LiteralCoercer {
    pub fn new(default_format: DateFormat) -> Self {
        Self { default_format }
    }

    pub fn default_format(&self) -> &DateFormat {
        &self.default_format
    }

    /// Coerces `literal` for `field`. Unknown attributes receive the literal
    /// unchanged; known attributes must accept it or the call fails.
    pub fn coerce(&self, field: &FieldRef, literal: &Literal) -> Result<Value, CompileError> {
        match field.attribute {
            None => self.pass_through(field, literal),
            Some(attribute) => self.coerce_known(attribute, literal),
        }
    }

    /// Renders an instant for `field` using its date format.
    pub fn render_instant(&self, field: &FieldRef, instant: &DateTime<Utc>) -> Value {
        let format = match field.attribute {
            Some(attribute) => self.date_format_for(attribute),
            None => self.default_format.clone(),
        };
        Value::String(format.format(instant))
    }

    /// Value of an instant-like operand of a temporal predicate. Known
    /// attributes parse the literal as an instant and render it in their
    /// date format; unknown attributes receive the literal unchanged.
    pub fn temporal_value(&self, field: &FieldRef, literal: &Literal) -> Result<Value, CompileError> {
        match field.attribute {
            None => self.pass_through(field, literal),
            Some(attribute) => {
                let instant = self.to_instant(attribute, literal)?;
                Ok(Value::String(self.date_format_for(attribute).format(&instant)))
            }
        }
    }

    fn pass_through(&self, field: &FieldRef, literal: &Literal) -> Result<Value, CompileError> {
        let value = match literal {
            Literal::String(s) => Value::String(s.clone()),
            Literal::Integer(i) => Value::Int(*i),
            Literal::Number(n) => Value::Float(*n),
            Literal::Boolean(b) => Value::Boolean(*b),
            Literal::Date(d) => Value::String(self.default_format.format(&midnight(d))),
            Literal::Instant(t) => Value::String(self.default_format.format(t)),
            Literal::Period(_) | Literal::Geometry(_) => {
                return Err(CompileError::illegal(format!(
                    "{} literal cannot be compared with '{}' as a scalar",
                    kind_name(literal),
                    field.label()
                )));
            }
        };
        Ok(value)
    }

    fn coerce_known(
        &self,
        attribute: &AttributeMetadata,
        literal: &Literal,
    ) -> Result<Value, CompileError> {
        if matches!(literal, Literal::Period(_) | Literal::Geometry(_)) {
            return Err(failure(
                attribute,
                literal,
                "not a scalar value",
            ));
        }

        match attribute.data_type {
            DataType::String => Ok(Value::String(match literal {
                Literal::Date(d) => self.default_format.format(&midnight(d)),
                Literal::Instant(t) => self.default_format.format(t),
                other => other.as_string().unwrap_or_default(),
            })),
            DataType::Short => integral(attribute, literal, i16::MIN as i64, i16::MAX as i64),
            DataType::Int => integral(attribute, literal, i32::MIN as i64, i32::MAX as i64),
            DataType::Long => integral(attribute, literal, i64::MIN, i64::MAX),
            DataType::Float | DataType::Double => literal
                .as_f64()
                .filter(|v| v.is_finite())
                .map(Value::Float)
                .ok_or_else(|| failure(attribute, literal, "not a finite number")),
            DataType::Boolean => literal
                .as_bool()
                .map(Value::Boolean)
                .ok_or_else(|| failure(attribute, literal, "not a boolean")),
            DataType::Date => {
                let instant = self.to_instant(attribute, literal)?;
                Ok(Value::String(self.date_format_for(attribute).format(&instant)))
            }
            DataType::Geometry => Err(failure(
                attribute,
                literal,
                "geometry attributes only accept spatial predicates",
            )),
        }
    }

    fn to_instant(
        &self,
        attribute: &AttributeMetadata,
        literal: &Literal,
    ) -> Result<DateTime<Utc>, CompileError> {
        match literal {
            Literal::Instant(t) => Ok(*t),
            Literal::Date(d) => Ok(midnight(d)),
            Literal::Integer(ms) => Utc
                .timestamp_millis_opt(*ms)
                .single()
                .ok_or_else(|| failure(attribute, literal, "epoch milliseconds out of range")),
            Literal::String(raw) => parse_datetime(raw)
                .or_else(|| {
                    attribute
                        .date_formats
                        .iter()
                        .filter_map(|f| f.parse::<DateFormat>().ok())
                        .find_map(|f| f.parse(raw))
                })
                .ok_or_else(|| failure(attribute, literal, "unrecognized date")),
            _ => Err(failure(attribute, literal, "not a date")),
        }
    }

    /// First declared format that parses, else the default.
    pub fn date_format_for(&self, attribute: &AttributeMetadata) -> DateFormat {
        for declared in &attribute.date_formats {
            match declared.parse::<DateFormat>() {
                Ok(format) => return format,
                Err(err) => debug!(
                    "Skipping date format '{declared}' of attribute '{}': {err}",
                    attribute.name
                ),
            }
        }
        self.default_format.clone()
    }
}

impl Default for LiteralCoercer {
    fn default() -> Self {
        Self::new(DateFormat::default())
    }
}

fn integral(
    attribute: &AttributeMetadata,
    literal: &Literal,
    min: i64,
    max: i64,
) -> Result<Value, CompileError> {
    let value = literal
        .as_i64()
        .ok_or_else(|| failure(attribute, literal, "not an integer"))?;
    if value < min || value > max {
        return Err(failure(attribute, literal, "out of range"));
    }
    Ok(Value::Int(value))
}

fn failure(attribute: &AttributeMetadata, literal: &Literal, reason: &str) -> CompileError {
    CompileError::Coercion {
        attribute: attribute.name.clone(),
        literal: literal.to_string(),
        target: attribute.data_type.to_string(),
        reason: reason.to_string(),
    }
}

fn kind_name(literal: &Literal) -> &'static str {
    match literal {
        Literal::Period(_) => "period",
        Literal::Geometry(_) => "geometry",
        _ => "scalar",
    }
}

fn midnight(date: &NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN))
}

fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    parse_naive_datetime(raw).map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

fn parse_naive_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(chrono::NaiveTime::MIN))
        })
}
