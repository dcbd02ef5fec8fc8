//! Date rendering formats: symbolic aliases and explicit Joda-style patterns.
//!
//! Values are always rendered in UTC; zone pattern letters render as `Z`.

use chrono::{
    DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc,
    format::{Item, StrftimeItems},
};
use std::{fmt, str::FromStr};
use thiserror::Error;

pub const DEFAULT_DATE_FORMAT: &str = "date_optional_time";

const ISO_MILLIS_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DateFormatError {
    #[error("Date format must not be empty")]
    Empty,

    /// A pattern letter with no rendering counterpart.
    #[error("Unsupported pattern letter '{letter}' in date format '{pattern}'")]
    UnsupportedLetter { letter: char, pattern: String },

    #[error("Unterminated quoted literal in date format '{0}'")]
    UnterminatedQuote(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFormat {
    EpochMillis,
    EpochSecond,
    /// Strftime layout plus the name it was declared with.
    Layout { name: String, layout: String },
}

impl DateFormat {
    pub fn name(&self) -> &str {
        match self {
            DateFormat::EpochMillis => "epoch_millis",
            DateFormat::EpochSecond => "epoch_second",
            DateFormat::Layout { name, .. } => name,
        }
    }

    pub fn format(&self, instant: &DateTime<Utc>) -> String {
        match self {
            DateFormat::EpochMillis => instant.timestamp_millis().to_string(),
            DateFormat::EpochSecond => instant.timestamp().to_string(),
            DateFormat::Layout { layout, .. } => instant.format(layout).to_string(),
        }
    }

    pub fn parse(&self, raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        match self {
            DateFormat::EpochMillis => raw
                .parse::<i64>()
                .ok()
                .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
            DateFormat::EpochSecond => raw
                .parse::<i64>()
                .ok()
                .and_then(|s| Utc.timestamp_opt(s, 0).single()),
            DateFormat::Layout { layout, .. } => NaiveDateTime::parse_from_str(raw, layout)
                .ok()
                .or_else(|| {
                    NaiveDate::parse_from_str(raw, layout)
                        .ok()
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                })
                .map(|naive| Utc.from_utc_datetime(&naive)),
        }
    }

    fn layout(name: &str, layout: &str) -> Self {
        DateFormat::Layout {
            name: name.to_string(),
            layout: layout.to_string(),
        }
    }

    fn from_alias(alias: &str) -> Option<Self> {
        let layout = match alias {
            "epoch_millis" => return Some(DateFormat::EpochMillis),
            "epoch_second" => return Some(DateFormat::EpochSecond),
            "date_optional_time" | "strict_date_optional_time" | "date_time"
            | "strict_date_time" => ISO_MILLIS_LAYOUT,
            "date_time_no_millis" | "strict_date_time_no_millis" => "%Y-%m-%dT%H:%M:%SZ",
            "date" | "strict_date" => "%Y-%m-%d",
            "date_hour_minute_second" | "strict_date_hour_minute_second" => "%Y-%m-%dT%H:%M:%S",
            "date_hour_minute_second_millis" | "strict_date_hour_minute_second_millis" => {
                "%Y-%m-%dT%H:%M:%S%.3f"
            }
            "basic_date" => "%Y%m%d",
            "basic_date_time" => "%Y%m%dT%H%M%S%.3fZ",
            "basic_date_time_no_millis" => "%Y%m%dT%H%M%SZ",
            _ => return None,
        };
        Some(Self::layout(alias, layout))
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::layout(DEFAULT_DATE_FORMAT, ISO_MILLIS_LAYOUT)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DateFormat {
    type Err = DateFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DateFormatError::Empty);
        }

        if let Some(format) = Self::from_alias(&s.to_ascii_lowercase()) {
            return Ok(format);
        }

        let layout = pattern_to_layout(s)?;
        if StrftimeItems::new(&layout).any(|item| matches!(item, Item::Error)) {
            return Err(DateFormatError::UnsupportedLetter {
                letter: '%',
                pattern: s.to_string(),
            });
        }
        Ok(Self::layout(s, &layout))
    }
}

/// Translates a Joda-style pattern (`yyyy-MM-dd'T'HH:mm:ss.SSSZ`) into a
/// strftime layout.
fn pattern_to_layout(pattern: &str) -> Result<String, DateFormatError> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut layout = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            let start = i + 1;
            let end = chars[start..]
                .iter()
                .position(|&ch| ch == '\'')
                .map(|offset| start + offset)
                .ok_or_else(|| DateFormatError::UnterminatedQuote(pattern.to_string()))?;
            if end == start {
                layout.push('\'');
            }
            for &literal in &chars[start..end] {
                push_literal(&mut layout, literal);
            }
            i = end + 1;
            continue;
        }

        if !c.is_ascii_alphabetic() {
            push_literal(&mut layout, c);
            i += 1;
            continue;
        }

        let run = chars[i..].iter().take_while(|&&ch| ch == c).count();
        let spec = match (c, run) {
            ('y' | 'Y' | 'u', 2) => "%y",
            ('y' | 'Y' | 'u', _) => "%Y",
            ('M', 1 | 2) => "%m",
            ('M', 3) => "%b",
            ('M', _) => "%B",
            ('d', _) => "%d",
            ('D', _) => "%j",
            ('H', _) => "%H",
            ('h', _) => "%I",
            ('m', _) => "%M",
            ('s', _) => "%S",
            ('S', _) => "%3f",
            ('a', _) => "%p",
            ('E', 1..=3) => "%a",
            ('E', _) => "%A",
            ('Z' | 'X' | 'z', _) => "Z",
            _ => {
                return Err(DateFormatError::UnsupportedLetter {
                    letter: c,
                    pattern: pattern.to_string(),
                });
            }
        };
        layout.push_str(spec);
        i += run;
    }

    Ok(layout)
}

fn push_literal(layout: &mut String, c: char) {
    if c == '%' {
        layout.push_str("%%");
    } else {
        layout.push(c);
    }
}
