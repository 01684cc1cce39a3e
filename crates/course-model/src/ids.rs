#![deny(unsafe_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Primary key of a course as it appeared in the source file.
///
/// Source files carry ids as either JSON strings or JSON numbers. Both forms
/// are kept verbatim: a numeric `7` and a textual `"7"` are distinct ids, the
/// same way the source data distinguishes them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourseId {
    Number(serde_json::Number),
    Text(String),
}

impl CourseId {
    /// Build a textual id, rejecting the empty string.
    pub fn text(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ModelError::EmptyCourseId);
        }
        Ok(Self::Text(value))
    }

    /// Numeric reading of the id, if it has one.
    ///
    /// Text ids follow the usual loose number syntax of catalog exports:
    /// surrounding whitespace is ignored, blank text reads as `0`, decimal
    /// and exponent forms parse (`"10"`, `" 2.5 "`, `"1e3"`) and so do
    /// unsigned `0x`, `0o` and `0b` literals. Non-finite values are not
    /// numbers.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CourseId::Number(n) => n.as_f64().filter(|v| v.is_finite()),
            CourseId::Text(s) => parse_loose_number(s),
        }
    }

    /// True when the rendered id equals `text`.
    pub fn matches_text(&self, text: &str) -> bool {
        match self {
            CourseId::Text(s) => s == text,
            CourseId::Number(n) => number_text(n) == text,
        }
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseId::Number(n) => f.write_str(&number_text(n)),
            CourseId::Text(s) => f.write_str(s),
        }
    }
}

/// Render a JSON number the way it reads in the catalog.
///
/// Integers print as written; floats with no fractional part drop the
/// trailing `.0`, so `1e2` renders as `100`.
pub fn number_text(n: &serde_json::Number) -> String {
    if n.is_f64()
        && let Some(value) = n.as_f64()
    {
        return value.to_string();
    }
    n.to_string()
}

fn parse_loose_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if digits.is_empty() {
            return None;
        }
        return digits.chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        });
    }
    // Rust also accepts "inf" and "nan" spellings; the finite check drops them.
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl From<i64> for CourseId {
    fn from(value: i64) -> Self {
        CourseId::Number(serde_json::Number::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_id_is_rejected() {
        assert_eq!(CourseId::text(""), Err(ModelError::EmptyCourseId));
        assert!(CourseId::text("CS101").is_ok());
    }

    #[test]
    fn numeric_reading() {
        assert_eq!(CourseId::from(10).as_number(), Some(10.0));
        assert_eq!(CourseId::text(" 2.5 ").unwrap().as_number(), Some(2.5));
        assert_eq!(CourseId::text("CS101").unwrap().as_number(), None);
        assert_eq!(CourseId::text("inf").unwrap().as_number(), None);
        assert_eq!(CourseId::text("Infinity").unwrap().as_number(), None);
    }

    #[test]
    fn numeric_reading_accepts_radix_literals_and_blank_text() {
        assert_eq!(CourseId::text("0x10").unwrap().as_number(), Some(16.0));
        assert_eq!(CourseId::text("0O17").unwrap().as_number(), Some(15.0));
        assert_eq!(CourseId::text(" 0b101 ").unwrap().as_number(), Some(5.0));
        assert_eq!(CourseId::text("0x").unwrap().as_number(), None);
        assert_eq!(CourseId::text("0xZZ").unwrap().as_number(), None);
        assert_eq!(CourseId::text("-0x10").unwrap().as_number(), None);
        assert_eq!(CourseId::text("   ").unwrap().as_number(), Some(0.0));
    }

    #[test]
    fn float_ids_render_without_trailing_zero() {
        let id: CourseId = serde_json::from_str("1e2").unwrap();
        assert_eq!(id.to_string(), "100");
        assert!(id.matches_text("100"));
        let id: CourseId = serde_json::from_str("2.5").unwrap();
        assert_eq!(id.to_string(), "2.5");
        assert_eq!(CourseId::from(42).to_string(), "42");
    }

    #[test]
    fn number_and_text_ids_are_distinct() {
        let number = CourseId::from(7);
        let text = CourseId::text("7").unwrap();
        assert_ne!(number, text);
        assert!(number.matches_text("7"));
        assert!(text.matches_text("7"));
    }
}
