#![deny(unsafe_code)]

use std::fmt;

use serde_json::{Map, Value};

use course_model::{Course, CourseId, Credits, ImportOptions};

use crate::aliases::{FieldAliases, resolve_alias, resolve_text, scalar_text};

/// Why a raw record did not become a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The array element is not a JSON object.
    NotAnObject,
    /// No id alias holds a non-empty string or number.
    MissingId,
    /// No title alias holds a non-empty string or number.
    MissingTitle,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rejection::NotAnObject => "not an object",
            Rejection::MissingId => "missing id",
            Rejection::MissingTitle => "missing title",
        })
    }
}

/// Normalize one raw record into a canonical course.
///
/// Required fields (`id`, `title`) reject the record when unresolved;
/// optional fields resolve independently and are `None` when absent.
pub fn normalize_record(raw: &Value, options: &ImportOptions) -> Result<Course, Rejection> {
    let Value::Object(record) = raw else {
        return Err(Rejection::NotAnObject);
    };

    let id = resolve_id(record).ok_or(Rejection::MissingId)?;
    let title = resolve_alias(record, FieldAliases::TITLE)
        .and_then(|value| match value {
            Value::Number(n) if is_zero(n) => None,
            Value::String(_) | Value::Number(_) => scalar_text(value),
            _ => None,
        })
        .ok_or(Rejection::MissingTitle)?;

    let credits =
        resolve_alias(record, FieldAliases::CREDITS).map_or(Credits::Missing, Credits::from_json);

    Ok(Course {
        id,
        title,
        posted_time: resolve_text(record, FieldAliases::POSTED_TIME),
        course_type: resolve_text(record, FieldAliases::TYPE),
        level: resolve_text(record, FieldAliases::LEVEL),
        credits,
        instructor: resolve_text(record, FieldAliases::INSTRUCTOR),
        skill: resolve_text(record, FieldAliases::SKILL),
        department: resolve_text(record, FieldAliases::DEPARTMENT),
        detail: resolve_text(record, FieldAliases::DETAIL),
        raw: options.keep_raw.then(|| record.clone()),
    })
}

fn resolve_id(record: &Map<String, Value>) -> Option<CourseId> {
    match resolve_alias(record, FieldAliases::ID)? {
        Value::Number(n) if is_zero(n) => None,
        Value::Number(n) => Some(CourseId::Number(n.clone())),
        Value::String(s) => CourseId::text(s.as_str()).ok(),
        _ => None,
    }
}

/// A numeric zero counts as an absent id or title, like an empty string.
fn is_zero(n: &serde_json::Number) -> bool {
    n.as_f64() == Some(0.0)
}
