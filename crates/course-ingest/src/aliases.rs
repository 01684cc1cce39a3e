//! Field alias chains.
//!
//! Source files name the same attribute in different ways (`credits`,
//! `creditHours`, `units`). Each canonical field has an ordered list of
//! candidate keys; the first key holding a usable value wins.

use serde_json::{Map, Value};

use course_model::number_text;

/// Ordered candidate keys for each canonical course field.
#[derive(Debug, Clone, Copy)]
pub struct FieldAliases;

impl FieldAliases {
    pub const ID: &'static [&'static str] = &["id", "courseId", "code"];
    pub const TITLE: &'static [&'static str] = &["title", "name"];
    pub const POSTED_TIME: &'static [&'static str] = &["postedTime", "semester", "term"];
    pub const TYPE: &'static [&'static str] = &["type", "category"];
    pub const LEVEL: &'static [&'static str] = &["level", "difficulty"];
    pub const CREDITS: &'static [&'static str] = &["credits", "creditHours", "units"];
    pub const INSTRUCTOR: &'static [&'static str] = &["instructor", "professor", "teacher"];
    pub const SKILL: &'static [&'static str] = &["skill", "topic"];
    pub const DEPARTMENT: &'static [&'static str] = &["department", "dept"];
    pub const DETAIL: &'static [&'static str] = &["detail", "description", "summary"];
}

/// Resolve the first alias whose value is neither null nor an empty string.
pub fn resolve_alias<'a>(record: &'a Map<String, Value>, aliases: &[&str]) -> Option<&'a Value> {
    aliases.iter().find_map(|&key| match record.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(value) => Some(value),
    })
}

/// Resolve an alias chain to text.
///
/// Strings are taken as-is, numbers and booleans are rendered; arrays and
/// objects carry no usable text and resolve to `None`.
pub(crate) fn resolve_text(record: &Map<String, Value>, aliases: &[&str]) -> Option<String> {
    resolve_alias(record, aliases).and_then(scalar_text)
}

pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
