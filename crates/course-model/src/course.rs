//! The canonical course entity.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::FacetKey;
use crate::ids::CourseId;
use crate::semester::semester_rank;

/// Credit value of a course.
///
/// Numbers (and strings that parse as finite numbers) become `Numeric`;
/// anything else that is present keeps its original text in `Raw`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Credits {
    Numeric(f64),
    Raw(String),
    #[default]
    Missing,
}

impl Credits {
    /// Normalize a raw JSON credits value.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Credits::Missing,
            Value::Number(n) => match n.as_f64() {
                Some(v) if v.is_finite() => Credits::Numeric(v),
                _ => Credits::Raw(n.to_string()),
            },
            Value::String(s) => Self::from_text(s),
            Value::Bool(b) => Credits::Raw(b.to_string()),
            other => Credits::Raw(other.to_string()),
        }
    }

    /// Normalize a textual credits value.
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Credits::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Credits::Numeric(v),
            _ => Credits::Raw(text.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Credits::Missing)
    }

    /// Rendered form, `None` when missing.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Credits::Missing => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credits::Numeric(v) => write!(f, "{v}"),
            Credits::Raw(s) => f.write_str(s),
            Credits::Missing => Ok(()),
        }
    }
}

/// A normalized course record.
///
/// Built once per file load and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    /// "Season YYYY" token, e.g. `Fall 2024`.
    pub posted_time: Option<String>,
    #[serde(rename = "type")]
    pub course_type: Option<String>,
    pub level: Option<String>,
    #[serde(default)]
    pub credits: Credits,
    pub instructor: Option<String>,
    pub skill: Option<String>,
    pub department: Option<String>,
    pub detail: Option<String>,
    /// The source object this course was built from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<Map<String, Value>>,
}

impl Course {
    pub fn new(id: CourseId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            posted_time: None,
            course_type: None,
            level: None,
            credits: Credits::Missing,
            instructor: None,
            skill: None,
            department: None,
            detail: None,
            raw: None,
        }
    }

    #[must_use]
    pub fn with_posted_time(mut self, value: impl Into<String>) -> Self {
        self.posted_time = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, value: impl Into<String>) -> Self {
        self.course_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_level(mut self, value: impl Into<String>) -> Self {
        self.level = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_credits(mut self, credits: Credits) -> Self {
        self.credits = credits;
        self
    }

    #[must_use]
    pub fn with_instructor(mut self, value: impl Into<String>) -> Self {
        self.instructor = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_skill(mut self, value: impl Into<String>) -> Self {
        self.skill = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_department(mut self, value: impl Into<String>) -> Self {
        self.department = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_detail(mut self, value: impl Into<String>) -> Self {
        self.detail = Some(value.into());
        self
    }

    /// Stringified value of a facet attribute; `None` when null or empty.
    pub fn facet_value(&self, key: FacetKey) -> Option<String> {
        let text = match key {
            FacetKey::Credits => return self.credits.as_text(),
            FacetKey::Level => self.level.as_deref(),
            FacetKey::Instructor => self.instructor.as_deref(),
            FacetKey::Department => self.department.as_deref(),
            FacetKey::Type => self.course_type.as_deref(),
            FacetKey::Skill => self.skill.as_deref(),
        };
        text.filter(|s| !s.is_empty()).map(str::to_string)
    }

    /// Chronological rank of `posted_time`, `None` when absent or unparseable.
    pub fn semester_rank(&self) -> Option<u32> {
        self.posted_time.as_deref().and_then(semester_rank)
    }
}
