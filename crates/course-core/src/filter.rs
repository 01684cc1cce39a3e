//! Exact-match facet filtering.

use std::collections::BTreeMap;

use serde::Serialize;

use course_model::{Course, FacetKey};

/// Active filter selections: at most one value per facet.
///
/// Keys without a selection are unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterState(BTreeMap<FacetKey, String>);

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a value for `key`; `None` or an empty value clears it.
    pub fn set(&mut self, key: FacetKey, value: Option<&str>) {
        match value {
            Some(value) if !value.is_empty() => {
                self.0.insert(key, value.to_string());
            }
            _ => {
                self.0.remove(&key);
            }
        }
    }

    #[must_use]
    pub fn with(mut self, key: FacetKey, value: &str) -> Self {
        self.set(key, Some(value));
        self
    }

    pub fn get(&self, key: FacetKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FacetKey, &str)> + '_ {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every selection matches the course, ignoring case.
    pub fn matches(&self, course: &Course) -> bool {
        self.0.iter().all(|(key, wanted)| {
            course
                .facet_value(*key)
                .is_some_and(|value| value.to_lowercase() == wanted.to_lowercase())
        })
    }
}

/// Courses passing every active filter, in their original order.
pub fn filter_courses<'a>(courses: &'a [Course], filters: &FilterState) -> Vec<&'a Course> {
    courses
        .iter()
        .filter(|course| filters.matches(course))
        .collect()
}
