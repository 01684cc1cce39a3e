//! Facet derivation from loaded courses.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use course_model::{Course, FacetKey};

use crate::collate::collate;

/// Selectable values per active facet, in facet offering order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FacetOptions(BTreeMap<FacetKey, Vec<String>>);

impl FacetOptions {
    /// Active facet keys.
    pub fn keys(&self) -> impl Iterator<Item = FacetKey> + '_ {
        self.0.keys().copied()
    }

    pub fn get(&self, key: FacetKey) -> Option<&[String]> {
        self.0.get(&key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: FacetKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FacetKey, &[String])> + '_ {
        self.0.iter().map(|(key, values)| (*key, values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Candidate keys with at least one non-empty value, in candidate order.
pub fn derive_facets(courses: &[Course]) -> Vec<FacetKey> {
    FacetKey::ALL
        .into_iter()
        .filter(|key| courses.iter().any(|course| course.facet_value(*key).is_some()))
        .collect()
}

/// Distinct observed values for each key, sorted case-insensitively.
///
/// Values equal under collation keep first-seen order.
pub fn build_facet_options(courses: &[Course], keys: &[FacetKey]) -> FacetOptions {
    let mut options = BTreeMap::new();
    for &key in keys {
        let mut seen = HashSet::new();
        let mut values: Vec<String> = courses
            .iter()
            .filter_map(|course| course.facet_value(key))
            .filter(|value| seen.insert(value.clone()))
            .collect();
        values.sort_by(|a, b| collate(a, b));
        options.insert(key, values);
    }
    FacetOptions(options)
}
